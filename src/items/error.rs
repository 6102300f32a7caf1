//! Errors arising from item tree construction and lookup

use std::{error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An item with this identifier already exists somewhere in the tree.
    DuplicateId(String),
    /// No item with this identifier exists in the tree.
    UnknownId(String),
    /// The subtree being grafted already belongs to the destination tree.
    RecursiveGraft,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::DuplicateId(id) => {
                write!(f, "the item ID '{}' is already in use", id)
            }
            TreeError::UnknownId(id) => {
                write!(f, "an item with the ID '{}' does not exist", id)
            }
            TreeError::RecursiveGraft => {
                write!(f, "an item cannot be grafted into its own tree")
            }
        }
    }
}

impl error::Error for TreeError {}
