//! Build help messages and other structured terminal output from a tree of
//! items.
//!
//! A message is assembled bottom-up: starting from an empty root [`Item`],
//! each call to [`Item::add_text`] or [`Item::add_definition`] appends a
//! child and returns a handle to it, with every level of nesting indented
//! one increment further. Calling [`Item::format`] on any node walks the
//! subtree in document order and produces the final wrapped, marked-up
//! string.
//!
//! Inline markup comes from two sources. Manual markup is written directly
//! in the input text (`*emphasized*` and `**strong**`) and is stripped out
//! before wrapping. Automatic markup is derived from the structure of a
//! definition: the term is strong, argument names are emphasized, both in
//! the argument string and wherever they appear in the message. Both kinds
//! are recorded as substring/occurrence pairs and only converted to escape
//! sequences after wrapping, so the invisible control codes never count
//! toward line widths.
//!
//! ```
//! use galley::items::{DefinitionStyle, Formatter, Item};
//!
//! let root = Item::new(Formatter::default());
//! root.add_text("Usage: snapshot [command]", None, None).unwrap();
//! root.add_definition(
//!     "diff",
//!     "[options] number1..number2 [files]",
//!     "Compare the snapshots number1 and number2.",
//!     DefinitionStyle::Block,
//!     None,
//!     None,
//! )
//! .unwrap();
//!
//! println!("{}", root.format());
//! ```

pub mod ansi;
pub mod items;
pub mod markup;
pub mod wrap;

pub use crate::items::{Content, DefinitionStyle, Formatter, Item, TreeError};
pub use crate::markup::MarkupPositions;
