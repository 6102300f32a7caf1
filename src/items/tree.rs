//! Construction and traversal of the item tree

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::items::layout;
use crate::items::{Formatter, TreeError};

/// Layout styles for definition items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionStyle {
    /// Message on its own line, indented one increment past the signature.
    Block,
    /// Message on its own line, indented to the column shared by aligned
    /// siblings.
    Overflow,
    /// Message on the same line as the signature, with a hanging indent
    /// when it wraps.
    Inline,
    /// Message on the same line, starting at the column shared by all
    /// aligned siblings of the same parent.
    Aligned,
}

/// The content payload of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// The synthetic root of a tree carries no content.
    Empty,
    /// Plain text, wrapped to the configured width.
    Text(String),
    /// A term being defined, its argument string and a description, any of
    /// which may be blank.
    Definition {
        term: String,
        args: String,
        message: String,
        style: DefinitionStyle,
    },
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) content: Content,
    pub(crate) id: Option<String>,
    pub(crate) indent: usize,
    pub(crate) formatter: Formatter,
    pub(crate) excluded: bool,
    pub(crate) parent: Weak<RefCell<Node>>,
    pub(crate) children: Vec<Item>,
}

/// A handle to one node of an item tree.
///
/// Handles are cheap to clone and all refer to the same underlying node.
/// New items are created only through [`Item::add_text`] and
/// [`Item::add_definition`] on an existing item; the tree is built once,
/// then rendered as often as needed with [`Item::format`].
#[derive(Debug, Clone)]
pub struct Item {
    pub(crate) node: Rc<RefCell<Node>>,
}

impl Item {
    /// Create the root of a new item tree. The root carries no content of
    /// its own and its direct children are not indented.
    pub fn new(formatter: Formatter) -> Item {
        Item {
            node: Rc::new(RefCell::new(Node {
                content: Content::Empty,
                id: None,
                indent: 0,
                formatter,
                excluded: false,
                parent: Weak::new(),
                children: Vec::new(),
            })),
        }
    }

    /// Whether two handles refer to the same node.
    pub fn same(&self, other: &Item) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    // Tree building
    // =============

    /// Add a text item under this item and return the new child.
    ///
    /// The child inherits this item's formatter unless one is supplied. An
    /// identifier must be unique across the whole tree.
    pub fn add_text(
        &self,
        text: &str,
        formatter: Option<Formatter>,
        id: Option<&str>,
    ) -> Result<Item, TreeError> {
        self.attach(Content::Text(text.to_string()), formatter, id)
    }

    /// Add a definition item under this item and return the new child.
    pub fn add_definition(
        &self,
        term: &str,
        args: &str,
        message: &str,
        style: DefinitionStyle,
        formatter: Option<Formatter>,
        id: Option<&str>,
    ) -> Result<Item, TreeError> {
        self.attach(
            Content::Definition {
                term: term.to_string(),
                args: args.to_string(),
                message: message.to_string(),
                style,
            },
            formatter,
            id,
        )
    }

    fn attach(
        &self,
        content: Content,
        formatter: Option<Formatter>,
        id: Option<&str>,
    ) -> Result<Item, TreeError> {
        if let Some(id) = id {
            if self.lookup(id).is_some() {
                return Err(TreeError::DuplicateId(id.to_string()));
            }
        }

        let (indent, inherited) = {
            let node = self.node.borrow();
            (node.indent + node.indent_step(), node.formatter.clone())
        };

        let child = Item {
            node: Rc::new(RefCell::new(Node {
                content,
                id: id.map(str::to_string),
                indent,
                formatter: formatter.unwrap_or(inherited),
                excluded: false,
                parent: Rc::downgrade(&self.node),
                children: Vec::new(),
            })),
        };

        self.node
            .borrow_mut()
            .children
            .push(child.clone());

        Ok(child)
    }

    /// Move `subtree` out of its current tree and attach it under this
    /// item, re-basing the indentation of the subtree and all of its
    /// descendants to their new position.
    pub fn graft(&self, subtree: &Item) -> Result<(), TreeError> {
        if Rc::ptr_eq(&self.root().node, &subtree.root().node) {
            return Err(TreeError::RecursiveGraft);
        }

        for item in subtree.items(None) {
            let id = item
                .node
                .borrow()
                .id
                .clone();
            if let Some(id) = id {
                if self.lookup(&id).is_some() {
                    return Err(TreeError::DuplicateId(id));
                }
            }
        }

        if let Some(old_parent) = subtree
            .node
            .borrow()
            .parent
            .upgrade()
        {
            old_parent
                .borrow_mut()
                .children
                .retain(|child| !Rc::ptr_eq(&child.node, &subtree.node));
        }

        let indent = {
            let node = self.node.borrow();
            node.indent + node.indent_step()
        };

        {
            let mut node = subtree.node.borrow_mut();
            node.parent = Rc::downgrade(&self.node);
            node.indent = indent;
        }
        subtree.rebase_descendants();

        self.node
            .borrow_mut()
            .children
            .push(subtree.clone());

        debug!("grafted subtree at {} spaces of indent", indent);
        Ok(())
    }

    fn rebase_descendants(&self) {
        let (indent, children) = {
            let node = self.node.borrow();
            (node.indent + node.indent_step(), node.children.clone())
        };

        for child in children {
            child
                .node
                .borrow_mut()
                .indent = indent;
            child.rebase_descendants();
        }
    }

    // Lookup and traversal
    // ====================

    /// The root of the tree this item belongs to.
    pub fn root(&self) -> Item {
        let mut current = self.clone();
        loop {
            let parent = current
                .node
                .borrow()
                .parent
                .upgrade();
            match parent {
                Some(node) => current = Item { node },
                None => return current,
            }
        }
    }

    pub fn is_root(&self) -> bool {
        self.node
            .borrow()
            .parent
            .upgrade()
            .is_none()
    }

    /// Find an item by identifier, searching the whole tree from the root.
    pub fn lookup(&self, id: &str) -> Option<Item> {
        self.root()
            .items(None)
            .into_iter()
            .find(|item| {
                item.node
                    .borrow()
                    .id
                    .as_deref()
                    == Some(id)
            })
    }

    /// Like [`Item::lookup`], but an absent identifier is an error.
    pub fn require(&self, id: &str) -> Result<Item, TreeError> {
        self.lookup(id)
            .ok_or_else(|| TreeError::UnknownId(id.to_string()))
    }

    /// This item and all of its descendants in document order, descending
    /// at most `levels` levels when a limit is given.
    pub fn items(&self, levels: Option<usize>) -> Vec<Item> {
        let mut found = Vec::new();
        self.collect(levels, 0, &mut found);
        found
    }

    fn collect(&self, levels: Option<usize>, depth: usize, found: &mut Vec<Item>) {
        found.push(self.clone());

        if levels.map_or(true, |limit| depth < limit) {
            let children = self
                .node
                .borrow()
                .children
                .clone();
            for child in children {
                child.collect(levels, depth + 1, found);
            }
        }
    }

    // Accessors
    // =========

    pub fn content(&self) -> Content {
        self.node
            .borrow()
            .content
            .clone()
    }

    pub fn id(&self) -> Option<String> {
        self.node
            .borrow()
            .id
            .clone()
    }

    /// The stored indentation of this item, in spaces.
    pub fn indent(&self) -> usize {
        self.node
            .borrow()
            .indent
    }

    /// The indentation level, derived from the indent and the formatter's
    /// increment.
    pub fn level(&self) -> usize {
        let node = self.node.borrow();
        if node.formatter.indent_spaces == 0 {
            0
        } else {
            node.indent / node.formatter.indent_spaces
        }
    }

    pub fn children(&self) -> Vec<Item> {
        self.node
            .borrow()
            .children
            .clone()
    }

    pub fn parent(&self) -> Option<Item> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| Item { node })
    }

    pub fn formatter(&self) -> Formatter {
        self.node
            .borrow()
            .formatter
            .clone()
    }

    /// Replace this item's formatter. Only this item's own later rendering
    /// is affected; children keep the formatter they were created with.
    pub fn set_formatter(&self, formatter: Formatter) {
        self.node
            .borrow_mut()
            .formatter = formatter;
    }

    /// Whether this item is excluded from output. An excluded item
    /// contributes nothing to the rendered text and its children are
    /// promoted one level, as if the item were a root.
    pub fn excluded(&self) -> bool {
        self.node
            .borrow()
            .excluded
    }

    pub fn set_excluded(&self, excluded: bool) {
        self.node
            .borrow_mut()
            .excluded = excluded;
    }

    // Rendering
    // =========

    /// Render this item and all of its descendants, joined with newlines.
    /// The output is flush with the left edge no matter how deep this item
    /// sits in its tree.
    pub fn format(&self) -> String {
        self.render(None)
    }

    /// Like [`Item::format`], descending only `levels` levels of nesting.
    pub fn format_levels(&self, levels: usize) -> String {
        self.render(Some(levels))
    }

    /// Render starting from the item with the given identifier.
    pub fn format_from(&self, id: &str, levels: Option<usize>) -> Result<String, TreeError> {
        let target = self.require(id)?;
        Ok(target.render(levels))
    }

    fn render(&self, levels: Option<usize>) -> String {
        debug!("formatting item tree");

        let mut rendered = Vec::new();
        self.render_into(levels, 0, 0, &mut rendered);
        rendered.join("\n")
    }

    /// Indentation is computed during the walk, relative to the render
    /// root; nothing is written back into the nodes, so rendering is
    /// repeatable from any starting point.
    fn render_into(
        &self,
        levels: Option<usize>,
        depth: usize,
        indent: usize,
        rendered: &mut Vec<String>,
    ) {
        let (empty, excluded, visible) = {
            let node = self.node.borrow();
            (
                matches!(node.content, Content::Empty),
                node.excluded,
                node.formatter.visible,
            )
        };

        let step = if empty || excluded {
            0
        } else {
            if visible {
                if let Some(output) = layout::render_item(self, indent) {
                    rendered.push(output);
                }
            }
            self.node
                .borrow()
                .formatter
                .indent_spaces
        };

        if levels.map_or(true, |limit| depth < limit) {
            let children = self
                .node
                .borrow()
                .children
                .clone();
            for child in children {
                child.render_into(levels, depth + 1, indent + step, rendered);
            }
        }
    }
}

impl Node {
    /// How much deeper this node's children sit than the node itself.
    /// Children of a contentless node share its indentation.
    fn indent_step(&self) -> usize {
        match self.content {
            Content::Empty => 0,
            _ => self.formatter.indent_spaces,
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn children_indent_by_one_increment() {
        let root = Item::new(Formatter::default());
        let first = root
            .add_text("first", None, None)
            .unwrap();
        let second = first
            .add_text("second", None, None)
            .unwrap();

        assert_eq!(first.indent(), 0);
        assert_eq!(second.indent(), 4);
        assert_eq!(second.level(), 1);
    }

    #[test]
    fn lookup_searches_from_the_root() {
        let root = Item::new(Formatter::default());
        let branch = root
            .add_text("branch", None, Some("branch"))
            .unwrap();
        let leaf = branch
            .add_text("leaf", None, Some("leaf"))
            .unwrap();

        let found = leaf
            .lookup("branch")
            .unwrap();
        assert!(found.same(&branch));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let root = Item::new(Formatter::default());
        root.add_text("foo", None, Some("duplicate"))
            .unwrap();

        let result = root.add_text("bar", None, Some("duplicate"));
        assert_eq!(
            result.unwrap_err(),
            TreeError::DuplicateId("duplicate".to_string())
        );
    }

    #[test]
    fn require_reports_unknown_ids() {
        let root = Item::new(Formatter::default());
        assert_eq!(
            root.require("missing")
                .unwrap_err(),
            TreeError::UnknownId("missing".to_string())
        );
    }

    #[test]
    fn graft_rebases_indentation() {
        let destination = Item::new(Formatter::default());
        let section = destination
            .add_text("section", None, None)
            .unwrap();

        let other = Item::new(Formatter::default());
        let moved = other
            .add_text("moved", None, None)
            .unwrap();
        let nested = moved
            .add_text("nested", None, None)
            .unwrap();

        section
            .graft(&moved)
            .unwrap();

        assert!(moved
            .parent()
            .unwrap()
            .same(&section));
        assert_eq!(moved.indent(), 4);
        assert_eq!(nested.indent(), 8);
        assert!(other
            .children()
            .is_empty());
    }

    #[test]
    fn graft_into_own_tree_is_rejected() {
        let root = Item::new(Formatter::default());
        let child = root
            .add_text("child", None, None)
            .unwrap();

        assert_eq!(
            root.graft(&child)
                .unwrap_err(),
            TreeError::RecursiveGraft
        );
    }

    #[test]
    fn graft_checks_identifiers() {
        let destination = Item::new(Formatter::default());
        destination
            .add_text("here", None, Some("clash"))
            .unwrap();

        let other = Item::new(Formatter::default());
        let subtree = other
            .add_text("there", None, Some("clash"))
            .unwrap();

        assert_eq!(
            destination
                .graft(&subtree)
                .unwrap_err(),
            TreeError::DuplicateId("clash".to_string())
        );
    }

    #[test]
    fn traversal_respects_the_level_limit() {
        let root = Item::new(Formatter::default());
        let first = root
            .add_text("first", None, None)
            .unwrap();
        first
            .add_text("second", None, None)
            .unwrap();

        assert_eq!(root.items(None).len(), 3);
        assert_eq!(root.items(Some(1)).len(), 2);
    }
}
