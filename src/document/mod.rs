// SPDX-License-Identifier: MPL-2.0
//! Host document tree that notifications are appended to.
//!
//! The notifier only needs a handful of operations from its host: find the
//! body, create an element, give it text and classes, and attach it. Those
//! operations form the [`DocumentTree`] trait so any live UI tree can stand
//! in as the host. [`Document`] is the in-memory implementation used by the
//! demo application and by tests.
//!
//! # Components
//!
//! - [`tree`] - `Document`, an arena-backed element tree
//! - [`markup`] - HTML serialization with text escaping

mod markup;
mod tree;

pub use markup::{escape_text, is_valid_tag_name};
pub use tree::{Document, Element};

use crate::error::Result;
use std::fmt;

/// Handle to an element inside a [`Document`].
///
/// Slots of removed elements are reused; the generation makes handles to a
/// removed element stale instead of aliasing its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub(crate) fn from_raw(index: usize) -> Self {
        Self::new(index, 0)
    }

    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub(crate) fn index(self) -> usize {
        self.index
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "#{}", self.index)
        } else {
            write!(f, "#{}@{}", self.index, self.generation)
        }
    }
}

/// Operations a host tree must provide to receive notifications.
pub trait DocumentTree {
    /// Returns the body element, or `None` while the document is not ready.
    fn body(&self) -> Option<NodeId>;

    /// Creates a detached element with the given tag name.
    ///
    /// Fails with `InvalidTagName` unless the name is an ASCII letter
    /// followed by ASCII letters, digits or `-`.
    fn create_element(&mut self, tag: &str) -> Result<NodeId>;

    /// Replaces the element's text content. The text is never parsed as markup.
    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()>;

    /// Adds one class token, verbatim. Existing tokens are not duplicated.
    fn add_class(&mut self, node: NodeId, class: &str) -> Result<()>;

    /// Appends `child` as the last child of `parent`, detaching it first if
    /// it is already attached elsewhere.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Detaches `child` from `parent`. Hosts may release the removed subtree,
    /// after which its handles are unknown.
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Returns the parent of `node`, if attached.
    fn parent(&self, node: NodeId) -> Option<NodeId>;
}
