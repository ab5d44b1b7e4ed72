// SPDX-License-Identifier: MPL-2.0
//! Arena-backed element tree.

use super::{DocumentTree, NodeId};
use crate::error::{DocumentError, Result};

/// A single element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Class tokens in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Space-separated class list, as the `class` attribute would read.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    #[must_use]
    pub fn text_content(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Arena slot. A vacated slot keeps its generation so stale handles miss.
#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// In-memory document: an `html` root and, once ready, a `body` child.
///
/// Removing a child releases its whole subtree; released slots are reused by
/// later `create_element` calls.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    body: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a ready document with an empty body.
    #[must_use]
    pub fn new() -> Self {
        let mut document = Self::loading();
        document.attach_body();
        document
    }

    /// Creates a document whose body has not been parsed yet.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                element: Some(Element::new("html")),
            }],
            free: Vec::new(),
            root: NodeId::from_raw(0),
            body: None,
        }
    }

    /// Adds the body element if missing and returns it.
    pub fn attach_body(&mut self) -> NodeId {
        if let Some(body) = self.body {
            return body;
        }
        let root = self.root;
        let body = self.alloc(Element::new("body"));
        if let Some(element) = self.get_mut(body) {
            element.parent = Some(root);
        }
        if let Some(element) = self.get_mut(root) {
            element.children.push(body);
        }
        self.body = Some(body);
        body
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The element behind `id`, or `None` if it was never created or has been
    /// removed.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.element.as_ref())
    }

    /// Children of `id` in document order; empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.element(id) {
            Some(element) => element.children(),
            None => &[],
        }
    }

    /// Children of the body, or nothing while the document is loading.
    #[must_use]
    pub fn body_children(&self) -> &[NodeId] {
        match self.body {
            Some(body) => self.children(body),
            None => &[],
        }
    }

    /// Number of live elements, attached or not.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of arena slots, live or free. Grows only when no released
    /// slot is available.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Serializes the whole tree as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        super::markup::serialize(self, self.root)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.element.as_mut())
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        self.get_mut(id)
            .ok_or_else(|| DocumentError::UnknownNode(id).into())
    }

    fn ensure_known(&self, id: NodeId) -> Result<()> {
        match self.element(id) {
            Some(_) => Ok(()),
            None => Err(DocumentError::UnknownNode(id).into()),
        }
    }

    fn alloc(&mut self, element: Element) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.element = Some(element);
            return NodeId::new(index, slot.generation);
        }
        let index = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            element: Some(element),
        });
        NodeId::from_raw(index)
    }

    /// Frees `node` and its descendants. The node must already be detached.
    fn release(&mut self, node: NodeId) {
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            let Some(slot) = self
                .slots
                .get_mut(id.index())
                .filter(|slot| slot.generation == id.generation())
            else {
                continue;
            };
            let Some(element) = slot.element.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.index());
            if self.body == Some(id) {
                self.body = None;
            }
            pending.extend(element.children);
        }
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.element(id).and_then(Element::parent);
        }
        false
    }

    fn detach(&mut self, child: NodeId) {
        let old_parent = self.get_mut(child).and_then(|element| element.parent.take());
        if let Some(parent) = old_parent.and_then(|id| self.get_mut(id)) {
            parent.children.retain(|c| *c != child);
        }
    }
}

impl DocumentTree for Document {
    fn body(&self) -> Option<NodeId> {
        self.body
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        if !super::is_valid_tag_name(tag) {
            return Err(DocumentError::InvalidTagName.into());
        }
        Ok(self.alloc(Element::new(tag)))
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()> {
        let element = self.element_mut(node)?;
        element.text.clear();
        element.text.push_str(text);
        Ok(())
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        let element = self.element_mut(node)?;
        if !element.has_class(class) {
            element.classes.push(class.to_string());
        }
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.ensure_known(parent)?;
        self.ensure_known(child)?;
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DocumentError::HierarchyRequest { parent, child }.into());
        }

        self.detach(child);
        self.element_mut(child)?.parent = Some(parent);
        self.element_mut(parent)?.children.push(child);
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.ensure_known(parent)?;
        if self.element_mut(child)?.parent != Some(parent) {
            return Err(DocumentError::NotAChild { parent, child }.into());
        }
        self.detach(child);
        self.release(child);
        Ok(())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(Element::parent)
    }
}
