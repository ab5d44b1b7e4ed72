// SPDX-License-Identifier: MPL-2.0
//! Flash messages: notifications recorded now and shown on the next render.
//!
//! Request handlers flash a message while the page is not yet built; the
//! pending flashes are drained into the document once its body exists.

use super::notification::Notification;
use crate::document::{DocumentTree, NodeId};
use crate::error::{DocumentError, Result};
use std::collections::VecDeque;

/// Category used by [`Flashes::flash_message`].
pub const DEFAULT_CATEGORY: &str = "message";

/// Pending flash messages, oldest first.
#[derive(Debug, Default, Clone)]
pub struct Flashes {
    pending: VecDeque<Notification>,
}

impl Flashes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message to show on the next drain.
    pub fn flash(&mut self, message: impl Into<String>, category: &str) {
        self.pending.push_back(Notification::new(category, message));
    }

    /// Records a message with the default category.
    pub fn flash_message(&mut self, message: impl Into<String>) {
        self.flash(message, DEFAULT_CATEGORY);
    }

    /// Records an already built notification.
    pub fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending notifications without consuming them.
    pub fn peek(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    /// Shows every pending flash in the order it was recorded.
    ///
    /// A document without a body is rejected before anything is consumed,
    /// so the flashes stay pending for a later render.
    pub fn drain_into<D>(&mut self, doc: &mut D) -> Result<Vec<NodeId>>
    where
        D: DocumentTree + ?Sized,
    {
        if doc.body().is_none() {
            return Err(DocumentError::MissingBody.into());
        }

        let mut shown = Vec::with_capacity(self.pending.len());
        while let Some(notification) = self.pending.pop_front() {
            shown.push(notification.show(doc)?);
        }
        Ok(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::error::Error;

    #[test]
    fn new_queue_is_empty() {
        let flashes = Flashes::new();
        assert!(flashes.is_empty());
        assert_eq!(flashes.len(), 0);
    }

    #[test]
    fn drain_shows_flashes_in_fifo_order() {
        let mut flashes = Flashes::new();
        flashes.flash("Not enough quantity available", "error");
        flashes.flash("Token no. 7", "success");
        flashes.flash_message("Welcome back");

        let mut doc = Document::new();
        let ids = flashes.drain_into(&mut doc).unwrap();

        assert!(flashes.is_empty());
        assert_eq!(doc.body_children(), ids.as_slice());
        let rendered: Vec<(String, &str)> = ids
            .iter()
            .map(|id| {
                let element = doc.element(*id).unwrap();
                (element.class_name(), element.text_content())
            })
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("toast toast-error".to_string(), "Not enough quantity available"),
                ("toast toast-success".to_string(), "Token no. 7"),
                ("toast toast-message".to_string(), "Welcome back"),
            ]
        );
    }

    #[test]
    fn drain_into_loading_document_keeps_flashes() {
        let mut flashes = Flashes::new();
        flashes.flash("Please login first", "error");

        let mut doc = Document::loading();
        let err = flashes.drain_into(&mut doc).unwrap_err();

        assert_eq!(err, Error::Document(DocumentError::MissingBody));
        assert_eq!(flashes.len(), 1);

        doc.attach_body();
        let ids = flashes.drain_into(&mut doc).unwrap();
        assert_eq!(ids.len(), 1);
        assert!(flashes.is_empty());
    }

    #[test]
    fn peek_does_not_consume() {
        let mut flashes = Flashes::new();
        flashes.push(Notification::info("hello"));

        assert_eq!(flashes.peek().count(), 1);
        assert_eq!(flashes.len(), 1);
    }

    #[test]
    fn draining_empty_queue_changes_nothing() {
        let mut doc = Document::new();
        let ids = Flashes::new().drain_into(&mut doc).unwrap();

        assert!(ids.is_empty());
        assert!(doc.body_children().is_empty());
    }
}
