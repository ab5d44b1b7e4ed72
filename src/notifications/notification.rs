// SPDX-License-Identifier: MPL-2.0
//! Core notification data structure.

use super::category::Category;
use super::notifier::show_notification;
use crate::document::{DocumentTree, NodeId};
use crate::error::Result;

/// A message to show, paired with the category that picks its style.
///
/// Notifications carry no identity of their own; once shown they live on
/// only as a node in the host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    category: Category,
}

impl Notification {
    pub fn new(category: impl Into<Category>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: category.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Category::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Category::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Category::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Category::Error, message)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Appends this notification to the body of `doc`.
    pub fn show<D>(&self, doc: &mut D) -> Result<NodeId>
    where
        D: DocumentTree + ?Sized,
    {
        show_notification(doc, &self.message, self.category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn notification_constructors_set_correct_category() {
        assert_eq!(Notification::success("").category(), &Category::Success);
        assert_eq!(Notification::info("").category(), &Category::Info);
        assert_eq!(Notification::warning("").category(), &Category::Warning);
        assert_eq!(Notification::error("").category(), &Category::Error);
    }

    #[test]
    fn new_accepts_free_form_tags() {
        let notification = Notification::new("message", "Please login first");
        assert_eq!(notification.category(), &Category::Other("message".into()));
        assert_eq!(notification.message(), "Please login first");
    }

    #[test]
    fn show_uses_category_class() {
        let mut doc = Document::new();
        let id = Notification::warning("Low stock").show(&mut doc).unwrap();

        let element = doc.element(id).unwrap();
        assert_eq!(element.class_name(), "toast toast-warning");
        assert_eq!(element.text_content(), "Low stock");
    }
}
