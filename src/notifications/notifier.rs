// SPDX-License-Identifier: MPL-2.0
//! The notifier: one call, one toast element appended to the body.

use super::category::{class_for, BASE_CLASS};
use crate::document::{DocumentTree, NodeId};
use crate::error::{DocumentError, Result};

/// Tag name used for toast elements.
pub const TOAST_TAG: &str = "div";

/// Appends a toast showing `message` to the body of `doc`.
///
/// The element gets the classes `toast` and `toast-<kind>`; `kind` is not
/// validated. `message` is set as text content and is never interpreted as
/// markup. Nothing is ever removed here.
///
/// Fails with [`DocumentError::MissingBody`] when the document is not ready,
/// in which case the tree is left untouched.
pub fn show_notification<D>(doc: &mut D, message: &str, kind: &str) -> Result<NodeId>
where
    D: DocumentTree + ?Sized,
{
    let body = doc.body().ok_or(DocumentError::MissingBody)?;

    let toast = doc.create_element(TOAST_TAG)?;
    doc.add_class(toast, BASE_CLASS)?;
    doc.add_class(toast, &class_for(kind))?;
    doc.set_text_content(toast, message)?;
    doc.append_child(body, toast)?;

    log::debug!("toast {} shown (type {:?})", toast, kind);
    Ok(toast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::error::Error;

    #[test]
    fn saved_success_scenario() {
        let mut doc = Document::new();
        let id = show_notification(&mut doc, "Saved!", "success").unwrap();

        assert_eq!(doc.body_children(), &[id]);
        let element = doc.element(id).unwrap();
        assert_eq!(element.tag(), "div");
        assert_eq!(element.class_name(), "toast toast-success");
        assert_eq!(element.text_content(), "Saved!");
    }

    #[test]
    fn markup_in_message_stays_literal() {
        let mut doc = Document::new();
        let id = show_notification(&mut doc, "<script>x</script>", "error").unwrap();

        let element = doc.element(id).unwrap();
        assert_eq!(element.text_content(), "<script>x</script>");
        assert!(doc.children(id).is_empty());
        assert_eq!(
            doc.to_html(),
            "<html><body><div class=\"toast toast-error\">\
             &lt;script&gt;x&lt;/script&gt;</div></body></html>"
        );
    }

    #[test]
    fn each_call_appends_exactly_one_node_in_order() {
        let mut doc = Document::new();
        let calls = [("one", "info"), ("two", "warning"), ("three", "whatever")];

        let mut ids = Vec::new();
        for (i, (message, kind)) in calls.iter().enumerate() {
            ids.push(show_notification(&mut doc, message, kind).unwrap());
            assert_eq!(doc.body_children().len(), i + 1);
        }

        assert_eq!(doc.body_children(), ids.as_slice());
        for (id, (message, kind)) in ids.iter().zip(calls) {
            let element = doc.element(*id).unwrap();
            assert_eq!(element.text_content(), message);
            assert_eq!(element.classes(), &["toast".to_string(), format!("toast-{kind}")]);
        }
    }

    #[test]
    fn identical_calls_are_not_deduplicated() {
        let mut doc = Document::new();
        let a = show_notification(&mut doc, "same", "info").unwrap();
        let b = show_notification(&mut doc, "same", "info").unwrap();

        assert_ne!(a, b);
        assert_eq!(doc.body_children().len(), 2);
    }

    #[test]
    fn empty_message_and_type_are_accepted() {
        let mut doc = Document::new();
        let id = show_notification(&mut doc, "", "").unwrap();

        let element = doc.element(id).unwrap();
        assert_eq!(element.text_content(), "");
        assert_eq!(element.classes(), &["toast", "toast-"]);
    }

    #[test]
    fn missing_body_fails_without_mutating() {
        let mut doc = Document::loading();
        let before = doc.to_html();

        let err = show_notification(&mut doc, "too early", "info").unwrap_err();

        assert_eq!(err, Error::Document(DocumentError::MissingBody));
        assert_eq!(doc.to_html(), before);
        assert!(doc.element(NodeId::from_raw(1)).is_none());
    }

    #[test]
    fn works_through_trait_object() {
        let mut doc = Document::new();
        let host: &mut dyn DocumentTree = &mut doc;
        let id = show_notification(host, "dyn", "info").unwrap();

        assert_eq!(doc.body_children(), &[id]);
    }
}
