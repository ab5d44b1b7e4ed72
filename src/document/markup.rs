// SPDX-License-Identifier: MPL-2.0
//! HTML serialization.
//!
//! Text content and attribute values are escaped, so a message containing
//! markup always serializes as literal characters.

use super::{Document, NodeId};

/// Escapes `&`, `<`, `>` and `"` for use in text or a quoted attribute.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Whether `tag` can be used as an element name: an ASCII letter followed by
/// ASCII letters, digits or `-`. Such names never need escaping.
#[must_use]
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

pub(super) fn serialize(document: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(document, node, &mut out);
    out
}

fn write_node(document: &Document, node: NodeId, out: &mut String) {
    let Some(element) = document.element(node) else {
        return;
    };

    out.push('<');
    out.push_str(element.tag());
    if !element.classes().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_text(&element.class_name()));
        out.push('"');
    }
    out.push('>');

    out.push_str(&escape_text(element.text_content()));
    for child in element.children() {
        write_node(document, *child, out);
    }

    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentTree;

    #[test]
    fn escape_text_handles_markup_characters() {
        assert_eq!(
            escape_text(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_text_leaves_plain_text_alone() {
        assert_eq!(escape_text("Token no. 42"), "Token no. 42");
    }

    #[test]
    fn tag_names_must_start_with_a_letter() {
        assert!(is_valid_tag_name("div"));
        assert!(is_valid_tag_name("x-toast"));
        assert!(is_valid_tag_name("h1"));
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("-x"));
        assert!(!is_valid_tag_name("x><script"));
        assert!(!is_valid_tag_name("x/"));
    }

    #[test]
    fn rejected_tag_never_reaches_the_markup() {
        let mut doc = Document::new();
        assert!(doc.create_element("x><script").is_err());
        assert_eq!(doc.to_html(), "<html><body></body></html>");
    }

    #[test]
    fn empty_document_serializes_html_and_body() {
        assert_eq!(Document::new().to_html(), "<html><body></body></html>");
        assert_eq!(Document::loading().to_html(), "<html></html>");
    }

    #[test]
    fn nested_elements_serialize_in_order() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();
        let first = doc.create_element("p").unwrap();
        let second = doc.create_element("div").unwrap();
        doc.set_text_content(first, "one").unwrap();
        doc.add_class(second, "box").unwrap();
        doc.append_child(body, first).unwrap();
        doc.append_child(body, second).unwrap();

        assert_eq!(
            doc.to_html(),
            "<html><body><p>one</p><div class=\"box\"></div></body></html>"
        );
    }
}
