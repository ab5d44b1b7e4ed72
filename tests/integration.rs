// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};
use tempfile::tempdir;
use toast_notifier::config::{self, Config};
use toast_notifier::document::{Document, DocumentTree};
use toast_notifier::error::{DocumentError, Error};
use toast_notifier::notifications::{show_notification, Category, Expiry, Flashes, Notification};

#[test]
fn saved_scenario_appends_one_success_toast() {
    let mut doc = Document::new();
    let before = doc.body_children().len();

    let id = show_notification(&mut doc, "Saved!", "success").expect("body exists");

    assert_eq!(doc.body_children().len(), before + 1);
    assert_eq!(doc.body_children().last(), Some(&id));
    let element = doc.element(id).expect("node exists");
    assert_eq!(element.classes(), &["toast", "toast-success"]);
    assert_eq!(element.text_content(), "Saved!");
}

#[test]
fn script_message_is_text_not_markup() {
    let mut doc = Document::new();
    let id = show_notification(&mut doc, "<script>x</script>", "error").expect("body exists");

    assert_eq!(doc.element(id).unwrap().text_content(), "<script>x</script>");
    assert!(doc.children(id).is_empty(), "no element was parsed out of the text");
    let html = doc.to_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
}

#[test]
fn n_calls_append_n_nodes_in_call_order() {
    let mut doc = Document::new();
    let calls = [
        ("Please login first", "error"),
        ("Token no. 12", "success"),
        ("Heads up", "info"),
        ("odd type", "x y"),
        ("Heads up", "info"),
    ];

    for (message, kind) in calls {
        show_notification(&mut doc, message, kind).expect("body exists");
    }

    let children = doc.body_children();
    assert_eq!(children.len(), calls.len());
    for (id, (message, kind)) in children.iter().zip(calls) {
        let element = doc.element(*id).unwrap();
        assert_eq!(element.text_content(), message);
        assert_eq!(element.classes().len(), 2);
        assert!(element.has_class("toast"));
        assert!(element.has_class(&format!("toast-{kind}")));
    }
}

#[test]
fn calling_before_document_is_ready_propagates_missing_body() {
    let mut doc = Document::loading();

    let result = show_notification(&mut doc, "early", "info");

    assert_eq!(result, Err(Error::Document(DocumentError::MissingBody)));
    assert_eq!(doc.to_html(), "<html></html>");
}

#[test]
fn flashes_wait_for_ready_document_then_render_in_order() {
    let mut flashes = Flashes::new();
    flashes.flash("Product not found", "error");
    flashes.push(Notification::success("Token no. 4"));

    let mut doc = Document::loading();
    assert!(flashes.drain_into(&mut doc).is_err());
    assert_eq!(flashes.len(), 2);

    doc.attach_body();
    let ids = flashes.drain_into(&mut doc).expect("body exists");
    let texts: Vec<&str> = ids
        .iter()
        .map(|id| doc.element(*id).unwrap().text_content())
        .collect();
    assert_eq!(texts, vec!["Product not found", "Token no. 4"]);
}

#[test]
fn expiry_driven_by_config_policy() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[toast]\nauto_dismiss = true\nsuccess_secs = 2\nerror_secs = 4\n",
    )
    .expect("failed to write config");

    let config: Config = config::load_from_path(&path).expect("valid config");
    assert!(config.toast.auto_dismiss);
    let mut expiry = Expiry::new(config.toast.dismiss_policy());

    let mut doc = Document::new();
    let start = Instant::now();
    for (message, kind) in [("ok", "success"), ("bad", "error")] {
        let id = show_notification(&mut doc, message, kind).unwrap();
        expiry.track(id, &Category::from(kind), start);
    }

    let removed = expiry.sweep(&mut doc, start + Duration::from_secs(2)).unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(doc.body_children().len(), 1);

    expiry.sweep(&mut doc, start + Duration::from_secs(4)).unwrap();
    assert!(doc.body_children().is_empty());
    assert!(doc.body().is_some());
}

#[test]
fn dismissed_toasts_do_not_grow_the_document() {
    let mut doc = Document::new();
    let mut expiry = Expiry::default();

    for round in 0..10_000 {
        let id = show_notification(&mut doc, &format!("saved {round}"), "success").unwrap();
        assert!(expiry.dismiss(&mut doc, id).unwrap());
    }

    assert_eq!(doc.slot_count(), 3);
    assert!(doc.body_children().is_empty());
}
