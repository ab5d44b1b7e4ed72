// SPDX-License-Identifier: MPL-2.0
//! `toast_notifier` shows transient toast notifications in a document tree.
//!
//! The core is [`notifications::show_notification`], which appends one styled
//! element to the body of any [`document::DocumentTree`]. Around it sit
//! deferred flash messages, opt-in auto-dismiss, a class-based stylesheet, and
//! an Iced front end that renders the toasts.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod notifications;
pub mod ui;
