// SPDX-License-Identifier: MPL-2.0
//! Toast notifications appended to a host document.
//!
//! A toast is a non-blocking message shown to the user. Showing one is a
//! single tree mutation: a `div` carrying the classes `toast` and
//! `toast-<type>` with the message as literal text, appended as the last
//! child of the document body.
//!
//! # Components
//!
//! - [`category`] - `Category`, the type tag that selects a style
//! - [`notification`] - `Notification`, a message paired with its category
//! - [`notifier`] - `show_notification`, the one-shot append
//! - [`flash`] - `Flashes`, messages deferred until the next render
//! - [`expiry`] - `Expiry`, opt-in removal of toasts after a delay
//!
//! # Usage
//!
//! ```
//! use toast_notifier::document::Document;
//! use toast_notifier::notifications::show_notification;
//!
//! let mut doc = Document::new();
//! let id = show_notification(&mut doc, "Saved!", "success").unwrap();
//! assert_eq!(doc.element(id).unwrap().class_name(), "toast toast-success");
//! ```

pub mod category;
mod expiry;
mod flash;
mod notification;
mod notifier;

pub use category::{Category, BASE_CLASS};
pub use expiry::{DismissPolicy, Expiry};
pub use flash::{Flashes, DEFAULT_CATEGORY};
pub use notification::Notification;
pub use notifier::{show_notification, TOAST_TAG};
