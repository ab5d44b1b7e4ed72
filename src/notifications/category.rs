// SPDX-License-Identifier: MPL-2.0
//! Notification categories.
//!
//! A category is the free-form type tag passed alongside a message. The four
//! common tags get their own variants; anything else is kept verbatim.

use std::fmt;

/// Base class carried by every toast element.
pub const BASE_CLASS: &str = "toast";

/// Category tag that selects a toast's display style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Operation completed successfully.
    Success,
    /// Informational message.
    #[default]
    Info,
    /// Something needs attention but nothing failed.
    Warning,
    /// Operation failed.
    Error,
    /// Any other tag, preserved exactly as given.
    Other(String),
}

impl Category {
    /// Returns the tag exactly as it would be passed by a caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Success => "success",
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Error => "error",
            Category::Other(tag) => tag,
        }
    }

    /// Returns the type-specific class, `toast-<tag>`.
    #[must_use]
    pub fn class_name(&self) -> String {
        class_for(self.as_str())
    }
}

/// Builds the type-specific class for any tag, without validation.
#[must_use]
pub fn class_for(tag: &str) -> String {
    format!("{BASE_CLASS}-{tag}")
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        match tag {
            "success" => Category::Success,
            "info" => Category::Info,
            "warning" => Category::Warning,
            "error" => Category::Error,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match Category::from(tag.as_str()) {
            Category::Other(_) => Category::Other(tag),
            known => known,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
