// SPDX-License-Identifier: MPL-2.0
//! Maps toast classes to visual styles.
//!
//! Elements are styled from their classes alone: the `toast` base class marks
//! an element as a toast, and a `toast-<type>` class picks its accent. Unknown
//! types fall back to a neutral accent.

use super::design_tokens::palette;
use crate::document::Element;
use crate::notifications::{category::class_for, Category, BASE_CLASS};
use iced::Color;
use std::collections::HashMap;

/// Resolved visual style of one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub accent: Color,
}

/// Class-to-style rules for toasts.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    rules: HashMap<String, ToastStyle>,
    fallback: ToastStyle,
}

impl Default for Stylesheet {
    fn default() -> Self {
        let mut sheet = Self::empty(ToastStyle {
            accent: palette::GRAY_400,
        });
        for (category, accent) in [
            (Category::Success, palette::SUCCESS_500),
            (Category::Info, palette::INFO_500),
            (Category::Warning, palette::WARNING_500),
            (Category::Error, palette::ERROR_500),
        ] {
            sheet.insert(category.as_str(), ToastStyle { accent });
        }
        sheet
    }
}

impl Stylesheet {
    /// Creates a stylesheet with no type rules.
    #[must_use]
    pub fn empty(fallback: ToastStyle) -> Self {
        Self {
            rules: HashMap::new(),
            fallback,
        }
    }

    /// Adds or replaces the rule for `toast-<kind>`.
    pub fn insert(&mut self, kind: &str, style: ToastStyle) {
        self.rules.insert(class_for(kind), style);
    }

    /// Style for `element`, or `None` if it is not a toast.
    ///
    /// The first class with a rule wins.
    #[must_use]
    pub fn resolve(&self, element: &Element) -> Option<ToastStyle> {
        if !element.has_class(BASE_CLASS) {
            return None;
        }
        let style = element
            .classes()
            .iter()
            .find_map(|class| self.rules.get(class).copied())
            .unwrap_or(self.fallback);
        Some(style)
    }
}
