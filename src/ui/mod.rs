// SPDX-License-Identifier: MPL-2.0
//! Rendering of toasts with Iced.

pub mod design_tokens;
pub mod stylesheet;
pub mod toast;
