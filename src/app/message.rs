// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::toast;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The message text input changed.
    MessageChanged(String),
    /// The type text input changed.
    TypeChanged(String),
    /// Show a toast from the current inputs.
    Show,
    /// Show a toast with fixed text and type.
    Preset {
        message: &'static str,
        kind: &'static str,
    },
    /// Forwarded toast widget message.
    Toast(toast::Message),
    /// Periodic tick for auto-dismiss sweeps.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Message to flash on startup.
    pub message: Option<String>,
    /// Type of the startup message; defaults to `message`.
    pub kind: Option<String>,
    /// Explicit settings file, bypassing the default config location.
    pub config_path: Option<PathBuf>,
}
