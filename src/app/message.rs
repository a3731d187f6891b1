// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{NotificationMessage, Severity};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a timed toast of the given severity.
    Show(Severity),
    /// Show a toast that stays until dismissed.
    ShowPersistent,
    DismissAll,
    Notification(NotificationMessage),
    /// Periodic tick driving toast timers.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Toast settings file. Defaults to the user config directory.
    pub config_path: Option<PathBuf>,
    /// Flash message file shown once at startup, then deleted.
    pub flash_path: Option<PathBuf>,
}
