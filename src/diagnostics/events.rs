// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events carry a category, a short message and the wall-clock time they
//! were recorded at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories of warnings reported by the toast system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// `show` was called before a container and template were attached.
    NotReady,
    /// `setup` was given a missing or incomplete render target.
    MissingTarget,
    /// A server-rendered message batch could not be read.
    IngestFailed,
    /// A configuration issue was detected.
    ConfigurationIssue,
    /// A warning toast was shown to the user.
    Notification,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors reported by the toast system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// An error toast was shown to the user.
    Notification,
    /// Other error type not covered by specific categories.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A diagnostic event captured during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}
