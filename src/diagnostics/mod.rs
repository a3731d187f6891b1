// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting warning and error events.
//!
//! This module is the crate's logging facility: components report
//! non-fatal problems through a cheap, non-blocking [`DiagnosticsHandle`],
//! and a [`DiagnosticsCollector`] stores them in a memory-bounded circular
//! buffer that can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with fixed capacity
//! - [`DiagnosticEvent`]: Timestamped warning or error
//! - [`DiagnosticsCollector`]: Owner of the buffer and the receiving channel

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, DEFAULT_BUFFER_CAPACITY};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, WarningEvent, WarningType,
};
