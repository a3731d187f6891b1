// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! various parts of the crate and stores them in a circular buffer.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, WarningEvent,
    WarningType,
};

/// Default number of events kept by a collector.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1000;

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a warning event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_warning(&self, warning_event: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: warning_event,
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a simple warning message with `WarningType::Other`.
    pub fn log_warning_simple(&self, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(WarningType::Other, message));
    }

    /// Logs an error event.
    ///
    /// This method is non-blocking.
    pub fn log_error(&self, error_event: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error_event });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a simple error message with `ErrorType::Other`.
    pub fn log_error_simple(&self, message: impl Into<String>) {
        self.log_error(ErrorEvent::new(ErrorType::Other, message));
    }
}

/// Central collector for diagnostic events.
///
/// Events sent through handles wait in the channel until
/// [`process_pending`](Self::process_pending) moves them into the buffer,
/// which evicts the oldest events when it reaches capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector keeping at most `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports all stored events as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY)
    }
}
