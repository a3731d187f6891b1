// SPDX-License-Identifier: MPL-2.0
//! Cloneable front door to a toast manager.
//!
//! Components that should be able to raise a toast receive a [`Notifier`]
//! instead of a reference to the manager. Requests are queued on a bounded
//! channel and applied the next time the manager is polled.

use super::notification::ToastId;
use super::severity::Severity;
use crossbeam_channel::Sender;
use std::time::Duration;

/// Request queued by a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Show {
        message: String,
        severity: Severity,
        duration: Option<Duration>,
    },
    Dismiss(ToastId),
    DismissAll,
}

/// Handle for requesting toasts from anywhere in the application.
///
/// This handle is cheap to clone and can be shared across threads.
/// Sending never blocks: when the queue is full the request is dropped.
#[derive(Debug, Clone)]
pub struct Notifier {
    request_tx: Sender<Request>,
}

impl Notifier {
    pub(crate) fn new(request_tx: Sender<Request>) -> Self {
        Self { request_tx }
    }

    /// Requests a toast. `None` uses the manager's default duration,
    /// a zero duration keeps the toast until dismissed.
    pub fn show(
        &self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
        duration: Option<Duration>,
    ) {
        self.send(Request::Show {
            message: message.into(),
            severity: severity.into(),
            duration,
        });
    }

    pub fn success(&self, message: impl Into<String>, duration: Option<Duration>) {
        self.show(message, Severity::Success, duration);
    }

    pub fn error(&self, message: impl Into<String>, duration: Option<Duration>) {
        self.show(message, Severity::Error, duration);
    }

    pub fn warning(&self, message: impl Into<String>, duration: Option<Duration>) {
        self.show(message, Severity::Warning, duration);
    }

    pub fn info(&self, message: impl Into<String>, duration: Option<Duration>) {
        self.show(message, Severity::Info, duration);
    }

    pub fn dismiss(&self, id: ToastId) {
        self.send(Request::Dismiss(id));
    }

    pub fn dismiss_all(&self) {
        self.send(Request::DismissAll);
    }

    fn send(&self, request: Request) {
        // Non-blocking send - drop if channel is full
        let _ = self.request_tx.try_send(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn shortcuts_queue_requests_with_their_severity() {
        let (tx, rx) = bounded(8);
        let notifier = Notifier::new(tx);

        notifier.success("saved", None);
        notifier.error("failed", Some(Duration::ZERO));
        notifier.show("custom", "bogus", Some(Duration::from_secs(1)));

        let requests: Vec<Request> = rx.try_iter().collect();
        assert_eq!(
            requests,
            vec![
                Request::Show {
                    message: "saved".to_string(),
                    severity: Severity::Success,
                    duration: None,
                },
                Request::Show {
                    message: "failed".to_string(),
                    severity: Severity::Error,
                    duration: Some(Duration::ZERO),
                },
                Request::Show {
                    message: "custom".to_string(),
                    severity: Severity::Info,
                    duration: Some(Duration::from_secs(1)),
                },
            ]
        );
    }

    #[test]
    fn full_queue_drops_requests() {
        let (tx, rx) = bounded(1);
        let notifier = Notifier::new(tx);

        notifier.info("first", None);
        notifier.info("second", None);

        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn clones_share_the_queue() {
        let (tx, rx) = bounded(4);
        let notifier = Notifier::new(tx);
        let clone = notifier.clone();

        notifier.dismiss_all();
        clone.warning("careful", None);

        assert_eq!(rx.try_iter().count(), 2);
    }
}
