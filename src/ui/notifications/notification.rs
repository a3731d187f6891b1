// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record tracked by the manager and its
//! `ToastId`.

use super::severity::Severity;
use super::timer::TimerHandle;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// A toast currently tracked by the manager.
///
/// Owns the handles of its auto-dismiss and progress timers. Both are
/// released together by [`Toast::disarm`], or when the record is dropped.
#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    message: String,
    severity: Severity,
    /// Zero means the toast stays until dismissed.
    duration: Duration,
    created_at: Instant,
    dismiss_timer: Option<TimerHandle>,
    progress_timer: Option<TimerHandle>,
}

impl Toast {
    pub(crate) fn new(
        id: ToastId,
        message: String,
        severity: Severity,
        duration: Duration,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            message,
            severity,
            duration,
            created_at,
            dismiss_timer: None,
            progress_timer: None,
        }
    }

    pub(crate) fn arm(&mut self, dismiss: TimerHandle, progress: TimerHandle) {
        self.dismiss_timer = Some(dismiss);
        self.progress_timer = Some(progress);
    }

    /// Cancels both timers. Later calls find nothing left to cancel.
    pub(crate) fn disarm(&mut self) {
        if let Some(handle) = self.dismiss_timer.take() {
            handle.cancel();
        }
        if let Some(handle) = self.progress_timer.take() {
            handle.cancel();
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// Returns whether any timer is still owned by this toast.
    #[must_use]
    pub fn has_timers(&self) -> bool {
        self.dismiss_timer.is_some() || self.progress_timer.is_some()
    }

    /// Share of the duration still left at `now`, as a percentage in `0..=100`.
    ///
    /// Persistent toasts always report 100.
    #[must_use]
    pub fn remaining_percent(&self, now: Instant) -> f32 {
        if self.is_persistent() {
            return 100.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        let fraction = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (100.0 - fraction * 100.0).max(0.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::timer::{TimerEvent, TimerQueue};

    fn toast(duration_ms: u64, created_at: Instant) -> Toast {
        Toast::new(
            ToastId::new(),
            "hello".to_string(),
            Severity::Info,
            Duration::from_millis(duration_ms),
            created_at,
        )
    }

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn toast_id_displays_with_prefix() {
        let id = ToastId::new();
        assert!(id.to_string().starts_with("toast-"));
    }

    #[test]
    fn remaining_percent_decreases_linearly() {
        let start = Instant::now();
        let toast = toast(1000, start);

        assert!((toast.remaining_percent(start) - 100.0).abs() < f32::EPSILON);
        assert!((toast.remaining_percent(start + Duration::from_millis(250)) - 75.0).abs() < 0.01);
        assert!((toast.remaining_percent(start + Duration::from_millis(500)) - 50.0).abs() < 0.01);
    }

    #[test]
    fn remaining_percent_never_goes_negative() {
        let start = Instant::now();
        let toast = toast(100, start);
        assert_eq!(toast.remaining_percent(start + Duration::from_secs(10)), 0.0);
    }

    #[test]
    fn persistent_toast_reports_full_progress() {
        let start = Instant::now();
        let toast = toast(0, start);
        assert!(toast.is_persistent());
        assert_eq!(toast.remaining_percent(start + Duration::from_secs(60)), 100.0);
    }

    #[test]
    fn disarm_cancels_both_timers_once() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        let mut toast = toast(1000, start);
        let id = toast.id();

        let dismiss = queue.schedule(start + Duration::from_secs(1), TimerEvent::Expire(id));
        let progress = queue.schedule_repeating(
            start + Duration::from_millis(50),
            Duration::from_millis(50),
            TimerEvent::Progress(id),
        );
        toast.arm(dismiss, progress);
        assert!(toast.has_timers());
        assert_eq!(queue.pending_for(id), 2);

        toast.disarm();
        assert!(!toast.has_timers());
        assert_eq!(queue.pending_for(id), 0);

        // Second call has nothing to release.
        toast.disarm();
        assert!(!toast.has_timers());
    }
}
