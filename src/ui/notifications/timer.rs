// SPDX-License-Identifier: MPL-2.0
//! Clock abstraction and timer queue driving toast lifecycles.
//!
//! Timers never call back into the manager. Each one carries a
//! [`TimerEvent`] naming the toast it belongs to; the manager pops due
//! events from the [`TimerQueue`] when it is polled and applies them.
//! Cancellation goes through a [`TimerHandle`] owned by the toast record.

use super::notification::ToastId;
use std::cmp::Ordering as CmpOrdering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one clone and hand
/// another to the manager.
///
/// # Example
///
/// ```
/// use iced_toasts::ui::notifications::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.offset_nanos.fetch_add(nanos, Ordering::SeqCst);
    }

    /// Time elapsed since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.offset_nanos.load(Ordering::SeqCst))
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }
}

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Start the entrance transition.
    Enter(ToastId),
    /// Refresh the progress indicator.
    Progress(ToastId),
    /// Auto-dismiss.
    Expire(ToastId),
    /// Detach the view once the exit transition is over.
    Detach(ToastId),
}

impl TimerEvent {
    #[must_use]
    pub fn toast_id(self) -> ToastId {
        match self {
            TimerEvent::Enter(id)
            | TimerEvent::Progress(id)
            | TimerEvent::Expire(id)
            | TimerEvent::Detach(id) => id,
        }
    }
}

/// Exclusive ownership of a scheduled timer.
///
/// Cancelling consumes the handle, so a timer can be released only once.
/// Dropping a handle cancels its timer as well.
#[derive(Debug)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    pub fn cancel(self) {
        // Drop does the work.
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

#[derive(Debug)]
struct Entry {
    due: Instant,
    seq: u64,
    period: Option<Duration>,
    event: TimerEvent,
    cancelled: Option<Arc<AtomicBool>>,
}

impl Entry {
    fn is_cancelled(&self) -> bool {
        self.cancelled
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the max-heap yields the earliest entry first.
    fn cmp(&self, other: &Self) -> CmpOrdering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Pending timers ordered by due time, then by scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a one-shot timer.
    pub fn schedule(&mut self, due: Instant, event: TimerEvent) -> TimerHandle {
        self.push_owned(due, None, event)
    }

    /// Schedules a timer firing first at `first_due`, then every `period`.
    pub fn schedule_repeating(
        &mut self,
        first_due: Instant,
        period: Duration,
        event: TimerEvent,
    ) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        self.push_owned(first_due, Some(period), event)
    }

    /// Schedules a one-shot timer that cannot be cancelled.
    pub fn defer(&mut self, due: Instant, event: TimerEvent) {
        self.push(due, None, event, None);
    }

    /// Pops the earliest timer due at `now`, skipping cancelled ones.
    ///
    /// A repeating timer is rescheduled at its first period boundary after
    /// `now`, so ticks missed during a long gap coalesce into one.
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerEvent> {
        loop {
            if self.heap.peek()?.due > now {
                return None;
            }
            let entry = self.heap.pop()?;
            if entry.is_cancelled() {
                continue;
            }
            if let Some(period) = entry.period {
                if let Some(next) = next_boundary(entry.due, period, now) {
                    self.push(next, Some(period), entry.event, entry.cancelled);
                }
            }
            return Some(entry.event);
        }
    }

    /// Due time of the earliest live timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.heap
            .iter()
            .filter(|entry| !entry.is_cancelled())
            .map(|entry| entry.due)
            .min()
    }

    /// Number of timers that are still live.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.heap.iter().filter(|entry| !entry.is_cancelled()).count()
    }

    /// Number of live timers belonging to `id`.
    #[must_use]
    pub fn pending_for(&self, id: ToastId) -> usize {
        self.heap
            .iter()
            .filter(|entry| !entry.is_cancelled() && entry.event.toast_id() == id)
            .count()
    }

    fn push_owned(
        &mut self,
        due: Instant,
        period: Option<Duration>,
        event: TimerEvent,
    ) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.push(due, period, event, Some(Arc::clone(&cancelled)));
        TimerHandle { cancelled }
    }

    fn push(
        &mut self,
        due: Instant,
        period: Option<Duration>,
        event: TimerEvent,
        cancelled: Option<Arc<AtomicBool>>,
    ) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            due,
            seq,
            period,
            event,
            cancelled,
        });
    }
}

/// First `due + k * period` strictly after `now`, or `None` past the
/// clock's range.
fn next_boundary(due: Instant, period: Duration, now: Instant) -> Option<Instant> {
    let behind = now.saturating_duration_since(due).as_nanos();
    let steps = behind / period.as_nanos() + 1;
    let offset = u64::try_from(steps * period.as_nanos()).ok()?;
    due.checked_add(Duration::from_nanos(offset))
}
