// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` renders, tracks and retires toasts. It keeps at most
//! `max_toasts` of them, evicting the oldest to make room for a new one,
//! and drives each toast's progress and auto-dismiss timers.
//!
//! Bookkeeping is synchronous: `show` and `dismiss` update the tracked
//! collection before returning. Visual effects (entrance transition,
//! progress updates, detaching a dismissed view) happen when the host
//! calls [`Manager::poll`].

use super::ingest::MessageSource;
use super::notification::{Toast, ToastId};
use super::notifier::{Notifier, Request};
use super::severity::Severity;
use super::surface::{Container, Phase, Template};
use super::timer::{Clock, SystemClock, TimerEvent, TimerQueue};
use crate::config::Settings;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::time::Duration;

/// Capacity of the request queue fed by [`Notifier`]s.
const REQUEST_CHANNEL_CAPACITY: usize = 64;

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific toast by ID (close control).
    Dismiss(ToastId),
    DismissAll,
    /// Fire due timers.
    Tick,
}

/// Manages the tracked toasts and their render target.
#[derive(Debug)]
pub struct Manager<C: Clock = SystemClock> {
    settings: Settings,
    clock: C,
    /// Tracked toasts, oldest first.
    toasts: Vec<Toast>,
    container: Option<Container>,
    template: Option<Template>,
    timers: TimerQueue,
    diagnostics: Option<DiagnosticsHandle>,
    request_tx: Sender<Request>,
    request_rx: Receiver<Request>,
}

impl Manager<SystemClock> {
    /// Creates an unattached manager with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Manager<C> {
    /// Creates an unattached manager reading time from `clock`.
    pub fn with_clock(settings: Settings, clock: C) -> Self {
        let (request_tx, request_rx) = bounded(REQUEST_CHANNEL_CAPACITY);
        Self {
            settings,
            clock,
            toasts: Vec::new(),
            container: None,
            template: None,
            timers: TimerQueue::new(),
            diagnostics: None,
            request_tx,
            request_rx,
        }
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns a handle other components can use to request toasts.
    #[must_use]
    pub fn notifier(&self) -> Notifier {
        Notifier::new(self.request_tx.clone())
    }

    /// Attaches the render target.
    ///
    /// Both parts must be present and the template must provide every slot;
    /// otherwise a warning is logged and the manager stays unattached.
    /// Once attached, later calls change nothing.
    pub fn attach(&mut self, container: Option<Container>, template: Option<Template>) -> bool {
        if self.is_ready() {
            return true;
        }
        match (container, template) {
            (Some(container), Some(template)) if template.is_complete() => {
                self.container = Some(container);
                self.template = Some(template);
                true
            }
            (Some(_), Some(template)) => {
                self.warn(
                    WarningType::MissingTarget,
                    format!(
                        "Toast template is missing slots: {:?}",
                        template.missing_slots()
                    ),
                );
                false
            }
            _ => {
                self.warn(
                    WarningType::MissingTarget,
                    "Toast container or template not found".to_string(),
                );
                false
            }
        }
    }

    /// Attaches the render target, then ingests the pending message batch.
    ///
    /// Safe to call repeatedly: once attached, nothing is ingested again.
    pub fn setup(
        &mut self,
        container: Option<Container>,
        template: Option<Template>,
        source: &mut dyn MessageSource,
    ) -> bool {
        if self.is_ready() {
            return true;
        }
        if !self.attach(container, template) {
            return false;
        }
        self.ingest_external_messages(source);
        true
    }

    /// Returns whether a container and template are attached.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.container.is_some() && self.template.is_some()
    }

    /// Shows a toast.
    ///
    /// `duration`: `None` uses the default duration, zero keeps the toast
    /// until it is dismissed or evicted. When the manager is full the
    /// oldest toast is dismissed first, so the new one is always shown.
    ///
    /// Returns `None`, after logging a warning, when no render target is
    /// attached.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
        duration: Option<Duration>,
    ) -> Option<ToastId> {
        if !self.is_ready() {
            self.warn(
                WarningType::NotReady,
                "Toast system not initialized".to_string(),
            );
            return None;
        }

        let message = message.into();
        let severity = severity.into();

        while self.toasts.len() >= self.settings.max_toasts.value() {
            let oldest = self.toasts[0].id();
            self.dismiss(oldest);
        }

        self.log_severity(severity, &message);

        let (Some(container), Some(template)) = (self.container.as_mut(), self.template.as_ref())
        else {
            return None;
        };

        let id = ToastId::new();
        let now = self.clock.now();
        let requested = duration.unwrap_or(self.settings.default_duration);
        // A deadline past the clock's range never fires: keep the toast instead.
        let expires_at = now.checked_add(requested).filter(|_| !requested.is_zero());
        let duration = if expires_at.is_some() {
            requested
        } else {
            Duration::ZERO
        };

        let mut view = template.instantiate(id, &message, severity);
        let mut toast = Toast::new(id, message, severity, duration, now);

        match expires_at {
            Some(expires_at) => {
                let interval = self.settings.progress_interval.as_duration();
                let first_tick = now.checked_add(interval).unwrap_or(expires_at);
                let progress =
                    self.timers
                        .schedule_repeating(first_tick, interval, TimerEvent::Progress(id));
                let dismiss = self.timers.schedule(expires_at, TimerEvent::Expire(id));
                toast.arm(dismiss, progress);
            }
            None => view.remove_progress(),
        }

        container.append(view);
        // Runs on the next poll so the entrance transition is observable.
        self.timers.defer(now, TimerEvent::Enter(id));
        self.toasts.push(toast);

        Some(id)
    }

    pub fn success(
        &mut self,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> Option<ToastId> {
        self.show(message, Severity::Success, duration)
    }

    pub fn error(
        &mut self,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> Option<ToastId> {
        self.show(message, Severity::Error, duration)
    }

    pub fn warning(
        &mut self,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> Option<ToastId> {
        self.show(message, Severity::Warning, duration)
    }

    pub fn info(
        &mut self,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> Option<ToastId> {
        self.show(message, Severity::Info, duration)
    }

    /// Dismisses a toast by its ID.
    ///
    /// Its timers are cancelled and its record removed at once; the view
    /// plays its exit transition and is detached after the removal delay.
    /// Returns `true` if the toast was found.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(index) = self.toasts.iter().position(|toast| toast.id() == id) else {
            return false;
        };

        let mut toast = self.toasts.remove(index);
        toast.disarm();

        if let Some(view) = self.container.as_mut().and_then(|c| c.get_mut(id)) {
            view.set_phase(Phase::Leaving);
        }
        let now = self.clock.now();
        let detach_at = now
            .checked_add(self.settings.removal_delay.as_duration())
            .unwrap_or(now);
        self.timers.defer(detach_at, TimerEvent::Detach(id));

        true
    }

    /// Dismisses every tracked toast. Returns how many were dismissed.
    pub fn dismiss_all(&mut self) -> usize {
        let ids = self.ids();
        ids.into_iter().filter(|id| self.dismiss(*id)).count()
    }

    /// Shows the source's pending message batch, once.
    ///
    /// Levels go through [`Severity::from_level`] and texts are trimmed.
    /// Returns the number of toasts shown. Nothing is taken from the source
    /// while the manager is unattached.
    pub fn ingest_external_messages(&mut self, source: &mut dyn MessageSource) -> usize {
        if !self.is_ready() {
            self.warn(
                WarningType::NotReady,
                "Toast system not initialized, external messages left pending".to_string(),
            );
            return 0;
        }

        let batch = match source.take_batch() {
            Ok(Some(batch)) => batch,
            Ok(None) => return 0,
            Err(err) => {
                self.warn(
                    WarningType::IngestFailed,
                    format!("Failed to read external messages: {err}"),
                );
                return 0;
            }
        };

        batch
            .iter()
            .filter_map(|flash| {
                self.show(
                    flash.text.trim(),
                    Severity::from_level(flash.level()),
                    None,
                )
            })
            .count()
    }

    /// Applies queued notifier requests, then fires every due timer.
    pub fn poll(&mut self) {
        while let Ok(request) = self.request_rx.try_recv() {
            self.apply(request);
        }

        let now = self.clock.now();
        while let Some(event) = self.timers.pop_due(now) {
            self.fire(event);
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::DismissAll => {
                self.dismiss_all();
            }
            Message::Tick => self.poll(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// IDs of the tracked toasts, oldest first.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.toasts.iter().map(Toast::id).collect()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Rendered views, including those still playing their exit transition.
    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of live timers, all toasts included.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    fn apply(&mut self, request: Request) {
        match request {
            Request::Show {
                message,
                severity,
                duration,
            } => {
                self.show(message, severity, duration);
            }
            Request::Dismiss(id) => {
                self.dismiss(id);
            }
            Request::DismissAll => {
                self.dismiss_all();
            }
        }
    }

    fn fire(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Enter(id) => {
                if let Some(view) = self.container.as_mut().and_then(|c| c.get_mut(id)) {
                    if view.phase() == Phase::Entering {
                        view.set_phase(Phase::Visible);
                    }
                }
            }
            TimerEvent::Progress(id) => {
                let now = self.clock.now();
                let Some(percent) = self.get(id).map(|toast| toast.remaining_percent(now)) else {
                    return;
                };
                if let Some(view) = self.container.as_mut().and_then(|c| c.get_mut(id)) {
                    view.set_progress(percent);
                }
            }
            TimerEvent::Expire(id) => {
                self.dismiss(id);
            }
            TimerEvent::Detach(id) => {
                if let Some(container) = self.container.as_mut() {
                    container.detach(id);
                }
            }
        }
    }

    /// Logs warning and error toasts to diagnostics.
    fn log_severity(&self, severity: Severity, message: &str) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        match severity {
            Severity::Warning => {
                handle.log_warning(WarningEvent::new(WarningType::Notification, message));
            }
            Severity::Error => {
                handle.log_error(ErrorEvent::new(ErrorType::Notification, message));
            }
            Severity::Success | Severity::Info => {}
        }
    }

    fn warn(&self, warning_type: WarningType, message: String) {
        eprintln!("[WARN] {message}");
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(WarningEvent::new(warning_type, message));
        }
    }
}
