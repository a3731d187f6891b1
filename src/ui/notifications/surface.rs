// SPDX-License-Identifier: MPL-2.0
//! Render target of the toast manager.
//!
//! A [`Template`] is the layout schema every toast is built from, a
//! [`Container`] holds the resulting [`ToastView`]s in display order.
//! Views are plain view-models: the iced widgets in [`super::toast`]
//! only read them.

use super::manager::Message;
use super::notification::ToastId;
use super::severity::{Severity, ToastStyle};

/// Named part of the toast layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Severity-colored border.
    Accent,
    IconColor,
    IconPath,
    Message,
    Progress,
    /// Manual dismiss control.
    Close,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Accent,
        Slot::IconColor,
        Slot::IconPath,
        Slot::Message,
        Slot::Progress,
        Slot::Close,
    ];
}

/// Layout schema instantiated once per toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    slots: Vec<Slot>,
}

impl Template {
    /// Template providing every slot.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_slots(Slot::ALL)
    }

    /// Template providing only the given slots.
    pub fn with_slots(slots: impl IntoIterator<Item = Slot>) -> Self {
        let mut slots: Vec<Slot> = slots.into_iter().collect();
        slots.sort_unstable();
        slots.dedup();
        Self { slots }
    }

    #[must_use]
    pub fn has_slot(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    #[must_use]
    pub fn missing_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| !self.has_slot(*slot))
            .collect()
    }

    /// A template can render toasts only when it has every slot.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_slots().is_empty()
    }

    /// Builds the view of a new toast: full progress, offscreen.
    ///
    /// The message is stored verbatim and is never parsed as markup.
    #[must_use]
    pub fn instantiate(&self, id: ToastId, message: &str, severity: Severity) -> ToastView {
        ToastView {
            id,
            message: message.to_owned(),
            severity,
            style: severity.style(),
            progress: Some(100.0),
            phase: Phase::Entering,
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::standard()
    }
}

/// Transition state of a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted, still offscreen and transparent.
    Entering,
    /// Onscreen and opaque.
    Visible,
    /// Dismissed, sliding out until detached.
    Leaving,
}

impl Phase {
    #[must_use]
    pub fn is_onscreen(self) -> bool {
        self == Phase::Visible
    }
}

/// View-model of a single toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    id: ToastId,
    message: String,
    severity: Severity,
    style: &'static ToastStyle,
    progress: Option<f32>,
    phase: Phase,
}

impl ToastView {
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
    pub fn style(&self) -> &'static ToastStyle {
        self.style
    }

    /// Width of the progress bar in percent, `None` when the toast has no bar.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.progress
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Message emitted by the close control.
    #[must_use]
    pub fn close_message(&self) -> Message {
        Message::Dismiss(self.id)
    }

    pub(crate) fn set_progress(&mut self, percent: f32) {
        if self.progress.is_some() {
            self.progress = Some(percent.clamp(0.0, 100.0));
        }
    }

    pub(crate) fn remove_progress(&mut self) {
        self.progress = None;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

/// Ordered host of rendered toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Container {
    views: Vec<ToastView>,
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a view after every existing one.
    pub fn append(&mut self, view: ToastView) {
        self.views.push(view);
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastView> {
        self.views.iter().find(|view| view.id == id)
    }

    pub fn get_mut(&mut self, id: ToastId) -> Option<&mut ToastView> {
        self.views.iter_mut().find(|view| view.id == id)
    }

    /// Removes a view, returning it if it was attached.
    pub fn detach(&mut self, id: ToastId) -> Option<ToastView> {
        let index = self.views.iter().position(|view| view.id == id)?;
        Some(self.views.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToastView> {
        self.views.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_template_is_complete() {
        let template = Template::standard();
        assert!(template.is_complete());
        assert!(template.missing_slots().is_empty());
        assert_eq!(Template::default(), template);
    }

    #[test]
    fn template_reports_missing_slots() {
        let template = Template::with_slots([Slot::Message, Slot::Close, Slot::Message]);
        assert!(!template.is_complete());
        assert_eq!(
            template.missing_slots(),
            vec![Slot::Accent, Slot::IconColor, Slot::IconPath, Slot::Progress]
        );
    }

    #[test]
    fn instantiate_keeps_markup_as_plain_text() {
        let id = ToastId::new();
        let view = Template::standard().instantiate(id, "<b>bold</b>", Severity::Warning);

        assert_eq!(view.message(), "<b>bold</b>");
        assert_eq!(view.severity(), Severity::Warning);
        assert_eq!(view.style(), Severity::Warning.style());
        assert_eq!(view.phase(), Phase::Entering);
        assert_eq!(view.progress(), Some(100.0));
        assert_eq!(view.close_message(), Message::Dismiss(id));
    }

    #[test]
    fn removed_progress_stays_removed() {
        let mut view = Template::standard().instantiate(ToastId::new(), "x", Severity::Info);
        view.remove_progress();
        view.set_progress(40.0);
        assert_eq!(view.progress(), None);
    }

    #[test]
    fn container_keeps_insertion_order_and_detaches_by_id() {
        let template = Template::standard();
        let ids: Vec<ToastId> = (0..3).map(|_| ToastId::new()).collect();
        let mut container = Container::new();
        for id in &ids {
            container.append(template.instantiate(*id, "m", Severity::Info));
        }

        let order: Vec<ToastId> = container.iter().map(ToastView::id).collect();
        assert_eq!(order, ids);

        assert!(container.detach(ids[1]).is_some());
        assert!(container.detach(ids[1]).is_none());
        assert_eq!(container.len(), 2);
        assert!(container.get(ids[1]).is_none());
        assert!(container.get(ids[2]).is_some());
    }

    #[test]
    fn only_visible_phase_is_onscreen() {
        assert!(Phase::Visible.is_onscreen());
        assert!(!Phase::Entering.is_onscreen());
        assert!(!Phase::Leaving.is_onscreen());
    }
}
