// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a bounded stack of transient notifications. Each
//! toast auto-dismisses after its duration (unless the duration is zero)
//! and shows the time it has left as a progress bar.
//!
//! # Components
//!
//! - [`Manager`] - tracks toasts, enforces the capacity, drives timers
//! - [`Severity`] - severity levels and their static style table
//! - [`Template`], [`Container`], [`ToastView`] - the render target
//! - [`TimerQueue`], [`Clock`] - cancellable timers and injectable time
//! - [`MessageSource`] - one-time ingestion of pre-rendered messages
//! - [`Notifier`] - cloneable request handle for other components
//! - [`Toast`] - iced widgets rendering the views
//!
//! # Usage
//!
//! ```
//! use iced_toasts::ui::notifications::{Container, Manager, Severity, Template};
//!
//! let mut manager = Manager::new();
//! manager.attach(Some(Container::new()), Some(Template::standard()));
//!
//! let id = manager.show("Image saved", Severity::Success, None);
//! assert!(id.is_some());
//!
//! // Drive timers from the host's event loop.
//! manager.poll();
//! ```

mod ingest;
mod manager;
mod notification;
mod notifier;
mod severity;
mod surface;
mod timer;
mod toast;

pub use ingest::{EmbeddedMessages, FlashFile, FlashMessage, MessageSource};
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Toast as ToastRecord, ToastId};
pub use notifier::{Notifier, Request};
pub use severity::{icon_svg, Severity, ToastStyle, CLOSE_ICON_PATH};
pub use surface::{Container, Phase, Slot, Template, ToastView};
pub use timer::{Clock, ManualClock, SystemClock, TimerEvent, TimerHandle, TimerQueue};
pub use toast::Toast;
