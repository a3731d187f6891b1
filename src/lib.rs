// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification manager for Iced applications.
//!
//! Toasts are short messages stacked in a corner of the window. Each one
//! carries a severity, an optional auto-dismiss timer with a progress bar
//! and a close button. The manager is driven by the host's update loop:
//! it never spawns threads, and all timing goes through an injectable clock.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;
