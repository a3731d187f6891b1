// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used by the toast manager. Constants are organized by category.

use crate::domain::toast::{max_toasts_bounds, progress_interval_bounds, removal_delay_bounds};

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default number of toasts shown at once before the oldest is evicted.
pub const DEFAULT_MAX_TOASTS: usize = max_toasts_bounds::DEFAULT;

/// Minimum capacity of the toast stack.
pub const MIN_MAX_TOASTS: usize = max_toasts_bounds::MIN;

/// Maximum capacity of the toast stack.
pub const MAX_MAX_TOASTS: usize = max_toasts_bounds::MAX;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss delay (in milliseconds) when the caller gives none.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Default progress bar refresh period (in milliseconds).
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = progress_interval_bounds::DEFAULT_MS;

/// Default exit transition length (in milliseconds).
pub const DEFAULT_REMOVAL_DELAY_MS: u64 = removal_delay_bounds::DEFAULT_MS;
