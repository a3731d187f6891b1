// SPDX-License-Identifier: MPL-2.0
//! Toast manager newtypes.
//!
//! This module provides type-safe wrappers for the toast manager's
//! tunables, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Bounds for the number of simultaneously tracked toasts (1 to 20).
pub mod max_toasts_bounds {
    /// Minimum number of toasts.
    pub const MIN: usize = 1;
    /// Maximum number of toasts.
    pub const MAX: usize = 20;
    /// Default number of toasts.
    pub const DEFAULT: usize = 5;
}

/// Bounds for the progress bar refresh period, in milliseconds (10 to 1000).
pub mod progress_interval_bounds {
    pub const MIN_MS: u64 = 10;
    pub const MAX_MS: u64 = 1000;
    pub const DEFAULT_MS: u64 = 50;
}

/// Bounds for the exit transition length, in milliseconds (0 to 2000).
pub mod removal_delay_bounds {
    pub const MIN_MS: u64 = 0;
    pub const MAX_MS: u64 = 2000;
    pub const DEFAULT_MS: u64 = 300;
}

// =============================================================================
// MaxToasts
// =============================================================================

/// Capacity of the toast stack.
///
/// A value of zero would make every `show` evict the toast it just created,
/// so the lower bound is one.
///
/// # Example
///
/// ```
/// use iced_toasts::domain::toast::MaxToasts;
///
/// assert_eq!(MaxToasts::new(0).value(), 1);
/// assert_eq!(MaxToasts::default().value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxToasts(usize);

impl MaxToasts {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_toasts_bounds::MIN, max_toasts_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxToasts {
    fn default() -> Self {
        Self(max_toasts_bounds::DEFAULT)
    }
}

// =============================================================================
// ProgressInterval
// =============================================================================

/// Period of the progress bar refresh tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInterval(u64);

impl ProgressInterval {
    /// Creates a new interval from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(
            progress_interval_bounds::MIN_MS,
            progress_interval_bounds::MAX_MS,
        ))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ProgressInterval {
    fn default() -> Self {
        Self(progress_interval_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// RemovalDelay
// =============================================================================

/// Time between a dismissal and the detachment of the toast's view.
///
/// Matches the length of the exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalDelay(u64);

impl RemovalDelay {
    /// Creates a new delay from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(removal_delay_bounds::MIN_MS, removal_delay_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RemovalDelay {
    fn default() -> Self {
        Self(removal_delay_bounds::DEFAULT_MS)
    }
}
