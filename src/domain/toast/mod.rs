// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! Value objects bounding the toast manager's tunables, independent
//! of any presentation framework.

pub mod newtypes;

pub use newtypes::{
    max_toasts_bounds, progress_interval_bounds, removal_delay_bounds, MaxToasts,
    ProgressInterval, RemovalDelay,
};
