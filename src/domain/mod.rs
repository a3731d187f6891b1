// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`toast`]: Toast manager value objects ([`MaxToasts`](toast::MaxToasts),
//!   [`ProgressInterval`](toast::ProgressInterval), [`RemovalDelay`](toast::RemovalDelay))

pub mod toast;
