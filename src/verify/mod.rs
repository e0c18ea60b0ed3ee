// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: a checked wrapper and runtime contracts.
//!
//! 1. **Type-level wrapper** (`SortedSlice`) that checks sortedness once and
//!    window bounds on every call, turning precondition violations into
//!    [`crate::SearchError`] values.
//!
//! 2. **Runtime contracts** that panic in debug builds when a strategy breaks
//!    the window invariant. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
