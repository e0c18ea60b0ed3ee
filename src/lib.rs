// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over sorted slices, iterative and recursive.
//!
//! Both strategies narrow an inclusive window `[left, right]` around the
//! floor midpoint until they hit the target or the window empties. Absence is
//! a [`SearchOutcome::NotFound`] value, never an index.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│  search/             │────▶│  verify/         │
//! │ (Window,    │     │  iterative.rs (loop) │     │  SortedSlice     │
//! │  Outcome,   │     │  recursive.rs (self) │     │  (checked entry) │
//! │  Probe)     │     │  mod.rs (trace)      │     │  contracts.rs    │
//! └─────────────┘     └──────────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sorted_search::{recursive_search, search, SearchOutcome, SearchWindow};
//!
//! let seq = [1, 2, 4, 5, 6, 8, 34, 56, 786, 8798];
//!
//! assert_eq!(search(&seq, &56), SearchOutcome::Found(7));
//! assert_eq!(
//!     recursive_search(&seq, SearchWindow::new(0, seq.len() - 1), &3),
//!     SearchOutcome::NotFound,
//! );
//! ```
//!
//! The unchecked functions trust that the slice is sorted. When that is not
//! known, go through [`SortedSlice`], which checks once and reports
//! [`SearchError`] instead of returning a meaningless index.

pub mod error;
pub mod scenarios;
mod search;
pub mod testing;
mod types;
pub mod verify;

pub use error::{SearchError, SearchResult};
pub use search::{
    iterative_search, iterative_search_by, recursive_search, recursive_search_by, search,
    trace_search, trace_search_by, ProbeObserver, SearchTrace,
};
pub use types::{Probe, SearchOutcome, SearchWindow, Step, Strategy};
pub use verify::SortedSlice;
