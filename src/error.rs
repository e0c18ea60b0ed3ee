// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Precondition violations caught by the checked search path.
///
/// Absence of the target is not an error; see [`crate::SearchOutcome::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `seq[position - 1] > seq[position]`.
    #[error("sequence not sorted at position {position}")]
    Unsorted { position: usize },

    /// The inclusive upper bound does not index into the sequence.
    #[error("window right bound {right} out of bounds for sequence of length {len}")]
    WindowOutOfBounds { right: usize, len: usize },
}

pub type SearchResult<T> = Result<T, SearchError>;
