// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A slice wrapper that proves sortedness once and then searches freely.
//!
//! The plain search functions trust their input: hand them unsorted data and
//! you get an answer, just not a meaningful one. [`SortedSlice`] pays an O(n)
//! check at construction and rejects out-of-range windows, so a wrong answer
//! becomes an error instead.
//!
//! # Example
//!
//! ```
//! use sorted_search::{SearchError, SearchOutcome, SearchWindow, SortedSlice, Strategy};
//!
//! let values = [1, 2, 3, 5, 67, 143, 786, 6577, 89899];
//! let sorted = SortedSlice::new(&values)?;
//!
//! assert_eq!(sorted.search(&786, Strategy::Recursive), SearchOutcome::Found(6));
//!
//! // One-past-the-end upper bound is refused.
//! let err = sorted
//!     .search_window(SearchWindow::new(0, values.len()), &786, Strategy::Recursive)
//!     .unwrap_err();
//! assert_eq!(err, SearchError::WindowOutOfBounds { right: 9, len: 9 });
//! # Ok::<(), SearchError>(())
//! ```

use std::cmp::Ordering;

use crate::error::{SearchError, SearchResult};
use crate::search::{trace_search_by, SearchTrace};
use crate::types::{SearchOutcome, SearchWindow, Strategy};

/// A slice whose elements are known to be in non-decreasing order.
///
/// # Invariants (enforced at construction)
/// - `slice[i - 1] <= slice[i]` for every `i` in `1..len`
#[derive(Debug, Clone, Copy)]
pub struct SortedSlice<'a, T> {
    inner: &'a [T],
}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Wrap `slice` after checking that it is sorted.
    ///
    /// Returns `Err(SearchError::Unsorted)` naming the first position whose
    /// element is smaller than its predecessor.
    pub fn new(slice: &'a [T]) -> SearchResult<Self> {
        Self::new_by(slice, T::cmp)
    }

    /// Search the whole slice.
    pub fn search(&self, target: &T, strategy: Strategy) -> SearchOutcome {
        strategy.search(self.inner, self.full_window(), target)
    }

    /// Search part of the slice.
    ///
    /// An empty window (`left > right`) is always accepted. A non-empty one
    /// must have `right < len`.
    pub fn search_window(
        &self,
        window: SearchWindow,
        target: &T,
        strategy: Strategy,
    ) -> SearchResult<SearchOutcome> {
        self.check_window(window)?;
        Ok(strategy.search(self.inner, window, target))
    }

    /// Search part of the slice and record every probe.
    pub fn trace(
        &self,
        window: SearchWindow,
        target: &T,
        strategy: Strategy,
    ) -> SearchResult<SearchTrace> {
        self.check_window(window)?;
        Ok(trace_search_by(
            self.inner,
            window,
            |elem| elem.cmp(target),
            strategy,
        ))
    }
}

impl<'a, T> SortedSlice<'a, T> {
    /// Wrap `slice` without checking order.
    ///
    /// Window bounds are still checked by the search methods. Searching an
    /// unsorted slice through this wrapper gives unspecified (but memory-safe)
    /// results.
    pub fn new_unchecked(slice: &'a [T]) -> Self {
        Self { inner: slice }
    }

    /// Wrap `slice` after checking it is sorted under `compare`.
    pub fn new_by<F>(slice: &'a [T], mut compare: F) -> SearchResult<Self>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match slice
            .windows(2)
            .position(|pair| compare(&pair[0], &pair[1]) == Ordering::Greater)
        {
            Some(i) => {
                tracing::debug!(position = i + 1, len = slice.len(), "rejecting unsorted sequence");
                Err(SearchError::Unsorted { position: i + 1 })
            }
            None => Ok(Self { inner: slice }),
        }
    }

    /// Search with a comparator that reports how an element orders against
    /// the target.
    pub fn search_by<F>(
        &self,
        window: SearchWindow,
        f: F,
        strategy: Strategy,
    ) -> SearchResult<SearchOutcome>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.check_window(window)?;
        Ok(strategy.search_by(self.inner, window, f))
    }

    /// The window covering every element.
    pub fn full_window(&self) -> SearchWindow {
        SearchWindow::full(self.inner.len())
    }

    /// The wrapped slice, with the original lifetime.
    ///
    /// ```
    /// use sorted_search::SortedSlice;
    ///
    /// let values = vec![2, 4, 8];
    /// let sorted = SortedSlice::new(&values).unwrap();
    /// assert_eq!(sorted.as_slice(), &[2, 4, 8]);
    /// ```
    pub fn as_slice(&self) -> &'a [T] {
        self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn check_window(&self, window: SearchWindow) -> SearchResult<()> {
        match window.right() {
            Some(right) if right >= self.inner.len() => {
                tracing::warn!(
                    %window,
                    len = self.inner.len(),
                    "window reaches past the end of the sequence"
                );
                Err(SearchError::WindowOutOfBounds {
                    right,
                    len: self.inner.len(),
                })
            }
            _ => Ok(()),
        }
    }
}
