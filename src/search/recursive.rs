// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recurse on the narrowed window.
//!
//! Rust does not promise tail-call elimination, so every step costs a stack
//! frame. Each step drops the midpoint and the half that cannot hold the
//! target, which caps the depth at `ceil(log2(n + 1))`: 64 frames on a
//! 64-bit target no matter how large the slice.

use std::cmp::Ordering;

use super::{probe_at, ProbeObserver};
use crate::types::{SearchOutcome, SearchWindow};
use crate::verify::contracts::{
    check_depth_bounded, check_probe_in_window, check_window_in_bounds, check_window_shrinks,
};

/// Search `window` of the sorted `seq` for `target` by recursion.
///
/// Same contract as [`crate::iterative_search`]: both probe the same
/// midpoints in the same order, so they return identical outcomes.
///
/// # Panics
///
/// Panics if a non-empty `window` reaches past the end of `seq`.
///
/// # Examples
///
/// ```
/// use sorted_search::{recursive_search, SearchOutcome, SearchWindow};
///
/// let seq = [1, 2, 3, 5, 67, 143, 786, 6577, 89899];
/// let window = SearchWindow::full(seq.len());
///
/// assert_eq!(recursive_search(&seq, window, &786), SearchOutcome::Found(6));
/// assert_eq!(recursive_search(&seq, window, &4), SearchOutcome::NotFound);
/// ```
pub fn recursive_search<T: Ord>(seq: &[T], window: SearchWindow, target: &T) -> SearchOutcome {
    recursive_search_by(seq, window, |elem| elem.cmp(target))
}

/// Like [`recursive_search`], with a caller-supplied comparator.
pub fn recursive_search_by<T, F>(seq: &[T], window: SearchWindow, mut f: F) -> SearchOutcome
where
    F: FnMut(&T) -> Ordering,
{
    descend_from(seq, window, &mut f, &mut ())
}

pub(crate) fn descend_from<T, F, O>(
    seq: &[T],
    window: SearchWindow,
    f: &mut F,
    observer: &mut O,
) -> SearchOutcome
where
    F: FnMut(&T) -> Ordering,
    O: ProbeObserver + ?Sized,
{
    check_window_in_bounds(window, seq.len());
    descend(seq, window, f, observer, window.len(), 0)
}

fn descend<T, F, O>(
    seq: &[T],
    window: SearchWindow,
    f: &mut F,
    observer: &mut O,
    initial_len: usize,
    depth: u32,
) -> SearchOutcome
where
    F: FnMut(&T) -> Ordering,
    O: ProbeObserver + ?Sized,
{
    let Some(mid) = window.midpoint() else {
        return SearchOutcome::NotFound;
    };
    check_probe_in_window(window, mid);
    check_depth_bounded(depth + 1, initial_len);

    let ordering = f(&seq[mid]);
    observer.observe(probe_at(window, mid, ordering));

    let next = match ordering {
        Ordering::Equal => return SearchOutcome::Found(mid),
        Ordering::Greater => window.narrow_left(mid),
        Ordering::Less => window.narrow_right(mid),
    };
    check_window_shrinks(window, next);

    descend(seq, next, f, observer, initial_len, depth + 1)
}
