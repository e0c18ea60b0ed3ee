// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loop over a shrinking window.

use std::cmp::Ordering;

use super::{probe_at, ProbeObserver};
use crate::types::{SearchOutcome, SearchWindow};
use crate::verify::contracts::{check_probe_in_window, check_window_in_bounds, check_window_shrinks};

/// Search `window` of the sorted `seq` for `target` with a loop.
///
/// Returns the index of an element equal to `target`, or
/// [`SearchOutcome::NotFound`]. With duplicates, any one of the equal
/// indices may come back.
///
/// # Time Complexity
///
/// At most `ceil(log2(n + 1))` comparisons for a window of `n` elements.
///
/// # Panics
///
/// Panics if a non-empty `window` reaches past the end of `seq`. Use
/// [`crate::SortedSlice`] for a checked variant.
///
/// # Examples
///
/// ```
/// use sorted_search::{iterative_search, SearchOutcome, SearchWindow};
///
/// let seq = [1, 2, 4, 5, 6, 8, 34, 56, 786, 8798];
/// let window = SearchWindow::full(seq.len());
///
/// assert_eq!(iterative_search(&seq, window, &56), SearchOutcome::Found(7));
/// assert_eq!(iterative_search(&seq, window, &7), SearchOutcome::NotFound);
/// ```
pub fn iterative_search<T: Ord>(seq: &[T], window: SearchWindow, target: &T) -> SearchOutcome {
    iterative_search_by(seq, window, |elem| elem.cmp(target))
}

/// Like [`iterative_search`], with a comparator reporting how each element
/// orders against the target (`Greater` means the element is too big).
pub fn iterative_search_by<T, F>(seq: &[T], window: SearchWindow, f: F) -> SearchOutcome
where
    F: FnMut(&T) -> Ordering,
{
    walk(seq, window, f, &mut ())
}

pub(crate) fn walk<T, F, O>(
    seq: &[T],
    mut window: SearchWindow,
    mut f: F,
    observer: &mut O,
) -> SearchOutcome
where
    F: FnMut(&T) -> Ordering,
    O: ProbeObserver + ?Sized,
{
    check_window_in_bounds(window, seq.len());

    while let Some(mid) = window.midpoint() {
        check_probe_in_window(window, mid);

        let ordering = f(&seq[mid]);
        observer.observe(probe_at(window, mid, ordering));

        let next = match ordering {
            Ordering::Equal => return SearchOutcome::Found(mid),
            Ordering::Greater => window.narrow_left(mid),
            Ordering::Less => window.narrow_right(mid),
        };
        check_window_shrinks(window, next);
        window = next;
    }

    SearchOutcome::NotFound
}
