// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search loop.
//!
//! These are `debug_assert!` checks: they cost nothing in release builds and
//! fire during tests when a strategy breaks the window invariant. None of
//! them touch the elements, so comparison counts seen by a caller's
//! comparator are the same in debug and release.
//!
//! | Contract                   | Invariant                                         |
//! |----------------------------|---------------------------------------------------|
//! | `check_window_in_bounds`   | a non-empty window never reaches past the slice   |
//! | `check_probe_in_window`    | the midpoint lies inside the window it splits     |
//! | `check_window_shrinks`     | every step removes at least the probed index      |
//! | `check_depth_bounded`      | recursion depth stays within `ceil(log2(n + 1))` |

use crate::types::SearchWindow;

/// Check that a non-empty window only covers valid indices.
///
/// # Panics (debug builds only)
/// Panics if a non-empty window has `right >= len`.
#[inline]
pub fn check_window_in_bounds(window: SearchWindow, len: usize) {
    debug_assert!(
        !matches!(window.right(), Some(right) if right >= len),
        "Contract violation: window {} reaches past slice of length {}",
        window,
        len
    );
}

/// Check that a probe index lies inside the window it was drawn from.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_probe_in_window(window: SearchWindow, mid: usize) {
    debug_assert!(
        window.contains(mid),
        "Contract violation: midpoint {} outside window {}",
        mid,
        window
    );
}

/// Check that narrowing strictly shrank the window and stayed inside it.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_window_shrinks(before: SearchWindow, after: SearchWindow) {
    debug_assert!(
        after.len() < before.len(),
        "Contract violation: window {} did not shrink (was {})",
        after,
        before
    );
    debug_assert!(
        after.is_empty() || (after.left() >= before.left() && after.right() <= before.right()),
        "Contract violation: window {} escaped {}",
        after,
        before
    );
}

/// Check that recursion depth respects the logarithmic bound for a window
/// of the given starting length.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_depth_bounded(depth: u32, initial_len: usize) {
    debug_assert!(
        depth <= max_probes(initial_len),
        "Contract violation: recursion depth {} exceeds bound {} for length {}",
        depth,
        max_probes(initial_len),
        initial_len
    );
}

/// Upper bound on probes for a window of `len` elements: `ceil(log2(len + 1))`.
///
/// That is the bit length of `len`, so no floating point is involved.
#[inline]
pub fn max_probes(len: usize) -> u32 {
    usize::BITS - len.leading_zeros()
}
