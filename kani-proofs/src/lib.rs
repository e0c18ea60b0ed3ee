// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the sorted-search strategies.
//!
//! This standalone crate carries a copy of the two search loops over plain
//! `usize` windows and proves their correctness for every sorted array up to
//! a small bound, without pulling in the main crate's dependencies.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither strategy indexes out of bounds
//! 2. **Found**: a returned index holds an element equal to the target
//! 3. **Absence**: `None` is returned only when no element equals the target
//! 4. **Equivalence**: iterative and recursive agree on every input
//! 5. **Termination**: at most `ceil(log2(n + 1))` comparisons

use std::cmp::Ordering;

/// Largest array the proofs enumerate symbolically.
pub const MAX_LEN: usize = 8;

// ============================================================================
// SEARCH LOOPS (mirrors src/search/{iterative,recursive}.rs)
// ============================================================================

/// Iterative search over the half-open window `[left, end)`.
///
/// Returns the found index (if any) and the number of comparisons made.
pub fn iterative(arr: &[u8], mut left: usize, mut end: usize, target: u8) -> (Option<usize>, u32) {
    let mut comparisons = 0;
    while left < end {
        let mid = left + (end - 1 - left) / 2;
        comparisons += 1;
        match arr[mid].cmp(&target) {
            Ordering::Equal => return (Some(mid), comparisons),
            Ordering::Greater => end = mid,
            Ordering::Less => left = mid + 1,
        }
    }
    (None, comparisons)
}

/// Recursive search over the half-open window `[left, end)`.
pub fn recursive(arr: &[u8], left: usize, end: usize, target: u8) -> Option<usize> {
    if left >= end {
        return None;
    }
    let mid = left + (end - 1 - left) / 2;
    match arr[mid].cmp(&target) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => recursive(arr, left, mid, target),
        Ordering::Less => recursive(arr, mid + 1, end, target),
    }
}

/// `ceil(log2(len + 1))`, the bit length of `len`.
pub fn max_probes(len: usize) -> u32 {
    usize::BITS - len.leading_zeros()
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic sorted array of symbolic length `<= MAX_LEN`.
    fn any_sorted() -> ([u8; MAX_LEN], usize) {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut arr = [0u8; MAX_LEN];
        for i in 0..MAX_LEN {
            arr[i] = kani::any();
        }
        for i in 1..MAX_LEN {
            kani::assume(i >= len || arr[i - 1] <= arr[i]);
        }
        (arr, len)
    }

    /// Verify both strategies are correct and agree on every sorted input.
    #[kani::proof]
    #[kani::unwind(10)] // MAX_LEN + 2
    fn verify_found_absent_equivalent() {
        let (arr, len) = any_sorted();
        let slice = &arr[..len];
        let target: u8 = kani::any();

        let (it, comparisons) = iterative(slice, 0, len, target);
        let rec = recursive(slice, 0, len, target);

        match it {
            Some(i) => kani::assert(slice[i] == target, "found index must hold the target"),
            None => {
                for i in 0..len {
                    kani::assert(slice[i] != target, "NotFound only when target is absent");
                }
            }
        }
        kani::assert(it == rec, "iterative and recursive must agree");
        kani::assert(
            comparisons <= max_probes(len),
            "comparisons must stay within ceil(log2(n + 1))",
        );
    }

    /// Verify an empty window never probes.
    #[kani::proof]
    fn verify_empty_window() {
        let arr = [0u8; MAX_LEN];
        let left: usize = kani::any_where(|&l| l <= MAX_LEN);
        let (found, comparisons) = iterative(&arr, left, left, kani::any());
        kani::assert(found.is_none(), "empty window must report NotFound");
        kani::assert(comparisons == 0, "empty window must not compare");
    }
}
