//! Shared test utilities and strategies.

#![allow(dead_code)]

use proptest::prelude::*;

pub use sorted_search::testing::{outcome_is_correct, positions_of, sorted, CountingCmp};

/// Sorted vectors drawn from a narrow range, so duplicates are common.
pub fn sorted_dense() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20i32..20, 0..48).prop_map(sorted)
}

/// Sorted vectors of distinct values spread over a wide range.
pub fn sorted_sparse() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(any::<i64>(), 0..200).prop_map(|set| set.into_iter().collect())
}

/// 80% dense, 20% sparse, unified on i64.
pub fn sorted_mixed() -> impl Strategy<Value = Vec<i64>> {
    prop_oneof![
        4 => sorted_dense().prop_map(|v| v.into_iter().map(i64::from).collect::<Vec<_>>()),
        1 => sorted_sparse(),
    ]
}

/// A sorted vector with one of its own elements picked as target.
pub fn sorted_with_member() -> impl Strategy<Value = (Vec<i64>, i64)> {
    sorted_mixed()
        .prop_filter("need at least one element", |v| !v.is_empty())
        .prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..len)
        })
        .prop_map(|(v, i)| {
            let target = v[i];
            (v, target)
        })
}

/// A sorted vector paired with a value guaranteed not to be in it.
pub fn sorted_with_absent() -> impl Strategy<Value = (Vec<i64>, i64)> {
    (sorted_mixed(), any::<i64>()).prop_filter("target must be absent", |(v, t)| {
        v.binary_search(t).is_err()
    })
}

/// The first and last index of the full window, or `None` for empty input.
pub fn inclusive_bounds(len: usize) -> Option<(usize, usize)> {
    len.checked_sub(1).map(|right| (0, right))
}
