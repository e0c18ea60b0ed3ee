// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: both strategies agree and are correct on sorted input.
//!
//! The fuzzer supplies arbitrary values which are sorted before searching,
//! plus a target and an in-bounds window.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sorted_search::{trace_search, SearchOutcome, SearchWindow, Strategy};

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<i32>,
    target: i32,
    left: u8,
    right: u8,
}

fuzz_target!(|input: Input| {
    let mut values = input.values;
    values.sort();

    let window = match values.len().checked_sub(1) {
        Some(last) => SearchWindow::new(
            (input.left as usize).min(last),
            (input.right as usize).min(last),
        ),
        None => SearchWindow::empty(),
    };

    let it = trace_search(&values, window, &input.target, Strategy::Iterative);
    let rec = trace_search(&values, window, &input.target, Strategy::Recursive);

    // Same midpoints, same answer
    assert_eq!(it.probes, rec.probes);
    assert_eq!(it.outcome, rec.outcome);

    let in_window = window
        .right()
        .is_some_and(|right| (window.left()..=right).any(|i| values[i] == input.target));
    match it.outcome {
        SearchOutcome::Found(i) => {
            assert!(window.contains(i), "index {} outside window {}", i, window);
            assert_eq!(values[i], input.target);
        }
        SearchOutcome::NotFound => assert!(!in_window, "missed target inside {}", window),
    }

    let bound = (usize::BITS - window.len().leading_zeros()) as usize;
    assert!(it.comparisons() <= bound);
});
