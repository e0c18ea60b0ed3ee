// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: the checked path never panics.
//!
//! Arbitrary (often unsorted) values and arbitrary windows go through
//! `SortedSlice`. Construction must either succeed on sorted data or report
//! the first descent; searching must either answer or reject the window.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sorted_search::{SearchError, SearchWindow, SortedSlice, Strategy};

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<u16>,
    target: u16,
    left: u16,
    right: u16,
    recursive: bool,
}

fuzz_target!(|input: Input| {
    let strategy = if input.recursive {
        Strategy::Recursive
    } else {
        Strategy::Iterative
    };
    let window = SearchWindow::new(input.left as usize, input.right as usize);

    match SortedSlice::new(&input.values) {
        Ok(sorted) => match sorted.search_window(window, &input.target, strategy) {
            Ok(_) => assert!(!matches!(window.right(), Some(r) if r >= input.values.len())),
            Err(SearchError::WindowOutOfBounds { right, len }) => {
                assert!(right >= len);
            }
            Err(e) => panic!("unexpected error {e}"),
        },
        Err(SearchError::Unsorted { position }) => {
            assert!(position > 0 && input.values[position - 1] > input.values[position]);
        }
        Err(e) => panic!("unexpected error {e}"),
    }

    // Unsorted data through the unchecked wrapper still must not panic.
    let unchecked = SortedSlice::new_unchecked(&input.values);
    let _ = unchecked.search_window(window, &input.target, strategy);
});
