// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::cell::Cell;
use std::cmp::Ordering;

use crate::types::SearchOutcome;

/// Reference answer by linear scan: every index holding `target`.
pub fn positions_of<T: PartialEq>(seq: &[T], target: &T) -> Vec<usize> {
    seq.iter()
        .enumerate()
        .filter(|(_, e)| *e == target)
        .map(|(i, _)| i)
        .collect()
}

/// True if `outcome` is a correct answer for `target` in `seq`.
///
/// `Found(i)` must point at an equal element; `NotFound` is only correct when
/// no element is equal.
pub fn outcome_is_correct<T: PartialEq>(seq: &[T], target: &T, outcome: SearchOutcome) -> bool {
    match outcome {
        SearchOutcome::Found(i) => seq.get(i) == Some(target),
        SearchOutcome::NotFound => !seq.contains(target),
    }
}

/// Sort and return a vector.
pub fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values
}

/// A comparator wrapper that counts how many times it runs.
#[derive(Debug, Default)]
pub struct CountingCmp {
    count: Cell<usize>,
}

impl CountingCmp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comparator against `target` that bumps the counter on each call.
    pub fn against<'a, T: Ord>(&'a self, target: &'a T) -> impl FnMut(&T) -> Ordering + 'a {
        move |elem| {
            self.count.set(self.count.get() + 1);
            elem.cmp(target)
        }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}
