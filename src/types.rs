// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types for window-based search.
//!
//! A search narrows a [`SearchWindow`] over a sorted slice until it either
//! lands on the target or runs out of room. The answer is a
//! [`SearchOutcome`], never a magic index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive index range `[left, right]` still under consideration.
///
/// `left > right` is the empty window. `right` is `None` when the bound has
/// dropped below zero, which is how an empty slice's full window
/// (`right == -1`) and a left step at index 0 are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchWindow {
    left: usize,
    right: Option<usize>,
}

impl SearchWindow {
    /// Window over the inclusive bounds `[left, right]`.
    ///
    /// `left > right` is accepted and yields an empty window. Every `usize`
    /// is a valid bound, including `usize::MAX`.
    pub fn new(left: usize, right: usize) -> Self {
        Self {
            left,
            right: Some(right),
        }
    }

    /// Window covering every index of a slice of length `len`.
    ///
    /// Equivalent to `new(0, len - 1)` without underflowing at `len == 0`.
    pub fn full(len: usize) -> Self {
        Self {
            left: 0,
            right: len.checked_sub(1),
        }
    }

    /// The window with nothing left to search.
    pub fn empty() -> Self {
        Self {
            left: 0,
            right: None,
        }
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn left(&self) -> usize {
        self.left
    }

    /// Upper bound (inclusive), or `None` if the window is empty.
    #[inline]
    pub fn right(&self) -> Option<usize> {
        self.right.filter(|&right| self.left <= right)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right().is_none()
    }

    /// Number of indices still under consideration.
    ///
    /// Saturates at `usize::MAX` for `[0, usize::MAX]`, the one window one
    /// wider than a `usize` can count.
    #[inline]
    pub fn len(&self) -> usize {
        self.right()
            .map_or(0, |right| (right - self.left).saturating_add(1))
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.left <= index && self.right().is_some_and(|right| index <= right)
    }

    /// Floor of `(left + right) / 2`, or `None` for an empty window.
    ///
    /// Computed as `left + (right - left) / 2` so it cannot overflow.
    #[inline]
    pub fn midpoint(&self) -> Option<usize> {
        let right = self.right()?;
        Some(self.left + (right - self.left) / 2)
    }

    /// Keep only the indices strictly left of `mid` (`right = mid - 1`).
    #[inline]
    pub fn narrow_left(self, mid: usize) -> Self {
        Self {
            left: self.left,
            right: mid.checked_sub(1),
        }
    }

    /// Keep only the indices strictly right of `mid` (`left = mid + 1`).
    ///
    /// `mid` is an index that was just read, so it is below `usize::MAX`.
    #[inline]
    pub fn narrow_right(self, mid: usize) -> Self {
        Self {
            left: mid + 1,
            right: self.right,
        }
    }
}

impl fmt::Display for SearchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.right() {
            Some(right) => write!(f, "[{}, {}]", self.left, right),
            None => write!(f, "[{}, -]", self.left),
        }
    }
}

/// Result of a search: the index of a matching element, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "index", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// An element equal to the target sits at this index.
    Found(usize),
    /// No element in the searched window equals the target.
    NotFound,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        match *self {
            SearchOutcome::Found(i) => Some(i),
            SearchOutcome::NotFound => None,
        }
    }
}

impl From<SearchOutcome> for Option<usize> {
    fn from(outcome: SearchOutcome) -> Self {
        outcome.index()
    }
}

impl From<Option<usize>> for SearchOutcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(SearchOutcome::NotFound, SearchOutcome::Found)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(i) => write!(f, "found at index {}", i),
            SearchOutcome::NotFound => write!(f, "Not Found"),
        }
    }
}

/// Which way a probe sent the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// The midpoint element equals the target.
    Hit,
    /// The midpoint element is greater; continue in `[left, mid - 1]`.
    Left,
    /// The midpoint element is smaller; continue in `[mid + 1, right]`.
    Right,
}

/// One comparison of the midpoint element against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Probe {
    pub left: usize,
    pub right: usize,
    pub mid: usize,
    pub step: Step,
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self.step {
            Step::Hit => "hit",
            Step::Left => "go left",
            Step::Right => "go right",
        };
        write!(
            f,
            "window [{}, {}] mid {} -> {}",
            self.left, self.right, self.mid, step
        )
    }
}

/// Control-flow shape used to walk the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Loop over a shrinking window.
    #[default]
    Iterative,
    /// Recurse on the narrowed window.
    Recursive,
}

impl Strategy {
    /// Both strategies, in a stable order.
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
