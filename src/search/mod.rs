// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over a window of a sorted slice.
//!
//! Two strategies walk the same window the same way. The iterative one loops;
//! the recursive one calls itself on the narrowed window. They probe identical
//! midpoints, so for any input they return identical outcomes, which the
//! property tests lean on.
//!
//! ```text
//!   [left ............ mid ............ right]
//!          seq[mid] > target   seq[mid] < target
//!   [left .. mid-1]                 [mid+1 .. right]
//! ```

mod iterative;
mod recursive;

pub use iterative::{iterative_search, iterative_search_by};
pub use recursive::{recursive_search, recursive_search_by};

use std::cmp::Ordering;

use serde::Serialize;

use crate::types::{Probe, SearchOutcome, SearchWindow, Step, Strategy};

/// Receives every probe a strategy makes, in order.
pub trait ProbeObserver {
    fn observe(&mut self, probe: Probe);
}

/// Discards probes. The default for untraced searches.
impl ProbeObserver for () {
    #[inline(always)]
    fn observe(&mut self, _probe: Probe) {}
}

impl ProbeObserver for Vec<Probe> {
    fn observe(&mut self, probe: Probe) {
        self.push(probe);
    }
}

impl<O: ProbeObserver + ?Sized> ProbeObserver for &mut O {
    fn observe(&mut self, probe: Probe) {
        (**self).observe(probe);
    }
}

/// Build the probe record for comparing `seq[mid]` inside a non-empty window.
#[inline]
pub(crate) fn probe_at(window: SearchWindow, mid: usize, ordering: Ordering) -> Probe {
    Probe {
        left: window.left(),
        // a window that yielded `mid` always has a right bound
        right: window.right().unwrap_or(mid),
        mid,
        step: match ordering {
            Ordering::Equal => Step::Hit,
            Ordering::Greater => Step::Left,
            Ordering::Less => Step::Right,
        },
    }
}

/// Every probe of one search, plus where it ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTrace {
    pub strategy: Strategy,
    pub probes: Vec<Probe>,
    pub outcome: SearchOutcome,
}

impl SearchTrace {
    /// Number of element comparisons made.
    pub fn comparisons(&self) -> usize {
        self.probes.len()
    }
}

impl Strategy {
    /// Run this strategy over `window` of `seq`.
    ///
    /// # Panics
    ///
    /// Panics if a non-empty `window` reaches past the end of `seq`.
    pub fn search<T: Ord>(&self, seq: &[T], window: SearchWindow, target: &T) -> SearchOutcome {
        self.search_by(seq, window, |elem| elem.cmp(target))
    }

    /// Run this strategy with a caller-supplied comparator.
    pub fn search_by<T, F>(&self, seq: &[T], window: SearchWindow, f: F) -> SearchOutcome
    where
        F: FnMut(&T) -> Ordering,
    {
        self.search_observed(seq, window, f, &mut ())
    }

    /// Run this strategy, reporting each probe to `observer`.
    pub fn search_observed<T, F, O>(
        &self,
        seq: &[T],
        window: SearchWindow,
        mut f: F,
        observer: &mut O,
    ) -> SearchOutcome
    where
        F: FnMut(&T) -> Ordering,
        O: ProbeObserver + ?Sized,
    {
        match self {
            Strategy::Iterative => iterative::walk(seq, window, f, observer),
            Strategy::Recursive => recursive::descend_from(seq, window, &mut f, observer),
        }
    }
}

/// Search the whole of a sorted slice.
///
/// # Examples
///
/// ```
/// use sorted_search::{search, SearchOutcome};
///
/// let arr = [4, 10, 12, 13, 20, 50, 66];
///
/// assert_eq!(search(&arr, &4), SearchOutcome::Found(0));
/// assert_eq!(search(&arr, &40), SearchOutcome::NotFound);
/// ```
pub fn search<T: Ord>(seq: &[T], target: &T) -> SearchOutcome {
    iterative_search(seq, SearchWindow::full(seq.len()), target)
}

/// Search and record every probe.
///
/// # Panics
///
/// Panics if a non-empty `window` reaches past the end of `seq`.
pub fn trace_search<T: Ord>(
    seq: &[T],
    window: SearchWindow,
    target: &T,
    strategy: Strategy,
) -> SearchTrace {
    trace_search_by(seq, window, |elem| elem.cmp(target), strategy)
}

/// [`trace_search`] with a caller-supplied comparator.
pub fn trace_search_by<T, F>(
    seq: &[T],
    window: SearchWindow,
    f: F,
    strategy: Strategy,
) -> SearchTrace
where
    F: FnMut(&T) -> Ordering,
{
    let mut probes = Vec::new();
    let outcome = strategy.search_observed(seq, window, f, &mut probes);

    tracing::trace!(
        %strategy,
        %window,
        comparisons = probes.len(),
        %outcome,
        "search traced"
    );

    SearchTrace {
        strategy,
        probes,
        outcome,
    }
}
