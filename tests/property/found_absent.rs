//! Found and absence properties.
//!
//! Every element present in a sorted sequence is found at an index holding an
//! equal element; every value not present comes back as `NotFound`.

use super::common::{
    inclusive_bounds, outcome_is_correct, positions_of, sorted_dense, sorted_with_absent,
    sorted_with_member,
};
use proptest::prelude::*;
use sorted_search::{SearchOutcome, SearchWindow, SortedSlice, Strategy as SearchStrategy};

proptest! {
    /// Property: a present element is found, at an index holding that element.
    #[test]
    fn prop_member_is_found((seq, target) in sorted_with_member()) {
        for strategy in SearchStrategy::ALL {
            let outcome = strategy.search(&seq, SearchWindow::full(seq.len()), &target);
            let index = outcome.index();
            prop_assert!(index.is_some(), "{} missed {}", strategy, target);
            prop_assert_eq!(seq[index.unwrap()], target);
        }
    }

    /// Property: an absent value is never reported as found.
    #[test]
    fn prop_absent_is_not_found((seq, target) in sorted_with_absent()) {
        for strategy in SearchStrategy::ALL {
            let outcome = strategy.search(&seq, SearchWindow::full(seq.len()), &target);
            prop_assert_eq!(outcome, SearchOutcome::NotFound);
        }
    }

    /// Property: with duplicates, the index returned is one of the equal ones.
    #[test]
    fn prop_duplicate_index_is_an_equal_one(seq in sorted_dense(), target in -25i32..25) {
        let expected = positions_of(&seq, &target);
        for strategy in SearchStrategy::ALL {
            match strategy.search(&seq, SearchWindow::full(seq.len()), &target) {
                SearchOutcome::Found(i) => prop_assert!(expected.contains(&i)),
                SearchOutcome::NotFound => prop_assert!(expected.is_empty()),
            }
        }
    }

    /// Property: searching a sub-window answers for that window only.
    #[test]
    fn prop_sub_window_is_local(
        seq in sorted_dense(),
        target in -25i32..25,
        a in 0usize..48,
        b in 0usize..48,
    ) {
        let Some((_, last)) = inclusive_bounds(seq.len()) else {
            return Ok(());
        };
        let left = a.min(last);
        let right = b.min(last);
        let window = SearchWindow::new(left, right);
        let slice = if left <= right { &seq[left..=right] } else { &seq[..0] };

        for strategy in SearchStrategy::ALL {
            let outcome = strategy.search(&seq, window, &target);
            let local = outcome.index().map(|i| i - left).into();
            prop_assert!(outcome_is_correct(slice, &target, local));
        }
    }

    /// Property: the checked wrapper agrees with the raw functions on sorted data.
    #[test]
    fn prop_checked_agrees((seq, target) in sorted_with_member()) {
        let sorted = SortedSlice::new(&seq).unwrap();
        for strategy in SearchStrategy::ALL {
            prop_assert_eq!(
                sorted.search(&target, strategy),
                strategy.search(&seq, SearchWindow::full(seq.len()), &target)
            );
        }
    }

    /// Property: unsorted input is always rejected by the checked wrapper.
    #[test]
    fn prop_unsorted_rejected(mut seq in prop::collection::vec(any::<i16>(), 2..64)) {
        seq.sort();
        prop_assume!(seq.first() != seq.last());
        seq.reverse();
        prop_assert!(SortedSlice::new(&seq).is_err());
    }
}
