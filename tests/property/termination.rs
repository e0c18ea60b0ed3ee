//! Comparison count never exceeds `ceil(log2(n + 1))`.

use super::common::{sorted_dense, sorted_sparse, CountingCmp};
use proptest::prelude::*;
use sorted_search::verify::contracts::max_probes;
use sorted_search::{trace_search, SearchWindow, Strategy as SearchStrategy};

fn bound(len: usize) -> usize {
    ((len + 1) as f64).log2().ceil() as usize
}

proptest! {
    /// Property: the comparator runs at most ceil(log2(n + 1)) times.
    #[test]
    fn prop_comparisons_bounded(seq in sorted_sparse(), target in any::<i64>()) {
        for strategy in SearchStrategy::ALL {
            let counter = CountingCmp::new();
            strategy.search_by(&seq, SearchWindow::full(seq.len()), counter.against(&target));
            prop_assert!(
                counter.count() <= bound(seq.len()),
                "{}: {} comparisons for n = {}",
                strategy, counter.count(), seq.len()
            );
        }
    }

    /// Property: each probe strictly shrinks the window.
    #[test]
    fn prop_window_strictly_shrinks(seq in sorted_dense(), target in -25i32..25) {
        for strategy in SearchStrategy::ALL {
            let trace = trace_search(&seq, SearchWindow::full(seq.len()), &target, strategy);
            for pair in trace.probes.windows(2) {
                let before = pair[0].right - pair[0].left;
                let after = pair[1].right - pair[1].left;
                prop_assert!(after < before);
                prop_assert!(pair[1].left >= pair[0].left && pair[1].right <= pair[0].right);
            }
            prop_assert!(trace.comparisons() <= max_probes(seq.len()) as usize);
        }
    }
}

#[test]
fn worst_case_hits_the_bound_exactly() {
    // A miss past the last element walks the longest path.
    for len in [1usize, 2, 3, 7, 8, 1000, 1023, 1024] {
        let seq: Vec<usize> = (0..len).collect();
        let trace = trace_search(&seq, SearchWindow::full(len), &len, SearchStrategy::Iterative);
        assert_eq!(trace.comparisons(), bound(len), "len {}", len);
    }
}

#[test]
fn large_input_stays_logarithmic() {
    let seq: Vec<u64> = (0..1u64 << 20).map(|i| i * 2).collect();
    for strategy in SearchStrategy::ALL {
        let counter = CountingCmp::new();
        strategy.search_by(&seq, SearchWindow::full(seq.len()), counter.against(&1));
        assert!(counter.count() <= 21);
    }
}
