//! The checked path: sortedness and window validation.

use sorted_search::{SearchError, SearchOutcome, SearchWindow, SortedSlice, Strategy};

#[test]
fn rejects_first_descent() {
    let values = [1, 2, 3, 2, 1];
    assert_eq!(
        SortedSlice::new(&values).unwrap_err(),
        SearchError::Unsorted { position: 3 }
    );
}

#[test]
fn error_messages_are_descriptive() {
    let err = SearchError::Unsorted { position: 4 };
    assert_eq!(err.to_string(), "sequence not sorted at position 4");

    let err = SearchError::WindowOutOfBounds { right: 9, len: 9 };
    assert_eq!(
        err.to_string(),
        "window right bound 9 out of bounds for sequence of length 9"
    );
}

#[test]
fn accepts_non_decreasing_with_runs() {
    let values = ["a", "a", "b", "c", "c"];
    let sorted = SortedSlice::new(&values).unwrap();
    assert!(matches!(
        sorted.search(&"c", Strategy::Iterative),
        SearchOutcome::Found(3..=4)
    ));
}

#[test]
fn last_valid_right_bound_accepted() {
    let values = [1, 2, 3, 4];
    let sorted = SortedSlice::new(&values).unwrap();
    assert_eq!(
        sorted
            .search_window(SearchWindow::new(0, 3), &4, Strategy::Recursive)
            .unwrap(),
        SearchOutcome::Found(3)
    );
    assert!(sorted
        .search_window(SearchWindow::new(0, 4), &4, Strategy::Recursive)
        .is_err());
}

#[test]
fn search_by_supports_keys() {
    #[derive(Debug)]
    struct Reading {
        timestamp: u64,
        value: f64,
    }

    let readings = [
        Reading { timestamp: 10, value: 0.5 },
        Reading { timestamp: 20, value: 1.5 },
        Reading { timestamp: 30, value: 2.5 },
    ];
    let sorted = SortedSlice::new_by(&readings, |a, b| a.timestamp.cmp(&b.timestamp)).unwrap();
    let outcome = sorted
        .search_by(sorted.full_window(), |r| r.timestamp.cmp(&20), Strategy::Iterative)
        .unwrap();
    assert_eq!(outcome, SearchOutcome::Found(1));
    assert_eq!(readings[1].value, 1.5);
}

#[test]
fn trace_records_each_probe_inside_its_window() {
    let values: Vec<u32> = (0..100).collect();
    let sorted = SortedSlice::new(&values).unwrap();
    let trace = sorted
        .trace(sorted.full_window(), &77, Strategy::Iterative)
        .unwrap();
    assert_eq!(trace.outcome, SearchOutcome::Found(77));
    for probe in &trace.probes {
        assert!(probe.left <= probe.mid && probe.mid <= probe.right);
    }
}
