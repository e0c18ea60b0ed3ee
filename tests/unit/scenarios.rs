//! The reference scenarios, run through every entry point.

use sorted_search::scenarios::SCENARIOS;
use sorted_search::{
    iterative_search, recursive_search, search, SearchOutcome, SearchWindow, SortedSlice, Strategy,
};

#[test]
fn every_scenario_through_iterative() {
    for s in SCENARIOS {
        let window = SearchWindow::full(s.values.len());
        assert_eq!(
            iterative_search(s.values, window, &s.target),
            s.expected,
            "{}",
            s.name
        );
    }
}

#[test]
fn every_scenario_through_recursive() {
    for s in SCENARIOS {
        let window = SearchWindow::full(s.values.len());
        assert_eq!(
            recursive_search(s.values, window, &s.target),
            s.expected,
            "{}",
            s.name
        );
    }
}

#[test]
fn every_scenario_through_checked_wrapper() {
    for s in SCENARIOS {
        let sorted = SortedSlice::new(s.values).expect("scenario data is sorted");
        for strategy in Strategy::ALL {
            assert_eq!(sorted.search(&s.target, strategy), s.expected, "{} / {}", s.name, strategy);
        }
    }
}

#[test]
fn fifty_six_is_at_index_seven() {
    let seq = [1, 2, 4, 5, 6, 8, 34, 56, 786, 8798];
    // Explicit inclusive bounds: left = 0, right = len - 1.
    let window = SearchWindow::new(0, seq.len() - 1);
    assert_eq!(iterative_search(&seq, window, &56), SearchOutcome::Found(7));
}

#[test]
fn seven_eighty_six_is_at_index_six() {
    let seq = [1, 2, 3, 5, 67, 143, 786, 6577, 89899];
    let window = SearchWindow::new(0, seq.len() - 1);
    assert_eq!(recursive_search(&seq, window, &786), SearchOutcome::Found(6));
}

#[test]
fn four_is_not_found() {
    let seq = [1, 2, 3, 5, 67, 143, 786, 6577, 89899];
    assert_eq!(search(&seq, &4), SearchOutcome::NotFound);
    assert_eq!(SearchOutcome::NotFound.to_string(), "Not Found");
}

#[test]
fn one_past_end_right_bound_is_refused() {
    // right = len is a one-past-the-end upper bound. The checked path treats
    // it as a precondition violation rather than reading past the end.
    let seq = [1, 2, 3, 5, 67, 143, 786, 6577, 89899];
    let sorted = SortedSlice::new(&seq).unwrap();
    let result = sorted.search_window(SearchWindow::new(0, seq.len()), &786, Strategy::Recursive);
    assert!(result.is_err());
}
