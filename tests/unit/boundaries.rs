//! Boundary cases for both strategies.

use sorted_search::{SearchOutcome, SearchWindow, Strategy};

fn both(seq: &[i32], window: SearchWindow, target: i32) -> SearchOutcome {
    let a = Strategy::Iterative.search(seq, window, &target);
    let b = Strategy::Recursive.search(seq, window, &target);
    assert_eq!(a, b, "strategies disagree on {:?} / {}", seq, target);
    a
}

fn full(seq: &[i32], target: i32) -> SearchOutcome {
    both(seq, SearchWindow::full(seq.len()), target)
}

#[test]
fn empty_sequence() {
    assert_eq!(full(&[], 0), SearchOutcome::NotFound);
    assert_eq!(full(&[], i32::MIN), SearchOutcome::NotFound);
}

#[test]
fn empty_window_from_left_past_right() {
    let seq = [1, 2, 3, 4];
    assert_eq!(both(&seq, SearchWindow::new(3, 2), 3), SearchOutcome::NotFound);
    assert_eq!(both(&seq, SearchWindow::new(1, 0), 1), SearchOutcome::NotFound);
}

#[test]
fn single_element_match() {
    assert_eq!(full(&[42], 42), SearchOutcome::Found(0));
}

#[test]
fn single_element_miss() {
    assert_eq!(full(&[42], 41), SearchOutcome::NotFound);
    assert_eq!(full(&[42], 43), SearchOutcome::NotFound);
}

#[test]
fn target_below_all() {
    assert_eq!(full(&[10, 20, 30, 40, 50], 9), SearchOutcome::NotFound);
    assert_eq!(full(&[10, 20, 30, 40, 50], i32::MIN), SearchOutcome::NotFound);
}

#[test]
fn target_above_all() {
    assert_eq!(full(&[10, 20, 30, 40, 50], 51), SearchOutcome::NotFound);
    assert_eq!(full(&[10, 20, 30, 40, 50], i32::MAX), SearchOutcome::NotFound);
}

#[test]
fn every_position_reachable() {
    for len in 1..40 {
        let seq: Vec<i32> = (0..len).map(|i| i * 3).collect();
        for (i, &value) in seq.iter().enumerate() {
            assert_eq!(full(&seq, value), SearchOutcome::Found(i), "len {}", len);
            assert_eq!(full(&seq, value + 1), SearchOutcome::NotFound, "len {}", len);
        }
    }
}

#[test]
fn all_duplicates() {
    let seq = [7; 9];
    assert!(matches!(full(&seq, 7), SearchOutcome::Found(0..=8)));
    assert_eq!(full(&seq, 6), SearchOutcome::NotFound);
}

#[test]
fn window_restricts_answer() {
    let seq = [1, 3, 5, 7, 9, 11];
    assert_eq!(both(&seq, SearchWindow::new(0, 2), 9), SearchOutcome::NotFound);
    assert_eq!(both(&seq, SearchWindow::new(3, 5), 9), SearchOutcome::Found(4));
    assert_eq!(both(&seq, SearchWindow::new(4, 4), 9), SearchOutcome::Found(4));
}

#[test]
fn extreme_values() {
    let seq = [i32::MIN, -1, 0, 1, i32::MAX];
    assert_eq!(full(&seq, i32::MIN), SearchOutcome::Found(0));
    assert_eq!(full(&seq, i32::MAX), SearchOutcome::Found(4));
}
