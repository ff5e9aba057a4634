// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/enumerator_test.rs
// Version: 1.0.0
//
// This file verifies odometer enumeration: exact counts, no duplicates,
// alphabet bounds, ordering and restartability.
//
// Tree Location:
// - tests/enumerator_test.rs (enumerator tests)
// - Depends on: sha3run

use sha3run::core::SearchRange;
use sha3run::search::{Odometer, enumerate, expected_count, next_candidate};
use std::collections::HashSet;

#[test]
fn test_two_first_bytes_length_two() {
    let range = SearchRange::new(32, 34).unwrap();
    let all: Vec<Vec<u8>> = enumerate(range, 2).unwrap().collect();
    let distinct: HashSet<&Vec<u8>> = all.iter().collect();

    assert_eq!(all.len(), 190);
    assert_eq!(distinct.len(), 190);
    assert_eq!(expected_count(range, 2), 190);
}

#[test]
fn test_counts_match_formula() {
    let cases = [((65, 66), 1), ((65, 68), 2), ((100, 101), 3), ((32, 127), 2)];
    for ((start, end), length) in cases {
        let range = SearchRange::new(start, end).unwrap();
        let all: Vec<Vec<u8>> = enumerate(range, length).unwrap().collect();
        let distinct: HashSet<Vec<u8>> = all.iter().cloned().collect();
        assert_eq!(all.len() as u64, expected_count(range, length));
        assert_eq!(distinct.len(), all.len(), "duplicates in {} len {}", range, length);
    }
}

#[test]
fn test_bytes_stay_in_bounds() {
    let range = SearchRange::new(120, 123).unwrap();
    for candidate in enumerate(range, 3).unwrap() {
        assert!(range.contains(candidate[0]));
        assert!(candidate[1..].iter().all(|b| (32..=126).contains(b)));
    }
}

#[test]
fn test_odometer_order_is_lexicographic() {
    let range = SearchRange::new(40, 42).unwrap();
    let all: Vec<Vec<u8>> = enumerate(range, 3).unwrap().collect();
    assert!(all.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(all.first().unwrap(), b"(  ");
    assert_eq!(all.last().unwrap(), b")~~");
}

#[test]
fn test_restart_from_any_candidate() {
    let range = SearchRange::new(65, 67).unwrap();
    let all: Vec<Vec<u8>> = enumerate(range, 2).unwrap().collect();
    for pair in all.windows(2) {
        assert_eq!(next_candidate(range, &pair[0]).as_ref(), Some(&pair[1]));
    }
    assert_eq!(next_candidate(range, all.last().unwrap()), None);
}

#[test]
fn test_resumed_odometer_continues_sequence() {
    let range = SearchRange::new(65, 66).unwrap();
    let all: Vec<Vec<u8>> = enumerate(range, 3).unwrap().collect();

    let mut odometer = Odometer::resume(range, &all[500]).unwrap();
    for expected in &all[501..520] {
        assert!(odometer.advance());
        assert_eq!(odometer.current(), expected.as_slice());
    }
}

#[test]
fn test_zero_length_rejected() {
    assert!(enumerate(SearchRange::full(), 0).is_err());
    assert!(Odometer::new(SearchRange { start: 70, end: 70 }, 2).is_err());
}
