// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/search_test.rs
// Version: 1.1.0
//
// This file runs real searches over small ranges: known preimages must be
// found in enumeration order and unreachable targets must exhaust after
// exactly the expected number of candidates.
//
// Tree Location:
// - tests/search_test.rs (search controller and worker pool tests)
// - Depends on: sha3run

use sha3run::core::{Outcome, SearchRange};
use sha3run::search::{expected_count, search, search_parallel};
use sha3run::pipeline;

#[test]
fn test_finds_known_preimage_short() {
    let target = pipeline(b"AAA");
    let range = SearchRange::new(65, 66).unwrap();
    let report = search(range, 3, &target).unwrap();

    assert_eq!(
        report.outcome,
        Outcome::Found {
            candidate: b"AAA".to_vec(),
            digest: target
        }
    );
    // 'A' is 33 steps past ' ' in both free positions
    assert_eq!(report.visited, 33 * 95 + 33 + 1);
}

#[test]
fn test_finds_known_preimage_default_length() {
    let target = pipeline(b"AAAAA");
    let range = SearchRange::new(65, 66).unwrap();
    let report = search(range, 5, &target).unwrap();

    assert_eq!(
        report.outcome,
        Outcome::Found {
            candidate: b"AAAAA".to_vec(),
            digest: target
        }
    );
}

#[test]
fn test_exhausts_single_candidate() {
    let range = SearchRange::new(32, 33).unwrap();
    let report = search(range, 1, &[0u8; 32]).unwrap();

    assert_eq!(report.outcome, Outcome::Exhausted { last: b" ".to_vec() });
    assert_eq!(report.visited, 1);
}

#[test]
fn test_exhausts_after_expected_count() {
    let range = SearchRange::new(32, 34).unwrap();
    let report = search(range, 2, &[0u8; 32]).unwrap();

    assert_eq!(report.visited, expected_count(range, 2));
    assert_eq!(report.outcome, Outcome::Exhausted { last: b"!~".to_vec() });
}

#[test]
fn test_target_outside_range_not_found() {
    let target = pipeline(b"Zz");
    let range = SearchRange::new(65, 70).unwrap();
    let report = search(range, 2, &target).unwrap();
    assert!(!report.outcome.is_found());
}

#[test]
fn test_parallel_finds_preimage() {
    let target = pipeline(b"xY");
    let report = search_parallel(SearchRange::full(), 2, &target, 4).unwrap();

    match report.outcome {
        Outcome::Found { candidate, digest } => {
            assert_eq!(candidate, b"xY");
            assert_eq!(digest, target);
        }
        other => panic!("expected a match, got {:?}", other),
    }
}

#[test]
fn test_parallel_exhausts_whole_range() {
    let range = SearchRange::new(40, 50).unwrap();
    let report = search_parallel(range, 2, &[0u8; 32], 3).unwrap();

    assert_eq!(report.visited, expected_count(range, 2));
    assert_eq!(report.outcome, Outcome::Exhausted { last: b"1~".to_vec() });
}

#[test]
fn test_parallel_single_thread_matches_sequential() {
    let target = pipeline(b"Q#");
    let range = SearchRange::new(80, 82).unwrap();
    let sequential = search(range, 2, &target).unwrap();
    let pooled = search_parallel(range, 2, &target, 1).unwrap();

    assert_eq!(sequential.outcome, pooled.outcome);
    assert_eq!(sequential.visited, pooled.visited);
}
