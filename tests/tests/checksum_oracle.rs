use proptest::prelude::*;
use queue_checksum::{solution, xor_pattern, CheckpointLine, Checksum, ChecksumError};
use tests::{brute_force_checksum, init_tracing};

#[test]
fn test_small_lines_match_oracle() {
    init_tracing();
    for start in 0..=50 {
        for length in 1..=50 {
            assert_eq!(
                brute_force_checksum(start, length),
                solution(start, length).unwrap(),
                "start={}, length={}",
                start,
                length
            );
        }
    }
}

#[test]
fn test_long_lines_match_oracle() {
    init_tracing();
    for length in 51..=100 {
        for start in [0, 1, 2, 3, 97, 65_536, 1_999_999_000] {
            assert_eq!(brute_force_checksum(start, length), solution(start, length).unwrap());
        }
    }
}

#[test]
fn test_line_of_five() {
    init_tracing();
    // 0..=4, 5..=8, 10..=12, 15..=16, 20
    let line = CheckpointLine::new(0, 5).unwrap();
    let expected = (0..=4).chain(5..=8).chain(10..=12).chain(15..=16).chain(20..=20).fold(0, |acc, v| acc ^ v);
    assert_eq!(expected, line.checksum());
    assert_eq!(expected, solution(0, 5).unwrap());
    assert_eq!(15, line.worker_count());
}

#[test]
fn test_invalid_arguments() {
    init_tracing();
    for (start, length) in [(-1, 5), (5, 0), (1_999_999_999, 5), (2_000_000_001, 1), (0, -3)] {
        match solution(start, length) {
            Err(ChecksumError::InvalidArgument { start: s, length: l, reason }) => {
                assert_eq!((start, length), (s, l));
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected result for ({}, {}): {:?}", start, length, other),
        }
    }
}

#[test]
fn test_largest_line_is_valid() {
    let line = CheckpointLine::new(0, 2_000_000_000).unwrap();
    assert_eq!(2_000_000_000, line.end());
    assert_eq!(2_000_000_000 * 2_000_000_001 / 2, line.worker_count());
}

proptest! {
    #[test]
    fn single_worker_line_is_start(start in 0i64..=1_999_999_999) {
        prop_assert_eq!(start, solution(start, 1).unwrap());
    }

    #[test]
    fn rows_decomposition_matches(start in 0i64..1_000_000_000, length in 1i64..200) {
        let line = CheckpointLine::new(start, length).unwrap();
        let by_rows = line.rows().fold(0, |acc, row| acc ^ row.checksum());
        prop_assert_eq!(by_rows, line.checksum());
    }

    #[test]
    fn small_lines_match_oracle(start in 0i64..10_000, length in 1i64..100) {
        prop_assert_eq!(brute_force_checksum(start, length), solution(start, length).unwrap());
    }

    #[test]
    fn xor_pattern_is_cumulative(value in 1i64..4_000_000_000_000_000_000) {
        prop_assert_eq!(xor_pattern(value - 1) ^ value, xor_pattern(value));
    }
}
