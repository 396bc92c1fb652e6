//! Property-based tests for solver part bounds validation

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS that echoes the requested part
struct BoundedSolver<const N: u8>;

impl<const N: u8> AocParser for BoundedSolver<N> {
    type SharedData<'a> = u32;

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(0)
    }
}

impl<const N: u8> Solver for BoundedSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(calls: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        *calls += 1;
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    let mut calls = 0;
    match max_parts {
        1 => BoundedSolver::<1>::solve_part_checked_range(&mut calls, part),
        2 => BoundedSolver::<2>::solve_part_checked_range(&mut calls, part),
        _ => BoundedSolver::<3>::solve_part_checked_range(&mut calls, part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts above PARTS are rejected with PartOutOfRange(part)
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// In-range parts reach solve_part exactly once; out-of-range parts never do
    #[test]
    fn prop_delegation_only_in_range(part in 0u8..=4) {
        let mut calls = 0;
        let _ = BoundedSolver::<2>::solve_part_checked_range(&mut calls, part);
        let expected = u32::from((1..=2).contains(&part));
        prop_assert_eq!(calls, expected);
    }
}

#[test]
fn test_part_zero_rejected() {
    assert!(matches!(checked(2, 0), Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_part_exceeds_max_rejected() {
    assert!(matches!(checked(2, 3), Err(SolveError::PartOutOfRange(3))));
}
