use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["2024", "lists"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
}

fn parse_line(line: &str) -> Result<(i64, i64), anyhow::Error> {
    let (left, right) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected exactly two location ids"))?;
    Ok((i64::from_str(left)?, i64::from_str(right)?))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_line(line).map_err(|e| ParseError::on_line(line_idx + 1, e))
            })
            .process_results(|pairs| {
                let (left, right): (Vec<i64>, Vec<i64>) = pairs.unzip();
                SharedData { left, right }
            })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: u64 = shared
            .left
            .iter()
            .sorted_unstable()
            .zip(shared.right.iter().sorted_unstable())
            .map(|(left, right)| left.abs_diff(*right))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let occurrences = shared.right.iter().counts();
        let similarity: i64 = shared
            .left
            .iter()
            .map(|value| {
                let count = occurrences.get(value).copied().unwrap_or_default();
                value * count as i64
            })
            .sum();
        Ok(similarity.to_string())
    }
}
