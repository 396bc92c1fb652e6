use std::str::FromStr;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::report::{Level, SafetyTally, ValidatorConfig};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["2024", "reports"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    reports: Vec<Vec<Level>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(Level::from_str)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| ParseError::on_line(line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|reports| SharedData { reports })
    }
}

fn count_safe(reports: &[Vec<Level>], config: ValidatorConfig) -> SafetyTally {
    let mut tally = SafetyTally::default();
    for report in reports {
        let safe = config.is_safe(report);
        if safe {
            tracing::debug!(?report, "safe");
        } else {
            tracing::debug!(?report, "unsafe");
        }
        tally.record(safe);
    }
    tracing::info!(
        max_corrections = config.max_corrections,
        safe = tally.safe,
        total = tally.total,
        "validated reports"
    );
    tally
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_safe(&shared.reports, ValidatorConfig::STRICT)
            .safe
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_safe(&shared.reports, ValidatorConfig::DAMPENED)
            .safe
            .to_string())
    }
}
