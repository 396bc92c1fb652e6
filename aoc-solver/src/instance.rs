//! Parsed solver instances and their type-erased handle

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Run `f`, returning its output with UTC start and end stamps
fn stopwatch<T>(f: impl FnOnce() -> T) -> (T, DateTime<Utc>, DateTime<Utc>) {
    let start = Utc::now();
    let output = f();
    (output, start, Utc::now())
}

/// One answered part with the wall-clock window it was computed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Input parsed by `S`, ready to answer any of its parts
///
/// Parsing happens once, in [`SolverInstance::new`]. Every part then runs
/// against the same `SharedData`, so a later part may reuse what an earlier
/// one cached there. Separate instances never share data.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (parsed, parse_start, parse_end) = stopwatch(|| S::parse(input));
        let shared = parsed.inspect_err(|e| {
            tracing::debug!(year, day, error = %e, "input rejected by parser");
        })?;

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe view of a [`SolverInstance`], used by the registry
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let solved = solver.solve(part)?;
///         println!("{}/{} part {}: {}", solver.year(), solver.day(), part, solved.answer);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Answer `part`; parts outside `1..=parts()` are [`SolveError::PartOutOfRange`]
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, solve_start, solve_end) =
            stopwatch(|| S::solve_part_checked_range(shared, part));
        tracing::trace!(year = self.year, day = self.day, part, "part finished");

        Ok(SolveResult {
            part,
            answer: answer?,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
