//! Error types shared by solvers, instances and the registry

use std::fmt::Display;

use thiserror::Error;

/// Input that a solver's parser refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text is present but does not have the expected shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required section or value is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// `InvalidFormat` pointing at a 1-based input line
    pub fn on_line(line: usize, reason: impl Display) -> Self {
        ParseError::InvalidFormat(format!("line {}: {}", line, reason))
    }
}

/// Failure while answering one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver has no code for this part
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0, or a part above the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failure to look up, build or run a registered solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No solver registered for {0} day {1}")]
    NotFound(u16, u8),
    /// Outside the registry's years 2015..=2034 and days 1..=25
    #[error("{0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    SolveError(#[from] SolveError),
}

/// Failure to add a solver to a registry builder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Each (year, day) holds at most one solver
    #[error("A solver is already registered for {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
