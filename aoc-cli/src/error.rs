//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

/// Failure to read a puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file does not exist
    #[error("Input not found at {}", .0.display())]
    NotFound(PathBuf),

    /// The input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-part failure reported alongside answers
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be loaded for the year/day
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Solver creation or solving failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),
}
