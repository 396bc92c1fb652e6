//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Each day is a solver using the `AutoRegisterSolver` derive macro, so linking
//! this crate is enough to make the solvers visible to the registry.
//! The reusable puzzle cores live in [`utils`]:
//! - [`utils::report`]: report safety validation with bounded corrections
//! - [`utils::instructions`]: lexer, parser and evaluator for corrupted instruction streams

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
