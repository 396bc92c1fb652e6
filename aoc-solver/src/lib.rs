//! Advent of Code Solver Library
//!
//! A type-safe framework for solving Advent of Code problems across multiple
//! years and days. Each problem is a solver with its own input parsing and one
//! answer per part.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`] / [`PartSolver`] / [`Solver`] traits for defining solvers
//! - [`SolverInstance`], which parses once and records parse and solve timing
//! - [`SolverRegistry`], an immutable (year, day) lookup built with
//!   [`SolverRegistryBuilder`]
//! - Plugin registration through `inventory` and the [`AutoRegisterSolver`] derive
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i32>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Day1>(2024, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2024, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Plugin System
//!
//! Use `#[derive(AutoRegisterSolver)]` to register solvers at link time:
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 1, tags = ["lists"])]
//! struct Day1Solver;
//! ```
//! and collect them with [`SolverRegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
