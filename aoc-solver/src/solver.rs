//! Parsing and solving traits
//!
//! A puzzle is split into one [`AocParser`] impl, which turns the raw input
//! into `SharedData`, and one [`PartSolver<N>`] impl per part. [`Solver`] ties
//! the parts together behind a runtime part number; it is normally derived.

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works on
///
/// `SharedData<'a>` may borrow from the input (`&'a str`, `Vec<&'a str>`) or
/// own it. It is handed to each part as `&mut`, so a part can also cache
/// intermediate results there for the parts after it.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Reports;
///
/// impl AocParser for Reports {
///     type SharedData<'a> = Vec<Vec<i32>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.split_whitespace()
///                     .map(|level| level.parse().map_err(|_| ParseError::InvalidFormat(line.into())))
///                     .collect::<Result<Vec<i32>, _>>()
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Reports::parse("1 2\n3").unwrap(), vec![vec![1, 2], vec![3]]);
/// ```
pub trait AocParser {
    type SharedData<'a>: 'a;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answer for part `N`
///
/// Keeping the part number in the type means a dispatcher that names
/// `PartSolver<3>` fails to compile until part 3 exists.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Memory;
///
/// impl AocParser for Memory {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for Memory {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.matches("mul(").count().to_string())
///     }
/// }
///
/// let mut shared = Memory::parse("mul(1,2)xmul(3,4)").unwrap();
/// assert_eq!(<Memory as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A parser plus its parts, addressed by part number at runtime
///
/// Usually produced by `#[derive(AocSolver)]`. Implementing it by hand works
/// too:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Lists;
///
/// impl AocParser for Lists {
///     type SharedData<'a> = Vec<(i64, i64)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 let mut ids = line.split_whitespace().map(str::parse::<i64>);
///                 match (ids.next(), ids.next()) {
///                     (Some(Ok(left)), Some(Ok(right))) => Ok((left, right)),
///                     _ => Err(ParseError::InvalidFormat(line.to_string())),
///                 }
///             })
///             .collect()
///     }
/// }
///
/// impl Solver for Lists {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().map(|(l, r)| (l - r).abs()).sum::<i64>().to_string()),
///             2 => Ok(shared.iter().map(|(l, r)| l * r).sum::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Lists::parse("3 4\n1 3").unwrap();
/// assert_eq!(Lists::solve_part(&mut shared, 1).unwrap(), "3");
/// ```
pub trait Solver: AocParser {
    /// Highest valid part number; parts are `1..=PARTS`
    const PARTS: u8;

    /// Answer `part`, or [`SolveError::PartNotImplemented`] for an unknown part
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Part-number validation layered over [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// Like `solve_part`, but part 0 and parts above `PARTS` are
    /// [`SolveError::PartOutOfRange`] and never reach the solver
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        match part {
            0 => Err(SolveError::PartOutOfRange(part)),
            p if p > Self::PARTS => Err(SolveError::PartOutOfRange(part)),
            _ => Self::solve_part(shared, part),
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
