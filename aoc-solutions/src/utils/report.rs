//! Report safety validation
//!
//! A report is a sequence of levels. It is safe when every adjacent step moves
//! in the same [`Slope`] by at least 1 and at most [`MAX_STEP`]. A
//! [`DampingBudget`] lets the validator remove a bounded number of levels to
//! make an otherwise unsafe report safe.
//!
//! [`is_report_safe`] decides this in one left-to-right scan per slope.
//! [`is_report_safe_brute_force`] tries every removal explicitly and serves as
//! the reference it is tested against.

use std::cmp::Ordering;

use itertools::Itertools;

/// A single reading in a report
pub type Level = i32;

/// Largest allowed difference between two adjacent levels
pub const MAX_STEP: u32 = 3;

/// Number of levels the dampener may remove from one report
pub const MAX_DAMPING: u32 = 1;

/// Direction a safe report moves in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    Ascending,
    Descending,
}

impl Slope {
    pub const ALL: [Slope; 2] = [Slope::Ascending, Slope::Descending];

    /// Direction of the step `from -> to`, `None` when the level does not change
    pub fn of_step(from: Level, to: Level) -> Option<Self> {
        match to.cmp(&from) {
            Ordering::Greater => Some(Slope::Ascending),
            Ordering::Less => Some(Slope::Descending),
            Ordering::Equal => None,
        }
    }

    /// Whether `from -> to` moves in this direction by no more than [`MAX_STEP`]
    pub fn permits(self, from: Level, to: Level) -> bool {
        Slope::of_step(from, to) == Some(self) && from.abs_diff(to) <= MAX_STEP
    }
}

/// Corrections still available while validating one report
///
/// Spending is checked, so a budget can never go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DampingBudget(u32);

impl DampingBudget {
    pub const fn new(max_corrections: u32) -> Self {
        Self(max_corrections)
    }

    pub const fn remaining(self) -> u32 {
        self.0
    }

    pub const fn is_exhausted(self) -> bool {
        self.0 == 0
    }

    /// Spend `skips` corrections, or `None` if the budget does not cover them
    pub fn spend(self, skips: usize) -> Option<Self> {
        let skips = u32::try_from(skips).ok()?;
        self.0.checked_sub(skips).map(Self)
    }
}

/// Validator settings, passed explicitly to every validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub max_corrections: u32,
}

impl ValidatorConfig {
    /// No corrections: the report must be safe as written
    pub const STRICT: Self = Self { max_corrections: 0 };
    /// The problem dampener: up to [`MAX_DAMPING`] removed levels
    pub const DAMPENED: Self = Self {
        max_corrections: MAX_DAMPING,
    };

    pub fn is_safe(&self, report: &[Level]) -> bool {
        is_report_safe(report, self.max_corrections)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::DAMPENED
    }
}

/// Safe/total counts over a batch of reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafetyTally {
    pub safe: usize,
    pub total: usize,
}

impl SafetyTally {
    pub fn record(&mut self, safe: bool) {
        self.total += 1;
        if safe {
            self.safe += 1;
        }
    }
}

/// Whether `report` is safe after removing at most `max_corrections` levels
///
/// Reports with fewer than two levels are always safe.
pub fn is_report_safe(report: &[Level], max_corrections: u32) -> bool {
    if report.len() < 2 {
        return true;
    }
    let budget = DampingBudget::new(max_corrections);
    Slope::ALL
        .into_iter()
        .any(|slope| scan_with_slope(report, slope, budget))
}

/// Single scan for one fixed slope.
///
/// `kept[i]` holds the most budget left over by any corrected prefix whose last
/// kept level is `report[i]`. A level is reached either by skipping everything
/// before it, or from an earlier kept level `j` by skipping the levels between
/// them; the second case only looks back as far as the budget can pay for.
fn scan_with_slope(report: &[Level], slope: Slope, budget: DampingBudget) -> bool {
    let lookback = budget.remaining() as usize + 1;
    let mut kept: Vec<Option<DampingBudget>> = Vec::with_capacity(report.len());

    for (i, &level) in report.iter().enumerate() {
        let restart = budget.spend(i);
        let extend = (i.saturating_sub(lookback)..i)
            .filter(|&j| slope.permits(report[j], level))
            .filter_map(|j| kept[j]?.spend(i - j - 1))
            .max();
        kept.push(restart.max(extend));

        let reachable = &kept[(i + 1).saturating_sub(lookback)..];
        if restart.is_none() && reachable.iter().all(Option::is_none) {
            tracing::trace!(?slope, index = i, "damping budget exhausted");
            return false;
        }
    }

    let last = report.len() - 1;
    kept.iter()
        .enumerate()
        .any(|(i, left)| left.and_then(|left| left.spend(last - i)).is_some())
}

/// Reference check: safe as written, or safe after removing one level and
/// validating the rest with one correction fewer.
pub fn is_report_safe_brute_force(report: &[Level], max_corrections: u32) -> bool {
    if is_strictly_safe(report) {
        return true;
    }
    if max_corrections == 0 {
        return false;
    }
    (0..report.len()).any(|skip| {
        let variant: Vec<Level> = report
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &level)| level)
            .collect();
        is_report_safe_brute_force(&variant, max_corrections - 1)
    })
}

/// Slope taken from the first pair, every pair must follow it
fn is_strictly_safe(report: &[Level]) -> bool {
    let &[first, second, ..] = report else {
        return true;
    };
    let Some(slope) = Slope::of_step(first, second) else {
        return false;
    };
    report
        .iter()
        .tuple_windows::<(_, _)>()
        .all(|(&from, &to)| slope.permits(from, to))
}
