use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["2024", "ordering"])]
pub struct Solver;

type Page = u32;

/// Pages that must be printed after a given page
#[derive(Debug, Default)]
pub struct Rules(HashMap<Page, HashSet<Page>>);

impl Rules {
    fn insert(&mut self, before: Page, after: Page) {
        self.0.entry(before).or_default().insert(after);
    }

    fn must_precede(&self, before: Page, after: Page) -> bool {
        self.0.get(&before).is_some_and(|pages| pages.contains(&after))
    }

    /// No page is preceded by one the rules place after it
    fn is_ordered(&self, update: &[Page]) -> bool {
        update.iter().enumerate().all(|(i, &page)| {
            update[..i]
                .iter()
                .all(|&earlier| !self.must_precede(page, earlier))
        })
    }

    /// Topological order of the update's pages under the rules.
    ///
    /// Each slot takes the earliest remaining page that no other remaining
    /// page must precede, so unrelated pages keep their relative order. A
    /// cycle falls back to the earliest remaining page.
    fn reorder(&self, update: &mut [Page]) {
        let mut remaining = update.to_vec();
        for slot in update.iter_mut() {
            let next = remaining
                .iter()
                .position(|&page| {
                    !remaining
                        .iter()
                        .any(|&other| other != page && self.must_precede(other, page))
                })
                .unwrap_or(0);
            *slot = remaining.remove(next);
        }
    }
}

#[derive(Debug)]
pub struct SharedData {
    rules: Rules,
    updates: Vec<Vec<Page>>,
    partition: Option<Partition>,
}

/// Indices into `updates`, split by whether they already follow the rules
#[derive(Debug)]
pub struct Partition {
    ordered: Vec<usize>,
    unordered: Vec<usize>,
}

fn parse_rule(line: &str) -> Result<(Page, Page), anyhow::Error> {
    let (before, after) = line
        .split_once('|')
        .ok_or_else(|| anyhow!("expected a rule `X|Y`"))?;
    Ok((Page::from_str(before.trim())?, Page::from_str(after.trim())?))
}

fn parse_update(line: &str) -> Result<Vec<Page>, anyhow::Error> {
    Ok(line
        .split(',')
        .map(|page| Page::from_str(page.trim()))
        .collect::<Result<Vec<_>, _>>()?)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input
            .lines()
            .enumerate()
            .skip_while(|(_, line)| line.trim().is_empty());
        let mut rules = Rules::default();

        let mut found_separator = false;
        for (line_idx, line) in lines.by_ref() {
            if line.trim().is_empty() {
                found_separator = true;
                break;
            }
            let (before, after) =
                parse_rule(line).map_err(|e| ParseError::on_line(line_idx + 1, e))?;
            rules.insert(before, after);
        }
        if !found_separator {
            return Err(ParseError::MissingData(
                "expected a blank line between rules and updates".to_string(),
            ));
        }

        let updates = lines
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_update(line).map_err(|e| ParseError::on_line(line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData {
            rules,
            updates,
            partition: None,
        })
    }
}

fn partition(shared: &mut SharedData) -> &Partition {
    let SharedData {
        rules,
        updates,
        partition,
    } = shared;
    partition.get_or_insert_with(|| {
        let (ordered, unordered): (Vec<_>, Vec<_>) =
            (0..updates.len()).partition(|&idx| rules.is_ordered(&updates[idx]));
        tracing::info!(
            ordered = ordered.len(),
            unordered = unordered.len(),
            "partitioned updates"
        );
        Partition { ordered, unordered }
    })
}

fn middle(update: &[Page]) -> u64 {
    update
        .get(update.len().saturating_sub(1) / 2)
        .copied()
        .map(u64::from)
        .unwrap_or_default()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ordered = partition(shared).ordered.clone();
        let sum: u64 = ordered
            .into_iter()
            .map(|idx| middle(&shared.updates[idx]))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let unordered = partition(shared).unordered.clone();
        let sum: u64 = unordered
            .into_iter()
            .map(|idx| {
                let mut update = shared.updates[idx].clone();
                shared.rules.reorder(&mut update);
                tracing::debug!(before = ?shared.updates[idx], after = ?update, "reordered update");
                middle(&update)
            })
            .sum();
        Ok(sum.to_string())
    }
}
