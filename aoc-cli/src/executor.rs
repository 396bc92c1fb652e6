//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Shared because one input failure is reported for every part of the day
    pub answer: Result<String, Arc<ExecutorError>>,
    /// Parse time, attached to the first part run for each day
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected solver in (year, day, part) order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        let mut inputs = InputStore::new(config.input_dir.clone());
        if let (Some(file), Some(year), Some(day)) =
            (&config.input_file, config.year_filter, config.day_filter)
        {
            inputs = inputs.with_override(year, day, file.clone());
        }

        Self {
            registry,
            inputs,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing each result to `sink` as soon as it is ready
    pub fn execute<F>(&self, mut sink: F)
    where
        F: FnMut(SolverResult),
    {
        for work in self.collect_work_items() {
            self.run_solver(&work, &mut sink);
        }
    }

    /// Run a single solver for the parts of one work item
    fn run_solver<F>(&self, work: &WorkItem, sink: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        let _span = tracing::info_span!("solver", year, day).entered();

        let input = match self.inputs.get(year, day) {
            Ok(input) => input,
            Err(source) => {
                tracing::warn!(error = %source, "skipping solver without input");
                let error = Arc::new(ExecutorError::Input { year, day, source });
                send_errors(work, &error, sink);
                return;
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                tracing::warn!(error = %e, "solver creation failed");
                send_errors(work, &Arc::new(e.into()), sink);
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let mut result = solve_part(year, day, part, &mut *solver);
            result.parse_duration = parse_duration.take();
            sink(result);
        }
    }
}

/// Report one shared error for every part of a work item
fn send_errors<F>(work: &WorkItem, error: &Arc<ExecutorError>, sink: &mut F)
where
    F: FnMut(SolverResult),
{
    for part in work.parts.clone() {
        sink(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(Arc::clone(error)),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

/// Solve a single part
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => {
            tracing::info!(part, answer = %solved.answer, "solved");
            SolverResult {
                year,
                day,
                part,
                solve_duration: solved.duration(),
                answer: Ok(solved.answer),
                parse_duration: None,
            }
        }
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(Arc::new(aoc_solver::SolverError::from(e).into())),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Sums the input's integers; part 2 doubles the sum
    struct Summer;

    impl AocParser for Summer {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .split_whitespace()
                .map(|w| w.parse().map_err(|_| ParseError::InvalidFormat(w.to_string())))
                .collect()
        }
    }

    impl Solver for Summer {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            let sum: i64 = shared.iter().sum();
            match part {
                1 => Ok(sum.to_string()),
                2 => Ok((sum * 2).to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register_solver::<Summer>(2016, 1)
            .unwrap()
            .register_solver::<Summer>(2016, 2)
            .unwrap()
            .register_solver::<Summer>(2017, 1)
            .unwrap()
            .build()
    }

    fn config(input_dir: &Path) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir: input_dir.to_path_buf(),
            input_file: None,
            verbosity: 0,
            quiet: true,
        }
    }

    fn write_input(root: &Path, year: u16, day: u8, content: &str) {
        let dir = root.join(year.to_string());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("day{:02}.txt", day)), content).unwrap();
    }

    fn error_of(result: &SolverResult) -> Option<&ExecutorError> {
        result.answer.as_ref().err().map(|e| &**e)
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(|result| results.push(result));
        results
    }

    #[test]
    fn test_collect_work_items_filters() {
        let temp = TempDir::new().unwrap();
        let mut config = config(temp.path());
        config.year_filter = Some(2016);
        config.part_filter = Some(2);

        let items = Executor::new(registry(), &config).collect_work_items();
        assert_eq!(
            items,
            vec![
                WorkItem { year: 2016, day: 1, parts: 2..=2 },
                WorkItem { year: 2016, day: 2, parts: 2..=2 },
            ]
        );
    }

    #[test]
    fn test_results_in_order_with_parse_time_once() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 2016, 1, "1 2 3");
        write_input(temp.path(), 2016, 2, "10");
        write_input(temp.path(), 2017, 1, "-4");

        let results = run(&Executor::new(registry(), &config(temp.path())));
        let answers: Vec<_> = results
            .iter()
            .map(|r| (r.year, r.day, r.part, r.answer.as_deref().unwrap().to_string()))
            .collect();
        assert_eq!(
            answers,
            vec![
                (2016, 1, 1, "6".to_string()),
                (2016, 1, 2, "12".to_string()),
                (2016, 2, 1, "10".to_string()),
                (2016, 2, 2, "20".to_string()),
                (2017, 1, 1, "-4".to_string()),
                (2017, 1, 2, "-8".to_string()),
            ]
        );
        let with_parse_time: Vec<_> = results.iter().map(|r| r.parse_duration.is_some()).collect();
        assert_eq!(with_parse_time, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn test_missing_input_reports_every_part_and_continues() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 2016, 2, "5");
        let mut config = config(temp.path());
        config.year_filter = Some(2016);

        let results = run(&Executor::new(registry(), &config));
        assert_eq!(results.len(), 4);
        for result in &results[..2] {
            assert!(matches!(
                error_of(result),
                Some(ExecutorError::Input { source: InputError::NotFound(_), .. })
            ));
        }
        assert_eq!(results[2].answer.as_deref().unwrap(), "5");
    }

    #[test]
    fn test_parse_failure_is_an_error_result() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 2017, 1, "1 two 3");
        let mut config = config(temp.path());
        config.year_filter = Some(2017);
        config.part_filter = Some(1);

        let results = run(&Executor::new(registry(), &config));
        assert_eq!(results.len(), 1);
        assert!(matches!(
            error_of(&results[0]),
            Some(ExecutorError::Solver(aoc_solver::SolverError::ParseError(_)))
        ));
    }

    #[test]
    fn test_input_override() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("mine.txt");
        fs::write(&file, "40 2").unwrap();
        let mut config = config(&temp.path().join("nowhere"));
        config.year_filter = Some(2016);
        config.day_filter = Some(2);
        config.input_file = Some(file);

        let results = run(&Executor::new(registry(), &config));
        let answers: Vec<_> = results.iter().map(|r| r.answer.as_deref().unwrap()).collect();
        assert_eq!(answers, vec!["42", "84"]);
    }
}
