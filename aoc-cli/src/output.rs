//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(_), _) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// One result line: answer with timings, or the error
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    match TimeDelta::from_std(d) {
        Ok(delta) => format_duration(delta),
        Err(_) => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExecutorError, InputError};
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_duration(TimeDelta::MAX), "N/A");
    }

    #[test]
    fn test_format_std_duration() {
        assert_eq!(format_std_duration(std::time::Duration::from_micros(42)), "42µs");
        assert_eq!(format_std_duration(std::time::Duration::from_secs(3)), "3.00s");
    }

    #[test]
    fn test_format_result() {
        let solved = SolverResult {
            year: 2024,
            day: 2,
            part: 1,
            answer: Ok("4".to_string()),
            parse_duration: Some(TimeDelta::microseconds(12)),
            solve_duration: TimeDelta::microseconds(3),
        };
        assert_eq!(format_result(&solved), "2024/02 Part 1: 4 (parse: 12µs, solve: 3µs)");

        let failed = SolverResult {
            year: 2024,
            day: 5,
            part: 2,
            answer: Err(Arc::new(ExecutorError::Input {
                year: 2024,
                day: 5,
                source: InputError::NotFound(PathBuf::from("day05.txt")),
            })),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        };
        assert_eq!(
            format_result(&failed),
            "2024/05 Part 2: Error - Input unavailable for 2024/05: Input not found at day05.txt"
        );
    }
}
