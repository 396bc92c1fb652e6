//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_tracing(&config);

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    tracing::debug!(solvers = registry.len(), "registry built");

    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    if !config.quiet {
        let missing: Vec<_> = work_items
            .iter()
            .filter(|w| !executor.inputs().contains(w.year, w.day))
            .collect();
        if !missing.is_empty() {
            println!("Missing {} input file(s):", missing.len());
            for w in &missing {
                println!("  - {}", executor.inputs().input_path(w.year, w.day).display());
            }
        }
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    Ok(())
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `-v`/`-q`
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_build_registry_links_2024_solvers() {
        let registry = build_registry(&[]).unwrap();
        for day in [1, 2, 3, 5] {
            assert!(registry.contains(2024, day), "missing 2024 day {}", day);
        }
    }

    #[test]
    fn test_build_registry_all_tags_must_match() {
        let registry = build_registry(&tags(&["2024", "parsing"])).unwrap();
        assert!(registry.contains(2024, 3));
        assert!(!registry.contains(2024, 2));

        let registry = build_registry(&tags(&["parsing", "reports"])).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registered_solvers_answer_examples() {
        let registry = build_registry(&tags(&["reports"])).unwrap();
        let mut solver = registry
            .create_solver(2024, 2, "7 6 4 2 1\n1 3 2 4 5\n")
            .unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "1");
        assert_eq!(solver.solve(2).unwrap().answer, "2");
    }
}
