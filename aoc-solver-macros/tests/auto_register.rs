use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 24, tags = ["macro-test", "sums"])]
struct Sums;

impl AocParser for Sums {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split(',')
            .map(|n| {
                n.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {n:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Sums {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Sums {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|n| n * n).sum::<i64>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2019, day = 25)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_plugin_registered_with_tags() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.contains(2019, 24));
    assert!(!registry.contains(2019, 25));

    let mut solver = registry.create_solver(2019, 24, "1, 2, 3").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "6");
    assert_eq!(solver.solve(2).unwrap().answer, "14");
}

#[test]
fn test_all_plugins_include_untagged() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2019)
        .unwrap()
        .build();

    let info = registry.get_info(2019, 25).unwrap();
    assert_eq!(info.parts, 1);

    let mut solver = registry.create_solver(2019, 25, "hello").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "5");
}

#[test]
fn test_parse_error_surfaces() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2019)
        .unwrap()
        .build();

    assert!(registry.create_solver(2019, 24, "1, x").is_err());
}
