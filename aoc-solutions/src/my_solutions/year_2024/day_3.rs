use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::instructions::{Grammar, evaluate, parse, tokenize};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["2024", "parsing"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

fn compile_and_run(program: &str, grammar: Grammar) -> u64 {
    let tokens = tokenize(program.chars(), grammar);
    let statements = parse(&tokens);
    for statement in &statements {
        tracing::debug!(%statement);
    }
    let total = evaluate(&statements);
    tracing::info!(
        tokens = tokens.len(),
        statements = statements.len(),
        total,
        "evaluated instructions"
    );
    total
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(compile_and_run(*shared, Grammar::MULTIPLY_ONLY).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(compile_and_run(*shared, Grammar::WITH_TOGGLES).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use test_case::test_case;

    #[test_case(1, "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then_(mul(11,8)mul(8,5))" => "161" ; "multiply only")]
    #[test_case(2, "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))" => "48" ; "with toggles")]
    #[test_case(2, "do()mul(1,1)\ndon't()mul(9,9)\ndo()mul(2,2)\n" => "5" ; "toggles span lines")]
    fn test_example(part: u8, input: &str) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_parse_borrows_input() {
        let input = String::from("mul(3,3)");
        let shared = Solver::parse(&input).unwrap();
        assert!(std::ptr::eq(shared, input.as_str()));
    }
}
