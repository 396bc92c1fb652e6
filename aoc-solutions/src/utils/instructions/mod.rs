//! Compiler pipeline for corrupted instruction streams
//!
//! `lexer` → `parser` → `evaluator`. Each stage is usable on its own;
//! [`run`] chains them for a complete pass over one input.
//!
//! ```
//! use aoc_solutions::utils::instructions::{run, Grammar};
//!
//! let corrupted = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
//! assert_eq!(run(corrupted.chars(), Grammar::MULTIPLY_ONLY), 161);
//! assert_eq!(run(corrupted.chars(), Grammar::WITH_TOGGLES), 48);
//! ```

mod evaluator;
mod lexer;
mod parser;


pub use evaluator::{Evaluation, evaluate};
pub use lexer::{Grammar, Keyword, Lexer, Token, tokenize};
pub use parser::{Statement, match_statement, parse};

/// Lex, parse and evaluate one instruction stream
pub fn run<I>(chars: I, grammar: Grammar) -> u64
where
    I: IntoIterator<Item = char>,
{
    let tokens = tokenize(chars, grammar);
    let statements = parse(&tokens);
    evaluate(&statements)
}
