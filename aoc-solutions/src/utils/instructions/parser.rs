//! Parser turning tokens into statements
//!
//! Matching is positional: each attempt starts at a keyword and either
//! produces a statement and the position after it, or gives up and resumes
//! right after the keyword. Corrupted instructions are dropped, never errors.

use std::fmt;

use super::lexer::{Keyword, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Multiply { lhs: u64, rhs: u64 },
    Enable,
    Disable,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Multiply { lhs, rhs } => write!(f, "mul({},{})", lhs, rhs),
            Statement::Enable => f.write_str("do()"),
            Statement::Disable => f.write_str("don't()"),
        }
    }
}

/// Read position over a token slice
struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    fn at(tokens: &'t [Token], pos: usize) -> Self {
        Self { tokens, pos }
    }

    fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn expect(&mut self, expected: &Token) -> Option<()> {
        (self.bump()? == expected).then_some(())
    }

    fn integer(&mut self) -> Option<u64> {
        match self.bump()? {
            Token::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// `(` integer `,` integer `)`
    fn multiply_args(&mut self) -> Option<Statement> {
        self.expect(&Token::LeftParen)?;
        let lhs = self.integer()?;
        self.expect(&Token::Comma)?;
        let rhs = self.integer()?;
        self.expect(&Token::RightParen)?;
        Some(Statement::Multiply { lhs, rhs })
    }

    /// `(` `)`
    fn empty_args(&mut self, statement: Statement) -> Option<Statement> {
        self.expect(&Token::LeftParen)?;
        self.expect(&Token::RightParen)?;
        Some(statement)
    }
}

/// Try to match one statement starting at `start`.
///
/// Returns the statement, if any, and the position to continue from: past the
/// match on success, otherwise the token after `start`.
pub fn match_statement(tokens: &[Token], start: usize) -> (Option<Statement>, usize) {
    let resume = start + 1;
    let Some(Token::Keyword(keyword)) = tokens.get(start) else {
        return (None, resume);
    };

    let mut cursor = Cursor::at(tokens, resume);
    let statement = match keyword {
        Keyword::Multiply => cursor.multiply_args(),
        Keyword::Enable => cursor.empty_args(Statement::Enable),
        Keyword::Disable => cursor.empty_args(Statement::Disable),
    };

    match statement {
        Some(statement) => (Some(statement), cursor.pos),
        None => {
            tracing::trace!(%keyword, position = start, "dropping corrupted instruction");
            (None, resume)
        }
    }
}

/// Parse every recognisable statement, in order
pub fn parse(tokens: &[Token]) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut pos = 0;
    while pos < tokens.len() {
        let (statement, next) = match_statement(tokens, pos);
        statements.extend(statement);
        pos = next;
    }
    statements
}
