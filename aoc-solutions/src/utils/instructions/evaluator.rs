//! Statement evaluation

use super::parser::Statement;

/// State of one evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    enabled: bool,
    total: u64,
}

impl Evaluation {
    pub fn new() -> Self {
        Self {
            enabled: true,
            total: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn apply(&mut self, statement: &Statement) {
        match *statement {
            Statement::Multiply { lhs, rhs } if self.enabled => {
                self.total = self.total.saturating_add(lhs.saturating_mul(rhs));
            }
            Statement::Multiply { .. } => {}
            Statement::Enable => self.enabled = true,
            Statement::Disable => self.enabled = false,
        }
    }
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum of the products of every multiply executed while enabled
///
/// Without any `Enable`/`Disable` statements every multiply counts.
pub fn evaluate<'s, I>(statements: I) -> u64
where
    I: IntoIterator<Item = &'s Statement>,
{
    let mut evaluation = Evaluation::new();
    for statement in statements {
        evaluation.apply(statement);
    }
    evaluation.total()
}
