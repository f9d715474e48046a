mod error;
mod lexer;
mod parser;
mod resolver;

pub use error::*;
pub use parser::evaluate_with_limits;
pub use resolver::*;

/// Longest accepted name, counting one slot for a terminator.
pub const MAX_NAME_LENGTH: usize = 32;

/// Deepest nesting of sub-expressions before evaluation gives up.
pub const MAX_STACK_DEPTH: usize = 64;

/// Bounds applied to a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Name buffer size; names may hold `max_name_length - 1` characters.
    pub max_name_length: usize,
    /// Maximum number of nested `expr` rules (top level and every bracket).
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_name_length: MAX_NAME_LENGTH,
            max_depth: MAX_STACK_DEPTH,
        }
    }
}

/// Whether a name was written bare (`sin`) or with a `$` prefix (`$x`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum NameRole {
    Function,
    Variable,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Token<'a> {
    End,
    Add,
    Subtract,
    Multiply,
    Divide,
    OpenBracket,
    CloseBracket,
    Number(f64),
    Name { name: &'a str, role: NameRole },
    Greater,
    GreaterEq,
    Less,
    LessEq,
    Equal,
}

/// Relational operators share the multiply/divide tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ProductOperator {
    Multiply,
    Divide,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    Equal,
}

impl ProductOperator {
    pub(crate) fn from_token(token: &Token<'_>) -> Option<Self> {
        match token {
            Token::Multiply => Some(Self::Multiply),
            Token::Divide => Some(Self::Divide),
            Token::Greater => Some(Self::Greater),
            Token::GreaterEq => Some(Self::GreaterEq),
            Token::Less => Some(Self::Less),
            Token::LessEq => Some(Self::LessEq),
            Token::Equal => Some(Self::Equal),
            _ => None,
        }
    }

    pub(crate) fn apply(self, left: f64, right: f64) -> f64 {
        let truth = |b: bool| if b { 1.0 } else { 0.0 };
        match self {
            Self::Multiply => left * right,
            Self::Divide => left / right,
            Self::Greater => truth(left > right),
            Self::GreaterEq => truth(left >= right),
            Self::Less => truth(left < right),
            Self::LessEq => truth(left <= right),
            Self::Equal => truth(left == right),
        }
    }
}
