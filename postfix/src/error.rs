use thiserror::Error;

use crate::tokenizer::Operator;

/// Failure categories, without their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidToken,
    InsufficientOperands,
    DivisionByZero,
    MalformedExpression,
    Overflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalErr {
    /// Neither an unsigned integer nor one of `+ - * /`.
    #[error("Invalid element: {0}")]
    InvalidToken(String),

    /// An operator found fewer than two values on the stack.
    #[error("Invalid expression: not enough operands for '{operator}'")]
    InsufficientOperands { operator: Operator },

    #[error("Division by zero")]
    DivisionByZero,

    /// The stack didn't end up holding exactly one value.
    #[error("{}", malformed_msg(.remaining))]
    MalformedExpression { remaining: usize },

    /// A literal or an intermediate result doesn't fit in an `i64`.
    #[error("Integer overflow: {0}")]
    Overflow(String),
}

fn malformed_msg(remaining: &usize) -> String {
    match *remaining {
        0 => "Invalid expression: no operands".to_string(),
        n => format!("Invalid expression: too many operands ({} values left)", n),
    }
}

impl EvalErr {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalErr::InvalidToken(_) => ErrorKind::InvalidToken,
            EvalErr::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
            EvalErr::DivisionByZero => ErrorKind::DivisionByZero,
            EvalErr::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            EvalErr::Overflow(_) => ErrorKind::Overflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalErr>;
