//! Evaluation of integer postfix (reverse Polish) expressions such as
//! `2 6 + 2 * 2 /`, using a single operand stack.

pub use error::{ErrorKind, EvalErr, Result};
pub use rpneval::evaluate;
pub use tokenizer::{tokenize, Operator, PostfixTokenizer, Token};

mod error;
mod rpneval;
mod tokenizer;
