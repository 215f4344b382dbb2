use log::{debug, trace};

use crate::error::{EvalErr, Result};
use crate::tokenizer::{Operator, PostfixTokenizer, Token};

// Fresh per evaluation, never shared. Values only go in or out at the end.
struct EvalStack(Vec<i64>);

impl EvalStack {
    fn new() -> EvalStack {
        EvalStack(Vec::new())
    }

    fn push(&mut self, value: i64) {
        self.0.push(value);
    }

    // Most recently pushed value is the right-hand operand
    fn pop_operands(&mut self, operator: Operator) -> Result<(i64, i64)> {
        if self.0.len() < 2 {
            return Err(EvalErr::InsufficientOperands { operator });
        }
        let r = self.0.pop().ok_or(EvalErr::InsufficientOperands { operator })?;
        let l = self.0.pop().ok_or(EvalErr::InsufficientOperands { operator })?;
        Ok((l, r))
    }

    fn into_result(mut self) -> Result<i64> {
        match self.0.len() {
            1 => self.0.pop().ok_or(EvalErr::MalformedExpression { remaining: 0 }),
            remaining => Err(EvalErr::MalformedExpression { remaining }),
        }
    }
}

/// Evaluate a whitespace separated postfix expression over `i64`.
///
/// Stops at the first failure; no partial result is ever returned.
///
/// ```
/// assert_eq!(postfix::evaluate("2 6 + 2 * 2 /"), Ok(8));
/// assert!(postfix::evaluate("5 +").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64> {
    let result = reduce(expression);
    if let Err(ref e) = result {
        debug!("failed to evaluate {:?}: {}", expression, e);
    }
    result
}

fn reduce(expression: &str) -> Result<i64> {
    let mut operands = EvalStack::new();

    for token in PostfixTokenizer::new(expression) {
        match token? {
            Token::Operand(num) => operands.push(num),
            Token::Operator(op) => {
                let (l, r) = operands.pop_operands(op)?;
                let value = op.apply(l, r)?;
                trace!("{} {} {} = {}", l, op, r, value);
                operands.push(value);
            }
            Token::Invalid(lexeme) => return Err(EvalErr::InvalidToken(lexeme)),
        }
    }
    operands.into_result()
}
