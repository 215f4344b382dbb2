use std::fmt;
use std::str::SplitWhitespace;

use crate::error::{EvalErr, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match *self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    // Division truncates toward zero. A zero divisor is rejected before
    // dividing; anything unrepresentable in i64 is reported, not wrapped.
    pub fn apply(&self, l: i64, r: i64) -> Result<i64> {
        let result = match *self {
            Operator::Add => l.checked_add(r),
            Operator::Sub => l.checked_sub(r),
            Operator::Mul => l.checked_mul(r),
            Operator::Div => {
                if r == 0 {
                    return Err(EvalErr::DivisionByZero);
                }
                l.checked_div(r)
            }
        };
        result.ok_or_else(|| EvalErr::Overflow(format!("{} {} {}", l, self, r)))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Operand(i64),
    Operator(Operator),
    Invalid(String),
}

impl Token {
    /// Classify a single whitespace-free lexeme.
    ///
    /// Only unsigned runs of ASCII digits are operands, so `-3` is invalid
    /// rather than a negative literal.
    pub fn classify(lexeme: &str) -> Result<Token> {
        if !lexeme.is_empty() && lexeme.bytes().all(|b| b.is_ascii_digit()) {
            return lexeme
                .parse::<i64>()
                .map(Token::Operand)
                .map_err(|_| EvalErr::Overflow(format!("literal {} out of range", lexeme)));
        }
        Ok(match Operator::from_symbol(lexeme) {
            Some(op) => Token::Operator(op),
            None => Token::Invalid(lexeme.to_string()),
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Invalid(lexeme) => write!(f, "{}", lexeme),
        }
    }
}

// Splits on runs of whitespace, dropping empty pieces. Lexemes are
// classified lazily so a caller can stop at the first bad one.
pub struct PostfixTokenizer<'a> {
    src: SplitWhitespace<'a>,
}

impl<'a> PostfixTokenizer<'a> {
    pub fn new(expression: &'a str) -> PostfixTokenizer<'a> {
        PostfixTokenizer { src: expression.split_whitespace() }
    }
}

impl<'a> Iterator for PostfixTokenizer<'a> {
    type Item = Result<Token>;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.next().map(Token::classify)
    }
}

pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    PostfixTokenizer::new(expression).collect()
}
