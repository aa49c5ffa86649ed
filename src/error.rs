use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    #[error("lexer error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Runtime(#[from] EvalError),
}

pub type PResult<T> = Result<T, ErrorKind>;

/// An ILLEGAL token surfaced to the caller.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("position {position}: {message}")]
pub struct LexError {
    pub position: usize,
    pub message: String,
}

/// A grammar violation, reported at the token the parser was looking at.
///
/// `token` is `None` when the parser ran into the end of input.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("position {position}: {}{message}", quoted_token(.token))]
pub struct ParseError {
    pub position: usize,
    pub token: Option<String>,
    pub message: String,
}

fn quoted_token(token: &Option<String>) -> String {
    token.as_ref().map(|text| format!("'{text}': ")).unwrap_or_default()
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EvalError {
    #[error("\"{0}\": no such function")]
    NoSuchFunction(String),
    #[error("{name}: expected {expected}, got {got}")]
    ArgumentCount {
        name: &'static str,
        expected: Arity,
        got: usize,
    },
    #[error("{name}: {ordinal} argument is not an integer")]
    NotAnInteger {
        name: &'static str,
        ordinal: &'static str,
    },
    #[error("{name}: {ordinal} argument is not a valid integer")]
    InvalidCount {
        name: &'static str,
        ordinal: &'static str,
    },
    #[error("{name}: invalid range")]
    InvalidRange { name: &'static str },
    #[error("{name}: count too large")]
    CountTooLarge { name: &'static str },
}

/// Number of arguments a builtin accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Either(usize, usize),
}

impl Arity {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Self::Exact(expected) => n == expected,
            Self::Either(a, b) => n == a || n == b,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Exact(1) => write!(f, "1 argument"),
            Self::Exact(n) => write!(f, "{n} arguments"),
            Self::Either(a, b) => write!(f, "either {a} or {b} arguments"),
        }
    }
}
