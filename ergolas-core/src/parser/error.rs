use crate::lexer::{Token, TokenKind};

use thiserror::Error;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum ParseError {
    #[error("expected {expected} but got end of input")]
    PrematureEndOfInput { expected: Expected },
    #[error("expected {expected} but got {got}")]
    UnexpectedToken { expected: Expected, got: Token },
    #[error("invalid integer literal {token}: {source}")]
    InvalidInteger {
        token: Token,
        source: std::num::ParseIntError,
    },
    #[error("invalid float literal {token}: {source}")]
    InvalidFloat {
        token: Token,
        source: std::num::ParseFloatError,
    },
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expected {
    /// A token with exactly this text, such as `)` or the unquote marker `$`.
    Text(&'static str),
    Kind(TokenKind),
    Value,
    EndOfInput,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Text(text) => write!(f, "{:?}", text),
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Value => write!(f, "value"),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl ParseError {
    pub fn unexpected(expected: Expected, got: Option<&Token>) -> ParseError {
        match got {
            Some(got) => ParseError::UnexpectedToken {
                expected,
                got: got.clone(),
            },
            None => ParseError::PrematureEndOfInput { expected },
        }
    }

    /// Byte offset of the offending token, when there is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::PrematureEndOfInput { .. } => None,
            ParseError::UnexpectedToken { got: token, .. }
            | ParseError::InvalidInteger { token, .. }
            | ParseError::InvalidFloat { token, .. } => Some(token.offset),
        }
    }
}
