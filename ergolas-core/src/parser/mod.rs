pub mod error;
pub mod expressions;
pub mod statements;

use crate::ast::{Node, NodeKind};
use crate::lexer::{Token, TokenKind};
pub use error::{Expected, ParseError};
use statements::{parse_statement, parse_statements};

type Alternative = fn(&mut Parser<'_>) -> Result<Node, ParseError>;

pub struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Index of the next token to be consumed.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    pub(crate) fn next_if_kind(&mut self, kind: TokenKind) -> Option<&'a Token> {
        match self.peek() {
            Some(token) if token.kind == kind => self.advance(),
            _ => None,
        }
    }

    pub(crate) fn next_if_text(&mut self, kind: TokenKind, text: &str) -> Option<&'a Token> {
        match self.peek() {
            Some(token) if token.is(kind, text) => self.advance(),
            _ => None,
        }
    }

    pub(crate) fn expect_kind(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        self.next_if_kind(kind)
            .ok_or_else(|| ParseError::unexpected(Expected::Kind(kind), self.peek()))
    }

    pub(crate) fn expect_text(
        &mut self,
        kind: TokenKind,
        text: &'static str,
    ) -> Result<&'a Token, ParseError> {
        self.next_if_text(kind, text)
            .ok_or_else(|| ParseError::unexpected(Expected::Text(text), self.peek()))
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.next_if_kind(TokenKind::Newline).is_some() {}
    }

    /// Runs `parse`, rewinding the cursor to where it started if it fails.
    pub(crate) fn attempt<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let start = self.cursor;
        let result = parse(self);
        if result.is_err() {
            self.cursor = start;
        }
        result
    }

    /// Tries each alternative in order from the same position. When none
    /// succeeds the error of the last one is returned.
    pub(crate) fn first_of(&mut self, alternatives: &[Alternative]) -> Result<Node, ParseError> {
        let mut last_error = ParseError::unexpected(Expected::Value, self.peek());
        for alternative in alternatives {
            match self.attempt(|parser| alternative(parser)) {
                Ok(node) => return Ok(node),
                Err(error) => last_error = error,
            }
        }
        Err(last_error)
    }

    /// Parses statements up to the end of the token stream. Unlike the other
    /// entry points this fails if any token is left over.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_program(&mut self) -> Result<Node, ParseError> {
        let statements = parse_statements(self)?;
        if let Some(token) = self.peek() {
            return Err(ParseError::unexpected(Expected::EndOfInput, Some(token)));
        }
        Ok(Node::list(NodeKind::Program, statements))
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_expression_sequence(&mut self) -> Result<Node, ParseError> {
        let statements = parse_statements(self)?;
        Ok(Node::list(NodeKind::Expressions, statements))
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_single_expression(&mut self) -> Result<Node, ParseError> {
        parse_statement(self)
    }
}

pub fn parse_program(tokens: &[Token]) -> Result<Node, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Trailing tokens after the statements are ignored.
pub fn parse_expression_sequence(tokens: &[Token]) -> Result<Node, ParseError> {
    Parser::new(tokens).parse_expression_sequence()
}

/// Trailing tokens after the expression are ignored.
pub fn parse_single_expression(tokens: &[Token]) -> Result<Node, ParseError> {
    Parser::new(tokens).parse_single_expression()
}
