use crate::ast::Node;
use crate::lexer::TokenKind;
use crate::parser::expressions::{binary, parse_intermediate};
use crate::parser::{ParseError, Parser};

/// `( Statement ";"? )*`, stopping at end of input or before a closing `}`.
#[tracing::instrument(level = "trace", skip_all, fields(cursor = parser.position()))]
pub fn parse_statements(parser: &mut Parser) -> Result<Vec<Node>, ParseError> {
    let mut statements = Vec::new();

    parser.skip_newlines();
    while parser
        .peek()
        .is_some_and(|token| !token.is(TokenKind::Punctuation, "}"))
    {
        statements.push(parse_statement(parser)?);
        parser.next_if_text(TokenKind::Punctuation, ";");
        parser.skip_newlines();
    }

    Ok(statements)
}

pub fn parse_statement(parser: &mut Parser) -> Result<Node, ParseError> {
    parse_right_binary_expression(parser)
}

/// `Intermediate ( ROperator RightBinaryExpression )?`
#[tracing::instrument(level = "trace", skip_all, fields(cursor = parser.position()))]
fn parse_right_binary_expression(parser: &mut Parser) -> Result<Node, ParseError> {
    let left = parse_intermediate(parser)?;

    match parser.next_if_kind(TokenKind::ROperator) {
        Some(operator) => {
            let right = parse_right_binary_expression(parser)?;
            Ok(binary(left, operator, right))
        }
        None => Ok(left),
    }
}
