use super::error::{Expected, ParseError};
use super::statements::{parse_statement, parse_statements};
use crate::ast::{Node, NodeKind};
use crate::lexer::{Token, TokenKind};
use crate::parser::Parser;

/// Tokens that end the argument list of a juxtaposition call.
const CALL_TERMINATORS: &[&str] = &[";", ")", "]", "}", ":=", "::", "<-", "->", "|>"];

fn is_call_terminator(token: &Token) -> bool {
    token.kind == TokenKind::Newline || CALL_TERMINATORS.contains(&&*token.text)
}

pub(crate) fn binary(left: Node, operator: &Token, right: Node) -> Node {
    Node::list(
        NodeKind::Binary,
        vec![left, Node::operator(&operator.text), right],
    )
}

/// A value followed either by a chain of left operators or by the arguments
/// of a juxtaposition call.
///
/// ```text
/// <Intermediate> ::= <PropertyOrValue> ( LOperator <LeftBinary> )?
///                  | <PropertyOrValue> ( <PropertyOrValue> <LeftBinary> ","? )+
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(cursor = parser.position()))]
pub fn parse_intermediate(parser: &mut Parser) -> Result<Node, ParseError> {
    let callee = parse_property_or_value(parser)?;

    if parser
        .peek()
        .is_some_and(|token| token.kind == TokenKind::LOperator)
    {
        return parse_left_binary_expression(parser, callee);
    }

    let mut arguments = Vec::new();
    while parser.peek().is_some_and(|token| !is_call_terminator(token)) {
        let argument = parse_property_or_value(parser)?;
        arguments.push(parse_left_binary_expression(parser, argument)?);
        parser.next_if_text(TokenKind::Punctuation, ",");
    }

    if arguments.is_empty() {
        return Ok(callee);
    }

    let mut children = Vec::with_capacity(arguments.len() + 1);
    children.push(callee);
    children.extend(arguments);
    Ok(Node::list(NodeKind::FunctionCall, children))
}

/// Folds `( LOperator <PropertyOrValue> )*` onto `left`. Every operator
/// spelling binds equally, so the chain is strictly left to right.
#[tracing::instrument(level = "trace", skip_all, fields(cursor = parser.position()))]
pub fn parse_left_binary_expression(parser: &mut Parser, left: Node) -> Result<Node, ParseError> {
    let mut left = left;
    while let Some(operator) = parser.next_if_kind(TokenKind::LOperator) {
        let right = parse_property_or_value(parser)?;
        left = binary(left, operator, right);
    }
    Ok(left)
}

/// `<Value> ( "." Identifier )*`
#[tracing::instrument(level = "trace", skip_all, fields(cursor = parser.position()))]
pub fn parse_property_or_value(parser: &mut Parser) -> Result<Node, ParseError> {
    let mut node = parse_value(parser)?;

    while parser.next_if_text(TokenKind::Punctuation, ".").is_some() {
        let property = parser.expect_kind(TokenKind::Ident)?;
        node = Node::list(
            NodeKind::PropertyAccess,
            vec![node, Node::identifier(&property.text)],
        );
    }

    Ok(node)
}

#[tracing::instrument(level = "trace", skip_all, fields(cursor = parser.position()))]
pub fn parse_value(parser: &mut Parser) -> Result<Node, ParseError> {
    parser.first_of(&[
        parse_parens,
        parse_block,
        parse_unquote,
        parse_identifier,
        parse_integer,
        parse_float,
        parse_string,
        parse_quoted,
    ])
}

fn parse_parens(parser: &mut Parser) -> Result<Node, ParseError> {
    parser.expect_text(TokenKind::Punctuation, "(")?;
    let inner = parse_statement(parser)?;
    parser.expect_text(TokenKind::Punctuation, ")")?;

    Ok(Node::list(NodeKind::Parenthesis, vec![inner]))
}

fn parse_block(parser: &mut Parser) -> Result<Node, ParseError> {
    parser.expect_text(TokenKind::Punctuation, "{")?;
    parser.skip_newlines();
    let statements = parse_statements(parser)?;
    parser.skip_newlines();
    parser.expect_text(TokenKind::Punctuation, "}")?;

    Ok(Node::list(NodeKind::Block, statements))
}

/// `$(...)`, only recognized when the marker touches the parenthesis.
fn parse_unquote(parser: &mut Parser) -> Result<Node, ParseError> {
    let marker = parser.expect_text(TokenKind::Ident, "$")?;
    match parser.peek() {
        Some(open) if open.is(TokenKind::Punctuation, "(") && open.offset == marker.end() => {}
        got => return Err(ParseError::unexpected(Expected::Text("("), got)),
    }
    let inner = parse_parens(parser)?;

    Ok(Node::list(NodeKind::Unquote, vec![inner]))
}

fn parse_identifier(parser: &mut Parser) -> Result<Node, ParseError> {
    let token = parser.expect_kind(TokenKind::Ident)?;
    Ok(Node::identifier(&token.text))
}

fn parse_integer(parser: &mut Parser) -> Result<Node, ParseError> {
    let token = parser.expect_kind(TokenKind::Integer)?;
    let value = token
        .text
        .parse()
        .map_err(|source| ParseError::InvalidInteger {
            token: token.clone(),
            source,
        })?;
    Ok(Node::integer(value))
}

fn parse_float(parser: &mut Parser) -> Result<Node, ParseError> {
    let token = parser.expect_kind(TokenKind::Float)?;
    let value = token
        .text
        .parse()
        .map_err(|source| ParseError::InvalidFloat {
            token: token.clone(),
            source,
        })?;
    Ok(Node::float(value))
}

// TODO: decode escape sequences, the contents are kept verbatim for now
fn parse_string(parser: &mut Parser) -> Result<Node, ParseError> {
    let token = parser.expect_kind(TokenKind::String)?;
    let contents = token
        .text
        .strip_prefix('"')
        .and_then(|text| text.strip_suffix('"'))
        .unwrap_or(&*token.text);
    Ok(Node::string(contents))
}

/// `":" <PropertyOrValue>`
fn parse_quoted(parser: &mut Parser) -> Result<Node, ParseError> {
    parser.expect_kind(TokenKind::Quote)?;
    let inner = parse_property_or_value(parser)?;

    Ok(Node::list(NodeKind::Quoted, vec![inner]))
}
