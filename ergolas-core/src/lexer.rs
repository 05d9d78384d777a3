use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Float,
    Integer,
    String,
    /// Right associative operators, `:=` and `::`.
    ROperator,
    Quote,
    /// Any run of operator symbols, chained left to right.
    LOperator,
    Punctuation,
    Ident,
    Newline,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TokenKind::*;
        let name = match self {
            Float => "Float",
            Integer => "Integer",
            String => "String",
            ROperator => "ROperator",
            Quote => "Quote",
            LOperator => "LOperator",
            Punctuation => "Punctuation",
            Ident => "Identifier",
            Newline => "Newline",
        };
        f.write_str(name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Rc<str>,
    /// Byte offset of the first character in the source.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, offset: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            offset,
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && &*self.text == text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "{} at {}", self.kind, self.offset),
            _ => write!(f, "{} {:?} at {}", self.kind, &*self.text, self.offset),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
#[error("[{line}:{column}] {message}")]
pub struct LexError {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl LexError {
    fn new(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_column(source, offset).unwrap_or_default();
        LexError {
            offset,
            line,
            column,
            message: message.into(),
        }
    }
}

/// Resolves a byte offset into a 1-based `(line, column)` pair.
///
/// Returns `None` when the offset lies past the end of the source (the
/// position right after the last character still resolves).
pub fn line_column(source: &str, offset: usize) -> Option<(usize, usize)> {
    let mut consumed = 0;
    for (index, line) in source.split('\n').enumerate() {
        let length = line.len() + 1;
        if offset < consumed + length {
            return Some((index + 1, offset - consumed + 1));
        }
        consumed += length;
    }
    None
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Emit(TokenKind),
    Skip,
}

/// Each matcher returns the byte length of its match at the start of the
/// input, 0 meaning no match. The first matching rule wins, regardless of
/// whether a later rule would match more text.
type Matcher = fn(&str) -> usize;

const RULES: &[(Rule, Matcher)] = &[
    (Rule::Emit(TokenKind::Float), match_float),
    (Rule::Emit(TokenKind::Integer), match_integer),
    (Rule::Emit(TokenKind::String), match_string),
    (Rule::Emit(TokenKind::ROperator), match_right_operator),
    (Rule::Emit(TokenKind::Quote), match_quote),
    (Rule::Emit(TokenKind::LOperator), match_left_operator),
    (Rule::Emit(TokenKind::Punctuation), match_punctuation),
    (Rule::Emit(TokenKind::Ident), match_identifier),
    (Rule::Emit(TokenKind::Newline), match_newline),
    (Rule::Skip, match_comment),
    (Rule::Skip, match_whitespace),
];

const OPERATOR_SYMBOLS: &[u8] = b"+-*/%=<>!&|^";
const PUNCTUATION: &[u8] = b".,;()[]{}";

fn count_while(input: &str, predicate: impl Fn(u8) -> bool) -> usize {
    input.bytes().take_while(|byte| predicate(*byte)).count()
}

fn match_integer(input: &str) -> usize {
    count_while(input, |byte| byte.is_ascii_digit())
}

fn match_float(input: &str) -> usize {
    let whole = match_integer(input);
    if whole == 0 || !input[whole..].starts_with('.') {
        return 0;
    }
    match match_integer(&input[whole + 1..]) {
        0 => 0,
        fraction => whole + 1 + fraction,
    }
}

// Escapes are skipped over but not decoded, the token keeps the raw text.
fn match_string(input: &str) -> usize {
    if !input.starts_with('"') {
        return 0;
    }
    let mut chars = input.char_indices().skip(1);
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '"' => return idx + 1,
            '\\' if chars.next().is_none() => return 0,
            _ => {}
        }
    }
    0
}

fn match_right_operator(input: &str) -> usize {
    if input.starts_with(":=") || input.starts_with("::") {
        2
    } else {
        0
    }
}

fn match_quote(input: &str) -> usize {
    usize::from(input.starts_with(':'))
}

fn match_left_operator(input: &str) -> usize {
    count_while(input, |byte| OPERATOR_SYMBOLS.contains(&byte))
}

fn match_punctuation(input: &str) -> usize {
    match input.bytes().next() {
        Some(byte) if PUNCTUATION.contains(&byte) => 1,
        _ => 0,
    }
}

fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || matches!(byte, b'-' | b'_' | b'$')
}

fn match_identifier(input: &str) -> usize {
    match input.bytes().next() {
        Some(byte) if is_identifier_start(byte) => {
            1 + count_while(&input[1..], |byte| {
                byte.is_ascii_digit() || is_identifier_start(byte)
            })
        }
        _ => 0,
    }
}

fn match_newline(input: &str) -> usize {
    if !input.starts_with('\n') {
        return 0;
    }
    1 + count_while(&input[1..], |byte| {
        matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
    })
}

fn match_comment(input: &str) -> usize {
    if !input.starts_with('#') {
        return 0;
    }
    input.find('\n').unwrap_or(input.len())
}

fn match_whitespace(input: &str) -> usize {
    count_while(input, |byte| matches!(byte, b' ' | b'\t'))
}

#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    cursor: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            failed: false,
        }
    }

    fn match_rules(&self) -> Option<(Rule, usize)> {
        let remaining = &self.input[self.cursor..];
        RULES.iter().find_map(|(rule, matcher)| match matcher(remaining) {
            0 => None,
            length => Some((*rule, length)),
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.failed && self.cursor < self.input.len() {
            let Some((rule, length)) = self.match_rules() else {
                self.failed = true;
                return Some(Err(LexError::new(
                    self.input,
                    self.cursor,
                    "unexpected character",
                )));
            };

            let start = self.cursor;
            self.cursor += length;
            if let Rule::Emit(kind) = rule {
                return Some(Ok(Token::new(kind, &self.input[start..self.cursor], start)));
            }
        }
        None
    }
}

/// Splits `source` into tokens, stopping at the first character no rule
/// accepts.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).collect()
}
