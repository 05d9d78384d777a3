use ergolas_core::lexer::LexError;
use ergolas_core::parser::ParseError;
use ergolas_interpreter::EvaluationError;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("lexing error: {0}")]
    Lex(#[from] LexError),
    #[error("parsing error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),
}
