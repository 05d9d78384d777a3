use ergolas_core::ast::Node;
use ergolas_core::{lexer, parser};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::Error;

const PROMPT: &str = ">> ";

pub enum ReadOutput {
    Exit,
    Clear,
    Value(Node),
}

pub struct Reader {
    rl: DefaultEditor,
}

impl Reader {
    pub fn new(rl: DefaultEditor) -> Self {
        Self { rl }
    }

    pub fn read(&mut self) -> ReadOutput {
        let line = match self.rl.readline(PROMPT) {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                return ReadOutput::Clear;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                return ReadOutput::Exit;
            }
            Err(error) => {
                eprintln!("{}", Error::from(error));
                return ReadOutput::Exit;
            }
            Ok(line) => line,
        };

        if let Err(error) = self.rl.add_history_entry(line.as_str()) {
            tracing::warn!(%error, "could not record history entry");
        }

        match parse_line(&line) {
            Ok(node) => ReadOutput::Value(node),
            Err(error) => {
                eprintln!("{error}");
                ReadOutput::Clear
            }
        }
    }
}

fn parse_line(line: &str) -> Result<Node, Error> {
    let tokens = lexer::tokenize(line)?;
    Ok(parser::parse_expression_sequence(&tokens)?)
}
