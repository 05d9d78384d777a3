use std::path::Path;

use ergolas_core::{lexer, parser};
use ergolas_interpreter::evaluate;

use crate::error::Error;

pub fn run_file(path: &Path, dump_ast: bool) -> Result<(), Error> {
    let source = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "running script");
    execute(&source, dump_ast)
}

/// Runs `source` as a whole program against a fresh root environment.
pub fn execute(source: &str, dump_ast: bool) -> Result<(), Error> {
    let tokens = lexer::tokenize(source)?;
    let program = parser::parse_program(&tokens)?;
    if dump_ast {
        print!("{}", program.dump());
    }
    evaluate(&program)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_errors() {
        assert!(matches!(execute("x := @", false), Err(Error::Lex(_))));
        assert!(matches!(execute("a }", false), Err(Error::Parse(_))));
        assert!(matches!(execute("nope 1", false), Err(Error::Evaluation(_))));
        assert!(execute("x := 1 + 2\nx", false).is_ok());
    }

    #[test]
    fn test_lex_error_position() {
        let error = execute("x := 1\n  @", false).unwrap_err();
        assert_eq!(error.to_string(), "lexing error: [2:3] unexpected character");
    }
}
