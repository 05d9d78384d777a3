use ergolas_core::ast::Node;
use ergolas_interpreter::{evaluate_with, Environment, EvaluationError, Value};

/// Holds the one environment of a REPL session, so bindings made by earlier
/// lines stay visible to later ones.
pub struct Evaluator {
    environment: Environment<'static>,
}

impl Evaluator {
    pub fn new(environment: Environment<'static>) -> Self {
        Self { environment }
    }

    pub fn evaluate(&mut self, node: &Node) -> Result<Value, EvaluationError> {
        evaluate_with(node, &mut self.environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ergolas_core::{lexer, parser};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_bindings_persist_across_lines() {
        let output = Rc::new(RefCell::new(Vec::<u8>::new()));
        let mut evaluator = Evaluator::new(Environment::root_with_output(output));
        let mut run = |line: &str| {
            let tokens = lexer::tokenize(line).unwrap();
            evaluator.evaluate(&parser::parse_expression_sequence(&tokens).unwrap())
        };

        assert_eq!(run("a := 5"), Ok(Value::Unit));
        assert_eq!(run("b := a; c"), Err(EvaluationError::UnboundVariable("c".into())));
        assert_eq!(run("a + b"), Ok(Value::Integer(10)));
    }
}
