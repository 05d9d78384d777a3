use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::environment::Environment;
use crate::object::{BuiltinFunction, EvaluationError, Value, ValueKind};

/// Where `println` writes its lines.
pub type Output = Rc<RefCell<dyn Write>>;

pub(crate) fn register(environment: &mut Environment, output: Output) {
    environment.set("true".into(), Value::Boolean(true));
    environment.set("false".into(), Value::Boolean(false));
    environment.set(
        "exit".into(),
        Value::Builtin(BuiltinFunction::new("exit", builtin_exit)),
    );
    environment.set(
        "println".into(),
        Value::Builtin(BuiltinFunction::new("println", move |args| {
            builtin_println(&output, args)
        })),
    );
}

fn unexpected_number_of_arguments_error(
    function: &'static str,
    expected: usize,
    got: usize,
) -> EvaluationError {
    EvaluationError::WrongArgumentCount {
        function,
        expected,
        actual: got,
    }
}

fn exit_code(args: &[Value]) -> Result<i32, EvaluationError> {
    if args.len() != 1 {
        return Err(unexpected_number_of_arguments_error("exit", 1, args.len()));
    }
    match &args[0] {
        Value::Integer(code) => {
            i32::try_from(*code).map_err(|_| EvaluationError::InvalidExitCode(*code))
        }
        other => Err(EvaluationError::WrongArgumentType {
            function: "exit",
            expected: ValueKind::Integer,
            actual: other.kind(),
        }),
    }
}

fn builtin_exit(args: Vec<Value>) -> Result<Value, EvaluationError> {
    let code = exit_code(&args)?;
    tracing::debug!(code, "exiting");
    std::process::exit(code)
}

fn format_line(args: &[Value]) -> String {
    let mut line = args.iter().map(Value::to_string).collect::<String>();
    line.push('\n');
    line
}

fn builtin_println(output: &Output, args: Vec<Value>) -> Result<Value, EvaluationError> {
    let line = format_line(&args);
    if let Err(error) = output.borrow_mut().write_all(line.as_bytes()) {
        tracing::warn!(%error, "println could not write its output");
    }
    Ok(Value::Unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_arguments() {
        let tests = vec![
            (vec![Value::Integer(3)], Ok(3)),
            (
                vec![],
                Err(EvaluationError::WrongArgumentCount {
                    function: "exit",
                    expected: 1,
                    actual: 0,
                }),
            ),
            (
                vec![Value::Integer(1), Value::Integer(2)],
                Err(EvaluationError::WrongArgumentCount {
                    function: "exit",
                    expected: 1,
                    actual: 2,
                }),
            ),
            (
                vec![Value::text("1")],
                Err(EvaluationError::WrongArgumentType {
                    function: "exit",
                    expected: ValueKind::Integer,
                    actual: ValueKind::Text,
                }),
            ),
            (
                vec![Value::Integer(1 << 40)],
                Err(EvaluationError::InvalidExitCode(1 << 40)),
            ),
        ];

        for (args, expected) in tests {
            assert_eq!(exit_code(&args), expected);
        }
    }

    #[test]
    fn test_println_concatenates() {
        let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
        let output: Output = buffer.clone();

        let result = builtin_println(
            &output,
            vec![
                Value::text("a"),
                Value::Integer(1),
                Value::Float(2.0),
                Value::Boolean(false),
            ],
        );
        builtin_println(&output, vec![]).unwrap();

        assert_eq!(result, Ok(Value::Unit));
        assert_eq!(String::from_utf8(buffer.borrow().clone()).unwrap(), "a12false\n\n");
    }
}
