use crate::object::{EvaluationError, Value};

/// The operand types a rule accepts, with the function applied to them.
/// Both operands always share one type.
enum Operation {
    Integer(fn(i64, i64) -> Result<i64, EvaluationError>),
    Float(fn(f64, f64) -> f64),
    Text(fn(&str, &str) -> String),
}

struct BinaryRule {
    operator: &'static str,
    operation: Operation,
}

const fn rule(operator: &'static str, operation: Operation) -> BinaryRule {
    BinaryRule {
        operator,
        operation,
    }
}

fn integer_division(left: i64, right: i64) -> Result<i64, EvaluationError> {
    if right == 0 {
        return Err(EvaluationError::DivisionByZero);
    }
    Ok(left.wrapping_div(right))
}

fn integer_remainder(left: i64, right: i64) -> Result<i64, EvaluationError> {
    if right == 0 {
        return Err(EvaluationError::DivisionByZero);
    }
    Ok(left.wrapping_rem(right))
}

/// Every supported (operator, left type, right type) combination. Anything
/// missing here is an `UnsupportedOperator` error.
const BINARY_RULES: &[BinaryRule] = &[
    rule("+", Operation::Integer(|l, r| Ok(l.wrapping_add(r)))),
    rule("+", Operation::Float(|l, r| l + r)),
    rule("+", Operation::Text(|l, r| format!("{l}{r}"))),
    rule("-", Operation::Integer(|l, r| Ok(l.wrapping_sub(r)))),
    rule("-", Operation::Float(|l, r| l - r)),
    rule("*", Operation::Integer(|l, r| Ok(l.wrapping_mul(r)))),
    rule("*", Operation::Float(|l, r| l * r)),
    rule("/", Operation::Integer(integer_division)),
    rule("/", Operation::Float(|l, r| l / r)),
    rule("%", Operation::Integer(integer_remainder)),
    rule("%", Operation::Float(|l, r| l % r)),
];

/// Applies an eagerly evaluated binary operator.
pub fn apply_binary(operator: &str, left: &Value, right: &Value) -> Result<Value, EvaluationError> {
    for rule in BINARY_RULES.iter().filter(|rule| rule.operator == operator) {
        match (&rule.operation, left, right) {
            (Operation::Integer(apply), Value::Integer(l), Value::Integer(r)) => {
                return apply(*l, *r).map(Value::Integer)
            }
            (Operation::Float(apply), Value::Float(l), Value::Float(r)) => {
                return Ok(Value::Float(apply(*l, *r)))
            }
            (Operation::Text(apply), Value::Text(l), Value::Text(r)) => {
                return Ok(Value::Text(apply(l, r).into()))
            }
            _ => {}
        }
    }

    Err(EvaluationError::UnsupportedOperator {
        operator: operator.into(),
        left: left.kind(),
        right: right.kind(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ValueKind;

    fn unsupported(operator: &str, left: ValueKind, right: ValueKind) -> Result<Value, EvaluationError> {
        Err(EvaluationError::UnsupportedOperator {
            operator: operator.into(),
            left,
            right,
        })
    }

    #[test]
    fn test_supported_pairs() {
        let tests = vec![
            ("+", Value::Integer(2), Value::Integer(3), Ok(Value::Integer(5))),
            ("+", Value::Float(0.5), Value::Float(0.25), Ok(Value::Float(0.75))),
            ("+", Value::text("ab"), Value::text("cd"), Ok(Value::text("abcd"))),
            ("-", Value::Integer(2), Value::Integer(3), Ok(Value::Integer(-1))),
            ("-", Value::Float(1.5), Value::Float(0.5), Ok(Value::Float(1.0))),
            ("*", Value::Integer(-4), Value::Integer(3), Ok(Value::Integer(-12))),
            ("*", Value::Float(1.5), Value::Float(2.0), Ok(Value::Float(3.0))),
            ("/", Value::Integer(7), Value::Integer(2), Ok(Value::Integer(3))),
            ("/", Value::Integer(-7), Value::Integer(2), Ok(Value::Integer(-3))),
            ("/", Value::Float(7.0), Value::Float(2.0), Ok(Value::Float(3.5))),
            ("%", Value::Integer(-7), Value::Integer(3), Ok(Value::Integer(-1))),
            ("%", Value::Float(7.5), Value::Float(2.0), Ok(Value::Float(1.5))),
            ("%", Value::Float(-7.5), Value::Float(2.0), Ok(Value::Float(-1.5))),
        ];

        for (operator, left, right, expected) in tests {
            assert_eq!(apply_binary(operator, &left, &right), expected, "{left} {operator} {right}");
        }
    }

    #[test]
    fn test_unsupported_pairs() {
        use ValueKind::*;
        let tests = vec![
            ("+", Value::Integer(1), Value::Float(1.0), unsupported("+", Integer, Float)),
            ("-", Value::text("a"), Value::text("b"), unsupported("-", Text, Text)),
            ("*", Value::text("a"), Value::Integer(3), unsupported("*", Text, Integer)),
            ("+", Value::Boolean(true), Value::Boolean(true), unsupported("+", Boolean, Boolean)),
            ("==", Value::Integer(1), Value::Integer(1), unsupported("==", Integer, Integer)),
            ("::", Value::Unit, Value::Unit, unsupported("::", Unit, Unit)),
        ];

        for (operator, left, right, expected) in tests {
            assert_eq!(apply_binary(operator, &left, &right), expected);
        }
    }

    #[test]
    fn test_integer_edge_cases() {
        let tests = vec![
            ("/", 1, 0, Err(EvaluationError::DivisionByZero)),
            ("%", 1, 0, Err(EvaluationError::DivisionByZero)),
            ("+", i64::MAX, 1, Ok(Value::Integer(i64::MIN))),
            ("/", i64::MIN, -1, Ok(Value::Integer(i64::MIN))),
        ];

        for (operator, left, right, expected) in tests {
            assert_eq!(
                apply_binary(operator, &Value::Integer(left), &Value::Integer(right)),
                expected
            );
        }
    }

    #[test]
    fn test_float_division_by_zero() {
        assert_eq!(
            apply_binary("/", &Value::Float(1.0), &Value::Float(0.0)),
            Ok(Value::Float(f64::INFINITY))
        );
    }
}
