use std::rc::Rc;

use ergolas_core::ast::{Node, NodeKind};

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueKind {
    Integer,
    Float,
    Text,
    Boolean,
    Builtin,
    Node,
    Unit,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ValueKind::*;
        let name = match self {
            Integer => "integer",
            Float => "float",
            Text => "text",
            Boolean => "boolean",
            Builtin => "builtin",
            Node => "node",
            Unit => "unit",
        };
        f.write_str(name)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(Rc<str>),
    Boolean(bool),
    Builtin(BuiltinFunction),
    /// A quoted syntax tree.
    Node(Rc<Node>),
    Unit,
}

impl Value {
    pub fn text(value: &str) -> Value {
        Value::Text(value.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Builtin(_) => ValueKind::Builtin,
            Value::Node(_) => ValueKind::Node,
            Value::Unit => ValueKind::Unit,
        }
    }

    /// Only `false` and unit are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Unit)
    }
}

/// The default text form, as written by `println`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Text(value) => f.write_str(value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Builtin(function) => write!(f, "<builtin {}>", function.name),
            Value::Node(node) => write!(f, "{}", node),
            Value::Unit => f.write_str("nil"),
        }
    }
}

pub type NativeFunction = dyn Fn(Vec<Value>) -> Result<Value, EvaluationError>;

#[derive(Clone)]
pub struct BuiltinFunction {
    pub name: &'static str,
    func: Rc<NativeFunction>,
}

impl BuiltinFunction {
    pub fn new(
        name: &'static str,
        func: impl Fn(Vec<Value>) -> Result<Value, EvaluationError> + 'static,
    ) -> Self {
        BuiltinFunction {
            name,
            func: Rc::new(func),
        }
    }

    pub fn call(&self, arguments: Vec<Value>) -> Result<Value, EvaluationError> {
        (self.func)(arguments)
    }
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && Rc::as_ptr(&self.func).cast::<()>() == Rc::as_ptr(&other.func).cast::<()>()
    }
}

impl std::fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvaluationError {
    #[error("unbound variable \"{0}\"")]
    UnboundVariable(Rc<str>),
    #[error("not a function: {0}")]
    NotCallable(Value),
    #[error("expected identifier on left side of assignment, got {0}")]
    ExpectedIdentifier(NodeKind),
    #[error("cannot apply operator \"{operator}\" to types {left} and {right}")]
    UnsupportedOperator {
        operator: Rc<str>,
        left: ValueKind,
        right: ValueKind,
    },
    #[error("{function}: expected {expected} argument(s), got {actual}")]
    WrongArgumentCount {
        function: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{function}: expected {expected} but got {actual}")]
    WrongArgumentType {
        function: &'static str,
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("exit code {0} is out of range")]
    InvalidExitCode(i64),
    #[error("division by zero")]
    DivisionByZero,
    #[error("evaluation of {0} nodes is not implemented")]
    NotImplemented(NodeKind),
    #[error("malformed {0} node")]
    MalformedNode(NodeKind),
    #[error("unexpected {0} node")]
    UnexpectedNode(NodeKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        let tests = vec![
            (Value::Boolean(false), false),
            (Value::Unit, false),
            (Value::Boolean(true), true),
            (Value::Integer(0), true),
            (Value::Float(0.0), true),
            (Value::text(""), true),
            (Value::Node(Rc::new(Node::identifier("x"))), true),
        ];

        for (value, expected) in tests {
            assert_eq!(value.is_truthy(), expected, "{value:?}");
        }
    }

    #[test]
    fn test_display() {
        let tests = vec![
            (Value::Integer(-3), "-3"),
            (Value::Float(3.0), "3"),
            (Value::Float(0.25), "0.25"),
            (Value::text("hi"), "hi"),
            (Value::Boolean(true), "true"),
            (Value::Unit, "nil"),
            (
                Value::Builtin(BuiltinFunction::new("noop", |_| Ok(Value::Unit))),
                "<builtin noop>",
            ),
        ];

        for (value, expected) in tests {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn test_builtin_identity() {
        let function = BuiltinFunction::new("noop", |_| Ok(Value::Unit));
        let same = function.clone();
        let other = BuiltinFunction::new("noop", |_| Ok(Value::Unit));

        assert_eq!(function, same);
        assert_ne!(function, other);
    }
}
