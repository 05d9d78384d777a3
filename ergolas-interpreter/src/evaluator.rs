use std::rc::Rc;

use ergolas_core::ast::{Node, NodeKind, Payload};

use crate::environment::Environment;
use crate::object::{EvaluationError, Value};
use crate::operators::apply_binary;

/// Evaluates `node` against a fresh root environment.
pub fn evaluate(node: &Node) -> Result<Value, EvaluationError> {
    let mut environment = Environment::root();
    evaluate_with(node, &mut environment)
}

/// Evaluates `node` against a caller owned environment, so that bindings
/// persist between calls. Bindings made before an error are kept.
pub fn evaluate_with(node: &Node, environment: &mut Environment) -> Result<Value, EvaluationError> {
    eval_node(node, environment)
}

fn eval_node(node: &Node, environment: &mut Environment) -> Result<Value, EvaluationError> {
    tracing::trace!(kind = %node.kind(), "evaluating");

    match node.kind() {
        NodeKind::Program => {
            for child in node.children() {
                eval_node(child, environment)?;
            }
            Ok(Value::Unit)
        }
        NodeKind::Expressions => {
            let mut result = Value::Unit;
            for child in node.children() {
                result = eval_node(child, environment)?;
            }
            Ok(result)
        }
        NodeKind::FunctionCall => eval_function_call(node, environment),
        NodeKind::Binary => eval_binary(node, environment),
        NodeKind::Quoted => Ok(Value::Node(Rc::new(node.clone()))),
        NodeKind::Parenthesis => match node.children() {
            [inner] => eval_node(inner, environment),
            _ => Err(EvaluationError::MalformedNode(NodeKind::Parenthesis)),
        },
        NodeKind::Identifier => {
            let name = leaf_text(node)?;
            environment
                .get(name)
                .ok_or_else(|| EvaluationError::UnboundVariable(name.clone()))
        }
        NodeKind::Integer | NodeKind::Float | NodeKind::String => eval_literal(node),
        NodeKind::Block | NodeKind::PropertyAccess | NodeKind::Unquote => {
            Err(EvaluationError::NotImplemented(node.kind()))
        }
        NodeKind::Operator => Err(EvaluationError::UnexpectedNode(NodeKind::Operator)),
    }
}

fn leaf_text(node: &Node) -> Result<&Rc<str>, EvaluationError> {
    node.text()
        .ok_or(EvaluationError::MalformedNode(node.kind()))
}

fn eval_literal(node: &Node) -> Result<Value, EvaluationError> {
    match (node.kind(), node.payload()) {
        (NodeKind::Integer, Some(Payload::Integer(value))) => Ok(Value::Integer(*value)),
        (NodeKind::Float, Some(Payload::Float(value))) => Ok(Value::Float(*value)),
        (NodeKind::String, Some(Payload::Text(value))) => Ok(Value::Text(value.clone())),
        (kind, _) => Err(EvaluationError::MalformedNode(kind)),
    }
}

fn eval_function_call(node: &Node, environment: &mut Environment) -> Result<Value, EvaluationError> {
    let [callee, arguments @ ..] = node.children() else {
        return Err(EvaluationError::MalformedNode(NodeKind::FunctionCall));
    };

    let function = match eval_node(callee, environment)? {
        Value::Builtin(function) => function,
        other => return Err(EvaluationError::NotCallable(other)),
    };

    let arguments = arguments
        .iter()
        .map(|argument| eval_node(argument, environment))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(function = function.name, arguments = arguments.len(), "calling builtin");
    function.call(arguments)
}

fn eval_binary(node: &Node, environment: &mut Environment) -> Result<Value, EvaluationError> {
    let [left, operator, right] = node.children() else {
        return Err(EvaluationError::MalformedNode(NodeKind::Binary));
    };
    if operator.kind() != NodeKind::Operator {
        return Err(EvaluationError::MalformedNode(NodeKind::Binary));
    }
    let operator = leaf_text(operator)?;

    match &**operator {
        ":=" => {
            if left.kind() != NodeKind::Identifier {
                return Err(EvaluationError::ExpectedIdentifier(left.kind()));
            }
            let name = leaf_text(left)?.clone();
            let value = eval_node(right, environment)?;

            tracing::debug!(%name, kind = %value.kind(), "binding");
            environment.set(name, value);
            Ok(Value::Unit)
        }
        "&&" => {
            let left = eval_node(left, environment)?;
            if !left.is_truthy() {
                return Ok(left);
            }
            eval_node(right, environment)
        }
        "||" => {
            let left = eval_node(left, environment)?;
            if left.is_truthy() {
                return Ok(left);
            }
            eval_node(right, environment)
        }
        _ => {
            let left = eval_node(left, environment)?;
            let right = eval_node(right, environment)?;
            apply_binary(operator, &left, &right)
        }
    }
}
