pub mod builtins;
pub mod environment;
pub mod evaluator;
pub mod object;
pub mod operators;

pub use environment::Environment;
pub use evaluator::{evaluate, evaluate_with};
pub use object::{EvaluationError, Value};
