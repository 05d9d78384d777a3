use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::builtins::{self, Output};
use crate::object::Value;

/// One frame of bindings. Lookups fall back to the enclosing frame, which is
/// borrowed rather than owned.
#[derive(Debug)]
pub struct Environment<'p> {
    store: HashMap<Rc<str>, Value>,
    outer: Option<&'p Environment<'p>>,
}

impl Environment<'static> {
    /// An empty frame without builtins.
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
            outer: None,
        }
    }

    /// A root frame whose builtins print to stdout.
    pub fn root() -> Self {
        Self::root_with_output(Rc::new(RefCell::new(std::io::stdout())))
    }

    pub fn root_with_output(output: Output) -> Self {
        let mut environment = Self::new();
        builtins::register(&mut environment, output);
        environment
    }
}

impl<'p> Environment<'p> {
    pub fn new_enclosed(outer: &'p Environment<'p>) -> Self {
        Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.store
            .get(key)
            .cloned()
            .or_else(|| self.outer.and_then(|outer| outer.get(key)))
    }

    /// Binds `key` in this frame, shadowing any binding of the outer frames.
    pub fn set(&mut self, key: Rc<str>, value: Value) {
        self.store.insert(key, value);
    }
}

impl Default for Environment<'static> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_walks_outward() {
        let mut root = Environment::new();
        root.set("x".into(), Value::Integer(1));
        root.set("y".into(), Value::Integer(2));

        let mut inner = Environment::new_enclosed(&root);
        inner.set("x".into(), Value::Integer(10));

        assert_eq!(inner.get("x"), Some(Value::Integer(10)));
        assert_eq!(inner.get("y"), Some(Value::Integer(2)));
        assert_eq!(inner.get("z"), None);
        assert_eq!(root.get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn test_root_builtins() {
        let root = Environment::root_with_output(Rc::new(RefCell::new(Vec::<u8>::new())));

        assert_eq!(root.get("true"), Some(Value::Boolean(true)));
        assert_eq!(root.get("false"), Some(Value::Boolean(false)));
        assert!(matches!(root.get("println"), Some(Value::Builtin(f)) if f.name == "println"));
        assert!(matches!(root.get("exit"), Some(Value::Builtin(f)) if f.name == "exit"));
        assert_eq!(Environment::new().get("true"), None);
    }
}
