use ergolas_core::ast::Node;
use ergolas_interpreter::{EvaluationError, Value};

pub struct Printer {
    pub dump_ast: bool,
}

impl Printer {
    pub fn print_tree(&self, node: &Node) {
        if self.dump_ast {
            print!("{}", node.dump());
        }
    }

    pub fn print(&self, result: Result<Value, EvaluationError>) {
        match result {
            Ok(value) => println!("{:?}", value),
            Err(error) => eprintln!("Error evaluating:\n{}", error),
        }
    }
}
