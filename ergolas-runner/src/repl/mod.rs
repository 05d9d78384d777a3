mod evaluator;
mod printer;
mod reader;

use ergolas_interpreter::Environment;
use rustyline::DefaultEditor;

use crate::error::Error;
use evaluator::Evaluator;
use printer::Printer;
use reader::{ReadOutput, Reader};

struct Repl {
    reader: Reader,
    evaluator: Evaluator,
    printer: Printer,
}

impl Repl {
    fn run(mut self) {
        loop {
            match self.reader.read() {
                ReadOutput::Exit => break,
                ReadOutput::Clear => continue,
                ReadOutput::Value(node) => {
                    self.printer.print_tree(&node);
                    let result = self.evaluator.evaluate(&node);
                    self.printer.print(result);
                }
            }
        }
    }
}

pub fn start(dump_ast: bool) -> Result<(), Error> {
    let rl = DefaultEditor::new()?;

    Repl {
        reader: Reader::new(rl),
        evaluator: Evaluator::new(Environment::root()),
        printer: Printer { dump_ast },
    }
    .run();

    Ok(())
}
