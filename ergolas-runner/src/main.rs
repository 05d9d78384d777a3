mod error;
mod repl;
mod runner;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Script to run. Starts the REPL when omitted.
    path: Option<PathBuf>,
    /// Print the syntax tree before evaluating it.
    #[arg(long)]
    dump_ast: bool,
    /// Log every parser production at trace level.
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.path {
        None => repl::start(cli.dump_ast),
        Some(path) => runner::run_file(&path, cli.dump_ast),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
