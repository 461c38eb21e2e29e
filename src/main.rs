use anyhow::Result;

use yau_ranking::cli::Command;
use yau_ranking::{handle_completions, handle_serve, handle_show, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Show { sort, strict } => handle_show(*sort, *strict),
        Command::Serve { port, strict } => handle_serve(*port, *strict),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
