use anyhow::Result;

use nine_box_calibration::cli::Command;
use nine_box_calibration::{handle_completions, handle_force, handle_serve, handle_stats, interpret};

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
        Command::Serve { port } => handle_serve(*port),
        Command::Force {
            input,
            mean,
            std_dev,
            output,
        } => handle_force(input, *mean, *std_dev, output.as_deref()),
        Command::Stats { input, json } => handle_stats(input, *json),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
