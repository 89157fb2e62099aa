use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let flags = CliFlags::parse();

    match env::args_os().len() {
        1 if io::stdin().is_terminal() => run_tui(&flags),
        _ if flags.interactive => run_tui(&flags),
        _ => cli::run(flags),
    }
}

fn run_tui(flags: &CliFlags) -> ExitCode {
    if let Err(e) = tui::run(&flags.config_path()) {
        terminal::reset_terminal();
        cli::prompts::error(&e.to_string());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
