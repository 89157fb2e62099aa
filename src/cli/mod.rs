mod context;
mod flags;
mod output;
pub mod prompts;
mod quiet;

use std::process::ExitCode;

use context::Context;
pub use flags::CliFlags;
use flags::Command;

/// Run in command-line mode.
pub fn run(mut flags: CliFlags) -> ExitCode {
    quiet::set(flags.quiet);

    let result = match flags.command.take() {
        Some(Command::Check { password }) => context::check(password),
        command => {
            flags.command = command;
            Context::new(flags).run()
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
