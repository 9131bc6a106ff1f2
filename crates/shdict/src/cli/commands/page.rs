//! Implementation of `shdict page`.

use std::process::ExitCode;

use crate::cli::{args::PageCommand, context::CommandContext, output::print_outcome};

/// Follows a page or item token printed by an earlier command.
pub fn run(ctx: &CommandContext, cmd: &PageCommand) -> ExitCode {
    let dictionary = match ctx.dictionary() {
        Ok(d) => d,
        Err(code) => return code,
    };

    match dictionary.handle_callback(&cmd.token) {
        Some(result) => print_outcome(result, cmd.output.json),
        None => {
            eprintln!("error: invalid token: {}", cmd.token);
            ExitCode::FAILURE
        }
    }
}
