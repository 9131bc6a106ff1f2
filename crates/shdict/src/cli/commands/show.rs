//! Implementation of `shdict show`.

use std::process::ExitCode;

use shdict_lookup::LookupError;

use crate::cli::{args::ShowCommand, context::CommandContext, output::print_outcome};

/// Shows one entry by id.
pub fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    let dictionary = match ctx.dictionary() {
        Ok(d) => d,
        Err(code) => return code,
    };

    match dictionary.select(&cmd.id) {
        Err(LookupError::MissingDocument { id }) => {
            eprintln!("error: not found: {id}");
            eprintln!("Expected format: source:word");
            ExitCode::FAILURE
        }
        result => print_outcome(result, cmd.output.json),
    }
}
