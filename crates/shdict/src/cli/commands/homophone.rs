//! Implementation of `shdict homophone`.

use std::process::ExitCode;

use crate::cli::{args::HomophoneCommand, context::CommandContext, output::print_outcome};

/// Finds words that sound like the query characters.
pub fn run(ctx: &CommandContext, cmd: &HomophoneCommand) -> ExitCode {
    let dictionary = match ctx.dictionary() {
        Ok(d) => d,
        Err(code) => return code,
    };

    let result = dictionary.homophones(&cmd.query, cmd.source.as_deref());
    print_outcome(result, cmd.output.json)
}
