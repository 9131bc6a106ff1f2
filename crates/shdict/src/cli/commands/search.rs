//! Implementation of `shdict search`.

use std::process::ExitCode;

use crate::cli::{args::SearchCommand, context::CommandContext, output::print_outcome};

/// Looks up a word, reading or meaning and prints the first page or the entry.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let dictionary = match ctx.dictionary() {
        Ok(d) => d,
        Err(code) => return code,
    };

    let result = dictionary.search(&cmd.query_text(), cmd.source.as_deref());
    print_outcome(result, cmd.output.json)
}
