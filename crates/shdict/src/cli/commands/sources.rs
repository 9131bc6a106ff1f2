//! Implementation of `shdict sources`.

use std::process::ExitCode;

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;

use crate::cli::{
    args::OutputArgs,
    context::CommandContext,
    output::{dim, print_json},
};

/// JSON row for one source.
#[derive(Serialize)]
struct JsonSource<'a> {
    /// Source code used in ids and filters.
    code: &'a str,
    /// Display name.
    name: &'a str,
}

/// Lists the configured source dictionaries.
pub fn run(ctx: &CommandContext, output: &OutputArgs) -> ExitCode {
    let sources = &ctx.config.sources;

    if output.json {
        let rows: Vec<JsonSource<'_>> = sources
            .iter()
            .map(|(code, name)| JsonSource { code, name })
            .collect();
        return print_json(&rows);
    }

    if sources.is_empty() {
        println!("{}", dim("No sources configured."));
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Code", "Name"]);
    for (code, name) in sources.iter() {
        table.add_row(vec![code, name]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}
