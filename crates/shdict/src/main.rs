//! Command-line interface for the `shdict` dictionary.

use std::process::ExitCode;

use clap::Parser;
use shdict::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    logging::init(&ctx.config.log.filter);
    commands::run(cli.command, &ctx)
}
