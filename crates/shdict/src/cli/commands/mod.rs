//! Command implementations and dispatch.

pub mod homophone;
pub mod import;
pub mod init;
pub mod page;
pub mod search;
pub mod show;
pub mod sources;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Homophone(cmd) => homophone::run(ctx, &cmd),
        Commands::Page(cmd) => page::run(ctx, &cmd),
        Commands::Show(cmd) => show::run(ctx, &cmd),
        Commands::Import(cmd) => import::run(ctx, &cmd),
        Commands::Sources(output) => sources::run(ctx, &output),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
    }
}
