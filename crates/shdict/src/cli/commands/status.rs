//! Implementation of `shdict status`.

use std::process::ExitCode;

use shdict_config::{ConfigWarning, Discovery};
use shdict_index::{TantivyProvider, index_exists};

use crate::cli::{
    context::CommandContext,
    output::{dim, rule, subheader, warning},
};

/// Shows configuration files, index state, effective settings and warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;
    let config = &ctx.config;

    println!("{}", subheader("Config files:"));
    let discovery = Discovery::find(cwd);
    if discovery.is_empty() {
        println!("   {}", dim("(none found, using defaults)"));
    }
    for file in &discovery.files {
        println!("   {} {}", file.path.display(), dim(&format!("({})", file.scope)));
    }
    println!();

    println!("{}", subheader("Project:"));
    match discovery.project_dir() {
        Some(dir) => println!("   {}", dir.display()),
        None => println!("   {}", dim("(no project config, index defaults to the working directory)")),
    }
    println!();

    let index_dir = ctx.index_dir();
    println!("{}", subheader("Index:"));
    if index_exists(&index_dir) {
        match TantivyProvider::open(&index_dir) {
            Ok(provider) => println!(
                "   {} entries {}",
                provider.num_docs(),
                dim(&format!("({})", index_dir.display()))
            ),
            Err(e) => println!("   {}", warning(&format!("unreadable: {e}"))),
        }
    } else {
        println!(
            "   {} {}",
            dim("not built"),
            dim(&format!("({})", index_dir.display()))
        );
    }
    println!();

    println!("{}", subheader("Sources:"));
    for (code, name) in config.sources.iter() {
        println!("   {code} {}", dim(&format!("({name})")));
    }
    println!();

    println!("{}", subheader("Effective settings:"));
    println!("{}", rule(40));
    match config.settings_to_toml() {
        Ok(toml) => print!("{toml}"),
        Err(e) => println!("{}", warning(&format!("could not render settings: {e}"))),
    }
    println!("{}", rule(40));
    println!();

    let warnings = config.validate(cwd);
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::IndexMissing { .. } => {
                println!("{}", dim("Hint: run 'shdict import <dir>' with your ndjson files"));
            }
            ConfigWarning::NoSourcesDefined => {
                println!("{}", dim("Hint: add a [sources] section to .shdict.toml"));
            }
            ConfigWarning::IndexNotDirectory { .. } => {
                println!("{}", dim("Hint: point [index] path at a directory"));
            }
        }
    }
}
