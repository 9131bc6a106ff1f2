//! Implementation of `shdict import`.

use std::{path::Path, process::ExitCode};

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use shdict_index::{EntryIndex, ImportReporter, import_dir, remove_index};

use crate::cli::{
    args::ImportCommand,
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Prints import progress to stderr.
struct ProgressReporter;

impl ImportReporter for ProgressReporter {
    fn on_file_start(&mut self, path: &Path, source: &str) {
        eprintln!("Importing {source} from {}", path.display());
    }

    fn on_progress(&mut self, _path: &Path, records: usize) {
        eprintln!("{}", dim(&format!("   {records} records")));
    }

    fn on_file_done(&mut self, _path: &Path, records: usize) {
        eprintln!("{}", dim(&format!("   done, {records} records")));
    }
}

/// Rebuilds the index from a directory of ndjson files.
pub fn run(ctx: &CommandContext, cmd: &ImportCommand) -> ExitCode {
    if !cmd.dir.is_dir() {
        eprintln!("error: not a directory: {}", cmd.dir.display());
        return ExitCode::FAILURE;
    }

    let index_dir = ctx.index_dir();
    match remove_index(&index_dir) {
        Ok(Some(path)) => eprintln!("Removed old index at {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("error: failed to remove old index: {e}");
            return ExitCode::FAILURE;
        }
    }

    let index = match EntryIndex::create(&index_dir) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("error: failed to create index: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut writer = match index.writer() {
        Ok(writer) => writer,
        Err(e) => {
            eprintln!("error: failed to open index writer: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stats = match import_dir(&mut writer, &cmd.dir, &mut ProgressReporter) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("error: import failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if stats.files == 0 {
        println!(
            "{}",
            warning(&format!("No *.ndjson files found in {}", cmd.dir.display()))
        );
        return ExitCode::SUCCESS;
    }

    let entries = match writer.num_docs() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: failed to count entries: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Source", "Name", "Records"]);
    for (source, records) in &stats.per_source {
        table.add_row(vec![
            source.clone(),
            ctx.config.sources.name(source).to_string(),
            records.to_string(),
        ]);
    }
    println!("{table}");
    println!(
        "{} {entries} entries from {} records in {} files",
        subheader("Imported"),
        stats.records,
        stats.files
    );
    println!("{}", dim(&format!("Index: {}", index_dir.display())));

    ExitCode::SUCCESS
}
