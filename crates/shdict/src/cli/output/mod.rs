//! Rendering and JSON serialization for CLI output.

mod style;

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use shdict_lookup::{
    DetailView, ERROR_MESSAGE, ListView, LookupError, MEANING_UNKNOWN, NO_RESULTS_MESSAGE, Outcome,
    PAGE_SIZE,
};

pub use style::{dim, header, italic, rule, subheader, warning};

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the result of a lookup interaction.
///
/// An empty query or a failed lookup exits with failure; no results is a
/// normal outcome.
pub fn print_outcome(result: Result<Outcome, LookupError>, json: bool) -> ExitCode {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {ERROR_MESSAGE}");
            eprintln!("{}", dim(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let code = if matches!(outcome, Outcome::EmptyQuery) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };

    if json {
        return match serde_json::to_string_pretty(&outcome) {
            Ok(json) => {
                println!("{json}");
                code
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match &outcome {
        Outcome::EmptyQuery => eprintln!("error: {}", outcome.message().unwrap_or_default()),
        Outcome::NoResults { query } => {
            println!("{}", header(&format!("0 results for “{query}”")));
            println!("{}", dim(NO_RESULTS_MESSAGE));
        }
        Outcome::List(view) => print_list(view),
        Outcome::Detail(view) => print_detail(view),
    }
    code
}

/// Prints a page of results with its paging tokens.
fn print_list(view: &ListView) {
    println!("{}", header(&view.title));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Entry", "Meanings", "Id"]);
    let first = view.page * PAGE_SIZE + 1;
    for (i, item) in view.items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(first + i),
            Cell::new(&item.label),
            Cell::new(&item.description),
            Cell::new(&item.value),
        ]);
    }
    println!("{table}");

    let Some(controls) = &view.controls else {
        return;
    };
    println!("{}", dim(&controls.placeholder));
    if controls.previous.enabled {
        println!("{} {}", subheader("Previous page:"), controls.previous.token);
    }
    if controls.next.enabled {
        println!("{} {}", subheader("Next page:"), controls.next.token);
    }
    println!("{}", dim("Open an entry with: shdict show <id>"));
}

/// Prints one entry in full.
fn print_detail(view: &DetailView) {
    println!("{}", header(&view.title));
    for block in &view.definitions {
        println!();
        println!("{}", subheader(&block.readings));
        if block.meanings.is_empty() {
            println!("{}", italic(MEANING_UNKNOWN));
        }
        for meaning in &block.meanings {
            println!("{meaning}");
        }
    }
    if !view.attribution.is_empty() {
        println!();
        println!("{}", italic(&view.attribution));
    }
    println!("{}", rule(40));
    println!("{}", dim(&view.id));
}
