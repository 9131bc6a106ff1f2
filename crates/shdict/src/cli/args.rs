//! Clap argument definitions for the `shdict` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "shdict")]
#[command(about = "Shanghainese dictionary - look up words, readings, meanings and homophones")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `shdict search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Word, reading or English meaning to look up
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Restrict results to one source dictionary (see `shdict sources`)
    #[arg(short = 's', long)]
    pub source: Option<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

impl SearchCommand {
    /// The query words joined by spaces.
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for `shdict homophone`.
#[derive(Args, Debug, Clone)]
pub struct HomophoneCommand {
    /// Characters to find homophones for
    pub query: String,

    /// Restrict results to one source dictionary
    #[arg(short = 's', long)]
    pub source: Option<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `shdict page`.
#[derive(Args, Debug, Clone)]
pub struct PageCommand {
    /// Token printed next to a previous or next page control, or an item
    pub token: String,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `shdict show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Entry id (source:word)
    pub id: String,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `shdict import`.
#[derive(Args, Debug, Clone)]
pub struct ImportCommand {
    /// Directory of *.ndjson files; each file stem names a source
    pub dir: PathBuf,
}

/// Arguments for `shdict init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.shdict.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `shdict` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Look up a word, reading or meaning
    #[command(after_help = "\
MATCHING:
  The query is matched as a phrase against headwords, alternate forms,
  readings (with or without diacritics) and English meanings.
  A single result, or a single exact match on the first page, is shown
  in full; otherwise a page of 25 results is listed.

EXAMPLES:
  shdict search 阿拉
  shdict search aq la
  shdict search -s qianplus good")]
    Search(SearchCommand),

    /// Find words that sound like the given characters
    Homophone(HomophoneCommand),

    /// Follow a page or item token from earlier output
    Page(PageCommand),

    /// Show one entry by id
    Show(ShowCommand),

    /// Rebuild the index from a directory of ndjson files
    Import(ImportCommand),

    /// List the known source dictionaries
    Sources(OutputArgs),

    /// Initialize shdict configuration in current directory
    Init(InitCommand),

    /// Show configuration, index statistics and issues
    Status,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_joins_query_words() {
        let cli = Cli::try_parse_from(["shdict", "search", "aq", "la", "-s", "c"]).unwrap();
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(cmd.query_text(), "aq la");
        assert_eq!(cmd.source.as_deref(), Some("c"));
        assert!(!cmd.output.json);
    }

    #[test]
    fn search_requires_a_query() {
        assert!(Cli::try_parse_from(["shdict", "search"]).is_err());
    }

    #[test]
    fn sources_accepts_json() {
        let cli = Cli::try_parse_from(["shdict", "sources", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Sources(OutputArgs { json: true })));
    }
}
