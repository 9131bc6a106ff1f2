//! Bulk import of entry records.
//!
//! Reads every `*.ndjson` file of a directory. The file stem names the source,
//! each non-blank line is one JSON entry record:
//!
//! ```json
//! {"word": "阿拉", "alternate_forms": ["阿拉"], "definitions": [{"readings": ["aq-lá"], "meanings": ["we"]}]}
//! ```
//!
//! `simplified` is accepted as an alias of `alternate_forms`. Diacritic-free
//! readings are derived here, never read from input.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use shdict_model::{Definition, Entry};
use tracing::info;

use crate::{EntryWriter, IndexError};

/// Entries staged between commits.
pub const COMMIT_EVERY: usize = 10_000;

/// Extension of import files.
const IMPORT_EXTENSION: &str = "ndjson";

/// One input line.
#[derive(Debug, Deserialize)]
struct EntryRecord {
    /// Canonical written form.
    word: String,
    /// Alternate written forms.
    #[serde(default, alias = "simplified")]
    alternate_forms: Vec<String>,
    /// Definition groups.
    #[serde(default)]
    definitions: Vec<DefinitionRecord>,
}

/// One definition group of an input line.
#[derive(Debug, Deserialize)]
struct DefinitionRecord {
    /// Readings with diacritics.
    #[serde(default)]
    readings: Vec<String>,
    /// English glosses.
    #[serde(default)]
    meanings: Vec<String>,
}

/// Parses one input line into an entry of the given source.
pub fn parse_record(line: &str, source: &str) -> Result<Entry, serde_json::Error> {
    let record: EntryRecord = serde_json::from_str(line)?;
    let definitions = record
        .definitions
        .into_iter()
        .map(|d| Definition::new(d.readings, d.meanings))
        .collect();
    Ok(Entry::new(
        source,
        record.word,
        record.alternate_forms,
        definitions,
    ))
}

/// Statistics from an import.
#[derive(Debug, Clone, Default)]
pub struct ImportStats {
    /// Number of files imported.
    pub files: usize,
    /// Number of records read, duplicates included.
    pub records: usize,
    /// Records read per source code.
    pub per_source: BTreeMap<String, usize>,
}

/// Callback for reporting import progress.
pub trait ImportReporter {
    /// Called when starting to import a file.
    fn on_file_start(&mut self, path: &Path, source: &str);

    /// Called after each intermediate commit.
    fn on_progress(&mut self, path: &Path, records: usize);

    /// Called when a file has been fully imported and committed.
    fn on_file_done(&mut self, path: &Path, records: usize);
}

/// A no-op reporter for silent imports.
pub struct SilentReporter;

impl ImportReporter for SilentReporter {
    fn on_file_start(&mut self, _path: &Path, _source: &str) {}
    fn on_progress(&mut self, _path: &Path, _records: usize) {}
    fn on_file_done(&mut self, _path: &Path, _records: usize) {}
}

/// Lists the import files of a directory, sorted by name.
pub fn import_files(dir: &Path) -> Result<Vec<PathBuf>, IndexError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == IMPORT_EXTENSION))
        .collect();
    files.sort();
    Ok(files)
}

/// Returns the source code named by an import file.
fn source_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Imports every `*.ndjson` file in `dir`.
///
/// Stops at the first malformed record; entries committed before it stay in the index.
pub fn import_dir<R: ImportReporter>(
    writer: &mut EntryWriter,
    dir: &Path,
    reporter: &mut R,
) -> Result<ImportStats, IndexError> {
    let mut stats = ImportStats::default();

    for path in import_files(dir)? {
        let source = source_of(&path);
        reporter.on_file_start(&path, &source);
        info!(path = %path.display(), source = %source, "importing file");

        let records = import_file(writer, &path, &source, reporter)?;

        info!(path = %path.display(), records, "imported file");
        reporter.on_file_done(&path, records);
        stats.files += 1;
        stats.records += records;
        *stats.per_source.entry(source).or_default() += records;
    }

    Ok(stats)
}

/// Imports one file as the given source, committing every [`COMMIT_EVERY`] records and at the end.
pub fn import_file<R: ImportReporter>(
    writer: &mut EntryWriter,
    path: &Path,
    source: &str,
    reporter: &mut R,
) -> Result<usize, IndexError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let entry = parse_record(&line, source).map_err(|e| IndexError::Record {
            path: path.to_path_buf(),
            line: i + 1,
            message: e.to_string(),
        })?;
        writer.add_entry(&entry)?;
        records += 1;

        if records % COMMIT_EVERY == 0 {
            writer.commit()?;
            info!(path = %path.display(), records, "import progress");
            reporter.on_progress(path, records);
        }
    }

    writer.commit()?;
    Ok(records)
}
