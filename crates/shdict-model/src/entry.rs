//! Dictionary entries and their definition groups.

use serde::{Deserialize, Serialize};

use crate::{EntryField, StoredField, diacritics::strip_diacritics};

/// Builds the document key of an entry: `{source}:{word}`.
pub fn entry_id(source: &str, word: &str) -> String {
    format!("{source}:{word}")
}

/// One reading-to-meaning group within an entry.
///
/// `readings` and `readings_no_diacritics` are index-aligned: element `i` of the
/// latter is the folded form of element `i` of the former.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Phonetic readings, possibly with diacritics.
    pub readings: Vec<String>,
    /// Readings with diacritics folded to plain spellings.
    pub readings_no_diacritics: Vec<String>,
    /// English glosses.
    pub meanings: Vec<String>,
}

impl Definition {
    /// Creates a definition group, deriving the diacritic-free readings.
    pub fn new(readings: Vec<String>, meanings: Vec<String>) -> Self {
        let readings_no_diacritics = readings.iter().map(|r| strip_diacritics(r)).collect();
        Self {
            readings,
            readings_no_diacritics,
            meanings,
        }
    }
}

/// One dictionary headword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Document key, `{source}:{word}`.
    pub id: String,
    /// Canonical written form.
    pub word: String,
    /// Simplified and variant written forms.
    pub alternate_forms: Vec<String>,
    /// Definition groups, in stored order.
    pub definitions: Vec<Definition>,
    /// Source code of the dictionary volume.
    pub source: String,
}

impl Entry {
    /// Creates an entry and derives its id from source and word.
    pub fn new(
        source: impl Into<String>,
        word: impl Into<String>,
        alternate_forms: Vec<String>,
        definitions: Vec<Definition>,
    ) -> Self {
        let source = source.into();
        let word = word.into();
        Self {
            id: entry_id(&source, &word),
            word,
            alternate_forms,
            definitions,
            source,
        }
    }

    /// Iterates every reading of every definition group.
    pub fn readings(&self) -> impl Iterator<Item = &str> {
        self.definitions
            .iter()
            .flat_map(|d| d.readings.iter().map(String::as_str))
    }

    /// Iterates every meaning of every definition group.
    pub fn meanings(&self) -> impl Iterator<Item = &str> {
        self.definitions
            .iter()
            .flat_map(|d| d.meanings.iter().map(String::as_str))
    }

    /// Flattens the entry into stored fields with array positions.
    ///
    /// This is the projection a provider stores and hands back on document
    /// fetch. Grouped values carry `[group, i]`, list values `[i]`.
    pub fn flatten(&self) -> Vec<StoredField> {
        let mut fields = vec![
            StoredField::scalar(EntryField::Word, &self.word),
            StoredField::scalar(EntryField::Source, &self.source),
        ];

        for (i, form) in self.alternate_forms.iter().enumerate() {
            fields.push(StoredField::new(EntryField::AlternateForms, form, vec![i]));
        }

        for (group, def) in self.definitions.iter().enumerate() {
            let lists = [
                (EntryField::Readings, &def.readings),
                (EntryField::ReadingsNoDiacritics, &def.readings_no_diacritics),
                (EntryField::Meanings, &def.meanings),
            ];
            for (field, values) in lists {
                for (i, value) in values.iter().enumerate() {
                    fields.push(StoredField::new(field, value, vec![group, i]));
                }
            }
        }

        fields
    }
}
