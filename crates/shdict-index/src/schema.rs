//! Index schema definition for the entry index.
//!
//! One tantivy document per entry. Multi-valued fields store their values in
//! order; grouped fields carry a stored-only companion field holding the packed
//! `[group, i]` position of each value, in the same order.

use shdict_model::{EntryField, FieldShape};
use tantivy::schema::{
    FAST, Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions,
};

use crate::analyzer::{HAN_TOKENIZER, MEANING_TOKENIZER, READING_TOKENIZER};

/// Handles to all fields in the index schema.
#[derive(Debug, Clone)]
pub struct IndexSchema {
    /// The underlying Tantivy schema.
    schema: Schema,
    /// Document key: `{source}:{word}`.
    pub id: Field,
    /// Canonical written form.
    pub word: Field,
    /// Alternate written forms.
    pub alternate_forms: Field,
    /// Readings.
    pub readings: Field,
    /// Folded readings.
    pub readings_no_diacritics: Field,
    /// English meanings.
    pub meanings: Field,
    /// Source code.
    pub source: Field,
    /// Packed positions of `readings` values.
    pub readings_pos: Field,
    /// Packed positions of `readings_no_diacritics` values.
    pub readings_no_diacritics_pos: Field,
    /// Packed positions of `meanings` values.
    pub meanings_pos: Field,
}

/// Text options for a stored, positionally indexed field.
fn text_field(tokenizer: &str) -> TextOptions {
    TextOptions::default()
        .set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(tokenizer)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        )
        .set_stored()
}

impl IndexSchema {
    /// Creates a new index schema with all fields configured.
    pub fn new() -> Self {
        let mut builder = Schema::builder();

        let id = builder.add_text_field("id", STRING | STORED);
        let word = builder.add_text_field("word", text_field(HAN_TOKENIZER));
        let alternate_forms = builder.add_text_field("alternate_forms", text_field(HAN_TOKENIZER));
        let readings =
            builder.add_text_field("definitions_readings", text_field(READING_TOKENIZER));
        let readings_no_diacritics = builder.add_text_field(
            "definitions_readings_no_diacritics",
            text_field(READING_TOKENIZER),
        );
        let meanings =
            builder.add_text_field("definitions_meanings", text_field(MEANING_TOKENIZER));

        // Source: single token, stored, fast for filtering
        let source = builder.add_text_field("source", STRING | STORED | FAST);

        let readings_pos = builder.add_u64_field("definitions_readings_pos", STORED);
        let readings_no_diacritics_pos =
            builder.add_u64_field("definitions_readings_no_diacritics_pos", STORED);
        let meanings_pos = builder.add_u64_field("definitions_meanings_pos", STORED);

        let schema = builder.build();

        Self {
            schema,
            id,
            word,
            alternate_forms,
            readings,
            readings_no_diacritics,
            meanings,
            source,
            readings_pos,
            readings_no_diacritics_pos,
            meanings_pos,
        }
    }

    /// Returns a reference to the underlying Tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the tantivy field holding an entry field's values.
    pub fn field(&self, field: EntryField) -> Field {
        match field {
            EntryField::Word => self.word,
            EntryField::AlternateForms => self.alternate_forms,
            EntryField::Readings => self.readings,
            EntryField::ReadingsNoDiacritics => self.readings_no_diacritics,
            EntryField::Meanings => self.meanings,
            EntryField::Source => self.source,
        }
    }

    /// Returns the companion position field of a grouped entry field.
    pub fn positions(&self, field: EntryField) -> Option<Field> {
        match field {
            EntryField::Readings => Some(self.readings_pos),
            EntryField::ReadingsNoDiacritics => Some(self.readings_no_diacritics_pos),
            EntryField::Meanings => Some(self.meanings_pos),
            _ => None,
        }
    }

    /// Returns the tokenizer name of an entry field.
    pub fn tokenizer(field: EntryField) -> &'static str {
        match field {
            EntryField::Word | EntryField::AlternateForms => HAN_TOKENIZER,
            EntryField::Readings | EntryField::ReadingsNoDiacritics => READING_TOKENIZER,
            EntryField::Meanings => MEANING_TOKENIZER,
            EntryField::Source => "raw",
        }
    }
}

impl Default for IndexSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Packs a `[group, i]` position into one stored integer.
pub fn pack_position(group: usize, index: usize) -> u64 {
    ((group as u64) << 32) | (index as u64 & 0xffff_ffff)
}

/// Unpacks a stored integer into a `[group, i]` position.
pub fn unpack_position(packed: u64) -> [usize; 2] {
    [(packed >> 32) as usize, (packed & 0xffff_ffff) as usize]
}
