//! Text analysis pipelines for the entry index.
//!
//! Each searchable field family gets its own analyzer:
//! - Written forms (`word`, `alternate_forms`) split every Han character into its own
//!   token, so a phrase of characters matches anywhere inside a longer word.
//! - Readings split on whitespace only. Hyphens and apostrophes stay inside the token.
//! - Meanings are English prose: split on punctuation, lowercased, stemmed.

use tantivy::{
    Index,
    tokenizer::{
        Language, LowerCaser, RegexTokenizer, RemoveLongFilter, SimpleTokenizer, Stemmer,
        TextAnalyzer, WhitespaceTokenizer,
    },
};

use crate::IndexError;

/// Tokenizer for written forms.
pub const HAN_TOKENIZER: &str = "shdict_han";

/// Tokenizer for readings and folded readings.
pub const READING_TOKENIZER: &str = "shdict_reading";

/// Tokenizer for English meanings.
pub const MEANING_TOKENIZER: &str = "shdict_meaning";

/// Maximum token length in bytes before filtering.
const MAX_TOKEN_LENGTH: usize = 40;

/// One Han character per token, or a run of other letters and digits.
const HAN_PATTERN: &str = r"\p{Han}|[\p{L}\p{N}&&\P{Han}]+";

/// Builds the written-form analyzer.
pub fn build_han_analyzer() -> Result<TextAnalyzer, IndexError> {
    let tokenizer = RegexTokenizer::new(HAN_PATTERN).map_err(|e| IndexError::Analyzer {
        name: HAN_TOKENIZER,
        message: e.to_string(),
    })?;
    Ok(TextAnalyzer::builder(tokenizer).filter(LowerCaser).build())
}

/// Builds the reading analyzer.
pub fn build_reading_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(WhitespaceTokenizer::default())
        .filter(LowerCaser)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH))
        .build()
}

/// Builds the meaning analyzer.
///
/// The pipeline is:
/// 1. `SimpleTokenizer` - splits text on whitespace and punctuation
/// 2. `LowerCaser` - normalizes tokens to lowercase
/// 3. `RemoveLongFilter` - removes tokens > 40 bytes
/// 4. `Stemmer` - English stemming
pub fn build_meaning_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH))
        .filter(Stemmer::new(Language::English))
        .build()
}

/// The three analyzers, keyed by tokenizer name.
#[derive(Clone)]
pub struct Analyzers {
    /// Written-form analyzer.
    pub han: TextAnalyzer,
    /// Reading analyzer.
    pub reading: TextAnalyzer,
    /// Meaning analyzer.
    pub meaning: TextAnalyzer,
}

impl Analyzers {
    /// Builds all analyzers.
    pub fn new() -> Result<Self, IndexError> {
        Ok(Self {
            han: build_han_analyzer()?,
            reading: build_reading_analyzer(),
            meaning: build_meaning_analyzer(),
        })
    }

    /// Registers every analyzer with an index under its tokenizer name.
    pub fn register(&self, index: &Index) {
        let tokenizers = index.tokenizers();
        tokenizers.register(HAN_TOKENIZER, self.han.clone());
        tokenizers.register(READING_TOKENIZER, self.reading.clone());
        tokenizers.register(MEANING_TOKENIZER, self.meaning.clone());
    }

    /// Returns the analyzer registered under a tokenizer name.
    pub fn get(&self, name: &str) -> Option<&TextAnalyzer> {
        match name {
            HAN_TOKENIZER => Some(&self.han),
            READING_TOKENIZER => Some(&self.reading),
            MEANING_TOKENIZER => Some(&self.meaning),
            _ => None,
        }
    }
}

/// Runs text through an analyzer and collects the token texts.
pub fn tokenize(analyzer: &TextAnalyzer, text: &str) -> Vec<String> {
    let mut analyzer = analyzer.clone();
    let mut stream = analyzer.token_stream(text);
    let mut tokens = Vec::new();
    while let Some(token) = stream.next() {
        tokens.push(token.text.clone());
    }
    tokens
}
