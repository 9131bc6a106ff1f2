//! Stored field paths of an entry document.

use std::fmt;

/// How a field's values are laid out in the flat document projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// One value, no array positions.
    Scalar,
    /// Many values, positions `[i]`.
    List,
    /// Many values per definition group, positions `[group, i]`.
    Grouped,
}

/// A field of an indexed entry, identified by its dotted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryField {
    /// Canonical written form.
    Word,
    /// Simplified and variant written forms.
    AlternateForms,
    /// Readings of each definition group.
    Readings,
    /// Diacritic-free readings of each definition group.
    ReadingsNoDiacritics,
    /// English glosses of each definition group.
    Meanings,
    /// Source code of the dictionary the entry came from.
    Source,
}

impl EntryField {
    /// Every field, in document order.
    pub const ALL: [Self; 6] = [
        Self::Word,
        Self::AlternateForms,
        Self::Readings,
        Self::ReadingsNoDiacritics,
        Self::Meanings,
        Self::Source,
    ];

    /// Returns the dotted path the provider uses for this field.
    pub fn path(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::AlternateForms => "alternate_forms",
            Self::Readings => "definitions.readings",
            Self::ReadingsNoDiacritics => "definitions.readings_no_diacritics",
            Self::Meanings => "definitions.meanings",
            Self::Source => "source",
        }
    }

    /// Resolves a provider field path to a field.
    ///
    /// Returns `None` for paths this model does not know about.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.path() == path)
    }

    /// Returns how the field's values are positioned.
    pub fn shape(self) -> FieldShape {
        match self {
            Self::Word | Self::Source => FieldShape::Scalar,
            Self::AlternateForms => FieldShape::List,
            Self::Readings | Self::ReadingsNoDiacritics | Self::Meanings => FieldShape::Grouped,
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
