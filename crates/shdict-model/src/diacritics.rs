//! Diacritic folding for readings.
//!
//! Readings are romanized with a handful of accented vowels and an apostrophe
//! marking aspiration. Users rarely type those, so every reading is also stored
//! in a folded form produced by a fixed substitution table:
//!
//! | from | to   |
//! |------|------|
//! | `á`  | `aa` |
//! | `ó`  | `o`  |
//! | `ú`  | `oo` |
//! | `ü`  | `ui` |
//! | `û`  | `u`  |
//! | `ö`  | `oe` |
//! | `'`  | `h`  |
//!
//! Decomposed input (`a` + U+0301) folds like its precomposed key. Nothing
//! else is normalized: accents outside the table stay as they were typed.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Returns the replacement for a single character, if the table maps it.
fn replacement(c: char) -> Option<&'static str> {
    match c {
        'á' => Some("aa"),
        'ó' => Some("o"),
        'ú' => Some("oo"),
        'ü' => Some("ui"),
        'û' => Some("u"),
        'ö' => Some("oe"),
        '\'' => Some("h"),
        _ => None,
    }
}

/// Folds the diacritics of a reading into plain ASCII spellings.
///
/// A base letter followed by combining marks is composed only to look it up:
/// `a` + combining acute folds like `á`, while a cluster that composes to
/// anything outside the table is kept exactly as written. Other characters
/// pass through unchanged.
pub fn strip_diacritics(reading: &str) -> String {
    let mut out = String::with_capacity(reading.len());
    let mut chars = reading.chars().peekable();
    while let Some(c) = chars.next() {
        let mut cluster = String::from(c);
        while let Some(&mark) = chars.peek() {
            if !is_combining_mark(mark) {
                break;
            }
            cluster.push(mark);
            chars.next();
        }
        match composed(&cluster).and_then(replacement) {
            Some(rep) => out.push_str(rep),
            None => out.push_str(&cluster),
        }
    }
    out
}

/// Composes a cluster, returning the character when it composes to exactly one.
fn composed(cluster: &str) -> Option<char> {
    let mut nfc = cluster.nfc();
    match (nfc.next(), nfc.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
