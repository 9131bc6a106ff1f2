//! View models handed to a front end.
//!
//! A front end renders one of two shapes: a list of up to a page of entries
//! with paging controls, or one entry in detail. Both carry plain text and
//! callback tokens only, so any chat or terminal surface can draw them.

use std::fmt;

use serde::Serialize;
use shdict_model::{Entry, SourceTable};

use crate::{
    pager::{PAGE_SIZE, Page},
    token::{Action, PagePayload, SearchKind},
};

/// Shown when the query is empty.
pub const EMPTY_QUERY_MESSAGE: &str = "You have to provide something to look up!";

/// Shown when nothing matched.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Shown when a lookup failed.
pub const ERROR_MESSAGE: &str = "An error occurred.";

/// Shown for a definition group without meanings.
pub const MEANING_UNKNOWN: &str = "Meaning unknown";

/// Maximum description length in bytes, ellipsis included.
const DESCRIPTION_LIMIT: usize = 100;

/// Marks a character an alternate form shares with the word.
const DITTO: char = '〃';

/// Result of one lookup interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing to look up.
    EmptyQuery,
    /// The lookup matched nothing.
    NoResults {
        /// Trimmed query text.
        query: String,
    },
    /// A page of results.
    List(ListView),
    /// A single entry.
    Detail(DetailView),
}

impl Outcome {
    /// The user-facing message for outcomes without a view.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::EmptyQuery => Some(EMPTY_QUERY_MESSAGE),
            Self::NoResults { .. } => Some(NO_RESULTS_MESSAGE),
            Self::List(_) | Self::Detail(_) => None,
        }
    }
}

/// One selectable row of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Word followed by its readings.
    pub label: String,
    /// Meanings, truncated.
    pub description: String,
    /// Entry id.
    pub value: String,
    /// Token that opens this entry.
    pub token: String,
}

/// A previous or next page button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    /// Token that shows the target page.
    pub token: String,
    /// Whether the button can be pressed.
    pub enabled: bool,
}

/// Paging controls of a list with more than one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListControls {
    /// Selector placeholder naming the rank range shown.
    pub placeholder: String,
    /// Previous page.
    pub previous: PageButton,
    /// Next page.
    pub next: PageButton,
}

/// One page of lookup results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Lookup kind.
    pub kind: SearchKind,
    /// Headline with the total count.
    pub title: String,
    /// Zero-based page number.
    pub page: usize,
    /// Total number of matches.
    pub total: u64,
    /// Rows in rank order.
    pub items: Vec<ListItem>,
    /// Paging controls; absent for a single result.
    pub controls: Option<ListControls>,
}

impl ListView {
    /// Builds the list for a page and its reconstructed entries.
    pub fn new(kind: SearchKind, payload: &PagePayload, page: &Page, entries: &[Entry]) -> Self {
        let items = entries
            .iter()
            .map(|entry| list_item(kind, entry))
            .collect();

        let (title, controls) = if page.total == 1 {
            (format!("1 result for “{}”", payload.query), None)
        } else {
            let button = |target: usize, enabled: bool| PageButton {
                token: Action::GoToPage {
                    kind,
                    payload: payload.at_page(target),
                }
                .encode(),
                enabled,
            };
            let controls = ListControls {
                placeholder: format!(
                    "Select from results {} to {}",
                    page.first_rank(),
                    page.number
                        .saturating_mul(PAGE_SIZE)
                        .saturating_add(entries.len())
                ),
                previous: button(page.number.saturating_sub(1), page.number > 0),
                next: button(page.number.saturating_add(1), page.has_next),
            };
            (
                format!("{} results for “{}”", page.total, payload.query),
                Some(controls),
            )
        };

        Self {
            kind,
            title,
            page: page.number,
            total: page.total,
            items,
            controls,
        }
    }
}

/// Builds the row for one entry.
fn list_item(kind: SearchKind, entry: &Entry) -> ListItem {
    let readings: Vec<&str> = entry.readings().collect();
    let meanings: Vec<&str> = entry.meanings().collect();
    ListItem {
        label: format!("{} ({})", entry.word, readings.join(", ")),
        description: truncate(&meanings.join("; "), DESCRIPTION_LIMIT, "..."),
        value: entry.id.clone(),
        token: Action::Select {
            kind,
            id: entry.id.clone(),
        }
        .encode(),
    }
}

/// Cuts `s` to at most `limit` bytes including `ellipsis`, on a char boundary.
pub fn truncate(s: &str, limit: usize, ellipsis: &str) -> String {
    if s.len() <= limit {
        return s.to_string();
    }
    let budget = limit.saturating_sub(ellipsis.len());
    let end = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);
    format!("{}{ellipsis}", &s[..end])
}

/// One definition group as shown in detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionBlock {
    /// Readings joined by `, `.
    pub readings: String,
    /// Meanings; empty when unknown.
    pub meanings: Vec<String>,
}

impl fmt::Display for DefinitionBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.readings)?;
        if self.meanings.is_empty() {
            f.write_str(MEANING_UNKNOWN)
        } else {
            f.write_str(&self.meanings.join("\n"))
        }
    }
}

/// A single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Entry id.
    pub id: String,
    /// Word plus differing alternate forms.
    pub title: String,
    /// One block per definition group.
    pub definitions: Vec<DefinitionBlock>,
    /// Source dictionary name; empty for unknown sources.
    pub attribution: String,
}

impl DetailView {
    /// Builds the detail view of an entry.
    pub fn new(entry: &Entry, sources: &SourceTable) -> Self {
        Self {
            id: entry.id.clone(),
            title: detail_title(&entry.word, &entry.alternate_forms),
            definitions: entry
                .definitions
                .iter()
                .map(|def| DefinitionBlock {
                    readings: def.readings.join(", "),
                    meanings: def.meanings.clone(),
                })
                .collect(),
            attribution: sources.name(&entry.source).to_string(),
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for block in &self.definitions {
            writeln!(f)?;
            writeln!(f, "{block}")?;
        }
        if !self.attribution.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.attribution)?;
        }
        Ok(())
    }
}

/// Renders the word followed by the alternate forms that differ from it.
///
/// Characters an alternate form shares with the word at the same position
/// show as `〃`. Forms identical to the word are left out.
fn detail_title(word: &str, alternate_forms: &[String]) -> String {
    let word_chars: Vec<char> = word.chars().collect();
    let differing: Vec<String> = alternate_forms
        .iter()
        .filter_map(|form| {
            let mut differs = false;
            let rendered: String = form
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if word_chars.get(i) == Some(&c) {
                        DITTO
                    } else {
                        differs = true;
                        c
                    }
                })
                .collect();
            differs.then_some(rendered)
        })
        .collect();

    if differing.is_empty() {
        word.to_string()
    } else {
        format!("{word} ({})", differing.join(", "))
    }
}
