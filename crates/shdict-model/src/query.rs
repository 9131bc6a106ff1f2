//! Provider-native query tree.
//!
//! Queries are built by the lookup engine and compiled by the provider. The tree
//! only has the node types every provider can execute: phrase and exact-term
//! matches on a named field, match-all, and N-ary conjunction and disjunction.

use std::fmt;

use crate::EntryField;

/// A query against entry documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// Matches every document.
    MatchAll,

    /// The text, after the field's analysis, appears as a contiguous phrase.
    Phrase {
        /// Field to search.
        field: EntryField,
        /// Raw phrase text.
        text: String,
    },

    /// The field holds exactly this unanalyzed value.
    Term {
        /// Field to search.
        field: EntryField,
        /// Exact value.
        value: String,
    },

    /// Conjunction: all sub-queries must match.
    And(Vec<Self>),

    /// Disjunction: at least one sub-query must match.
    Or(Vec<Self>),
}

impl QueryNode {
    /// Creates a phrase match on a field.
    pub fn phrase(field: EntryField, text: impl Into<String>) -> Self {
        Self::Phrase {
            field,
            text: text.into(),
        }
    }

    /// Creates an exact term match on a field.
    pub fn term(field: EntryField, value: impl Into<String>) -> Self {
        Self::Term {
            field,
            value: value.into(),
        }
    }

    /// Creates an And query, flattening nested Ands.
    pub fn and(nodes: Vec<Self>) -> Self {
        let flattened: Vec<Self> = nodes
            .into_iter()
            .flat_map(|n| match n {
                Self::And(inner) => inner,
                other => vec![other],
            })
            .collect();

        match <[Self; 1]>::try_from(flattened) {
            Ok([single]) => single,
            Err(many) => Self::And(many),
        }
    }

    /// Creates an Or query, flattening nested Ors.
    pub fn or(nodes: Vec<Self>) -> Self {
        let flattened: Vec<Self> = nodes
            .into_iter()
            .flat_map(|n| match n {
                Self::Or(inner) => inner,
                other => vec![other],
            })
            .collect();

        match <[Self; 1]>::try_from(flattened) {
            Ok([single]) => single,
            Err(many) => Self::Or(many),
        }
    }

    /// Formats the node as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::MatchAll => writeln!(f, "{prefix}MatchAll"),
            Self::Phrase { field, text } => writeln!(f, "{prefix}Phrase({field}, {text:?})"),
            Self::Term { field, value } => writeln!(f, "{prefix}Term({field}, {value:?})"),
            Self::And(nodes) => {
                writeln!(f, "{prefix}And")?;
                for node in nodes {
                    node.fmt_tree(f, indent + 1)?;
                }
                Ok(())
            }
            Self::Or(nodes) => {
                writeln!(f, "{prefix}Or")?;
                for node in nodes {
                    node.fmt_tree(f, indent + 1)?;
                }
                Ok(())
            }
        }
    }

    /// Formats the node on one line, e.g. `(word:"阿拉" OR source:=c)`.
    pub fn to_query_string(&self) -> String {
        match self {
            Self::MatchAll => "*".to_string(),
            Self::Phrase { field, text } => format!("{field}:{text:?}"),
            Self::Term { field, value } => format!("{field}:={value}"),
            Self::And(nodes) => Self::join(nodes, " AND "),
            Self::Or(nodes) => Self::join(nodes, " OR "),
        }
    }

    /// Joins child query strings with an operator, parenthesized.
    fn join(nodes: &[Self], op: &str) -> String {
        let parts: Vec<String> = nodes.iter().map(Self::to_query_string).collect();
        format!("({})", parts.join(op))
    }
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
