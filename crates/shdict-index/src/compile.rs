//! Query compiler.
//!
//! Compiles a provider-native [`QueryNode`] tree into a tantivy query. Phrase
//! text is run through the analyzer of the target field, so a phrase query
//! matches exactly what the field's indexing produced.

use shdict_model::{EntryField, QueryNode};
use tantivy::{
    Term,
    query::{AllQuery, BooleanQuery, EmptyQuery, Occur, PhraseQuery, Query, TermQuery},
    schema::IndexRecordOption,
};

use crate::{
    analyzer::{Analyzers, tokenize},
    schema::IndexSchema,
};

/// Compiles query trees into tantivy queries.
#[derive(Clone)]
pub struct QueryCompiler {
    /// Index schema for field references.
    schema: IndexSchema,
    /// Analyzers used to tokenize phrase text.
    analyzers: Analyzers,
}

impl QueryCompiler {
    /// Creates a new query compiler.
    pub fn new(schema: IndexSchema, analyzers: Analyzers) -> Self {
        Self { schema, analyzers }
    }

    /// Compiles a query tree.
    ///
    /// Phrases that analyze to no tokens match nothing. An empty conjunction
    /// matches everything, an empty disjunction nothing.
    pub fn compile(&self, node: &QueryNode) -> Box<dyn Query> {
        match node {
            QueryNode::MatchAll => Box::new(AllQuery),
            QueryNode::Phrase { field, text } => self.compile_phrase(*field, text),
            QueryNode::Term { field, value } => self.compile_term(*field, value),
            QueryNode::And(nodes) => {
                if nodes.is_empty() {
                    return Box::new(AllQuery);
                }
                self.compile_boolean(nodes, Occur::Must)
            }
            QueryNode::Or(nodes) => {
                if nodes.is_empty() {
                    return Box::new(EmptyQuery);
                }
                self.compile_boolean(nodes, Occur::Should)
            }
        }
    }

    /// Compiles child nodes into one boolean query with the same occurrence.
    fn compile_boolean(&self, nodes: &[QueryNode], occur: Occur) -> Box<dyn Query> {
        let clauses: Vec<(Occur, Box<dyn Query>)> =
            nodes.iter().map(|n| (occur, self.compile(n))).collect();
        Box::new(BooleanQuery::new(clauses))
    }

    /// Compiles an exact match against the unanalyzed value.
    fn compile_term(&self, field: EntryField, value: &str) -> Box<dyn Query> {
        let term = Term::from_field_text(self.schema.field(field), value);
        Box::new(TermQuery::new(term, IndexRecordOption::Basic))
    }

    /// Compiles a phrase: one token becomes a term query, more a phrase query.
    fn compile_phrase(&self, field: EntryField, text: &str) -> Box<dyn Query> {
        let Some(analyzer) = self.analyzers.get(IndexSchema::tokenizer(field)) else {
            // Raw fields are matched as a whole
            return self.compile_term(field, text);
        };

        let tantivy_field = self.schema.field(field);
        let terms: Vec<Term> = tokenize(analyzer, text)
            .iter()
            .map(|t| Term::from_field_text(tantivy_field, t))
            .collect();

        match terms.len() {
            0 => Box::new(EmptyQuery),
            1 => Box::new(TermQuery::new(
                terms[0].clone(),
                IndexRecordOption::WithFreqs,
            )),
            _ => Box::new(PhraseQuery::new(terms)),
        }
    }
}
