//! Conversion between entries and tantivy documents.
//!
//! Writing goes through [`Entry::flatten`], so the index stores exactly the
//! flat projection the provider hands back on document fetch.

use std::collections::BTreeMap;

use shdict_model::{Entry, EntryField, FieldShape, FieldValue, ProviderError, StoredField};
use tantivy::{
    TantivyDocument,
    schema::{Field, Value},
};

use crate::schema::{IndexSchema, pack_position, unpack_position};

/// Builds the tantivy document for an entry.
pub fn entry_document(schema: &IndexSchema, entry: &Entry) -> TantivyDocument {
    let mut doc = TantivyDocument::new();
    doc.add_text(schema.id, &entry.id);

    for stored in entry.flatten() {
        let Some(field) = EntryField::from_path(&stored.name) else {
            continue;
        };
        doc.add_text(schema.field(field), &stored.value);
        if let (Some(pos_field), &[group, i]) =
            (schema.positions(field), stored.positions.as_slice())
        {
            doc.add_u64(pos_field, pack_position(group, i));
        }
    }

    doc
}

/// Reads every stored text value of a field, in stored order.
fn texts(doc: &TantivyDocument, field: Field) -> Vec<String> {
    doc.get_all(field)
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// Reads the document key.
pub fn document_id(schema: &IndexSchema, doc: &TantivyDocument) -> Option<String> {
    doc.get_first(schema.id)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Loads the requested stored fields of a hit.
///
/// Fields without any stored value are left out of the map.
pub fn hit_fields(
    schema: &IndexSchema,
    doc: &TantivyDocument,
    fields: &[EntryField],
) -> BTreeMap<String, FieldValue> {
    fields
        .iter()
        .filter_map(|&field| {
            let values = texts(doc, schema.field(field));
            (!values.is_empty())
                .then(|| (field.path().to_string(), FieldValue::from_values(values)))
        })
        .collect()
}

/// Expands a stored document into its flat fields with array positions.
pub fn stored_fields(
    schema: &IndexSchema,
    id: &str,
    doc: &TantivyDocument,
) -> Result<Vec<StoredField>, ProviderError> {
    let mut out = Vec::new();

    for field in EntryField::ALL {
        let values = texts(doc, schema.field(field));
        match field.shape() {
            FieldShape::Scalar => {
                out.extend(values.into_iter().map(|v| StoredField::scalar(field, v)));
            }
            FieldShape::List => {
                out.extend(
                    values
                        .into_iter()
                        .enumerate()
                        .map(|(i, v)| StoredField::new(field, v, vec![i])),
                );
            }
            FieldShape::Grouped => {
                let positions: Vec<u64> = schema
                    .positions(field)
                    .map(|pf| doc.get_all(pf).filter_map(|v| v.as_u64()).collect())
                    .unwrap_or_default();
                if positions.len() != values.len() {
                    return Err(ProviderError::Document {
                        id: id.to_string(),
                        message: format!(
                            "{field} has {} values but {} positions",
                            values.len(),
                            positions.len()
                        ),
                    });
                }
                out.extend(
                    values
                        .into_iter()
                        .zip(positions)
                        .map(|(v, p)| StoredField::new(field, v, unpack_position(p).to_vec())),
                );
            }
        }
    }

    Ok(out)
}
