//! Folding flat stored fields back into entries.
//!
//! A provider hands back a document as a bag of `(name, value, positions)`
//! triples in no particular order. Grouped fields carry `[group, i]` and land
//! in definition `group` at element `i`; list fields carry `[i]`; scalars
//! carry nothing and overwrite.

use shdict_model::{Definition, Entry, EntryField, FieldShape, SearchProvider, StoredField};

use crate::LookupError;

/// Fetches and rebuilds the entries for `ids`, in the order given.
///
/// Fails on the first id that cannot be fetched or folded; no partial
/// results are returned.
pub fn reconstruct<P: SearchProvider + ?Sized>(
    provider: &P,
    ids: &[String],
) -> Result<Vec<Entry>, LookupError> {
    ids.iter()
        .map(|id| {
            let fields = provider
                .document(id)?
                .ok_or_else(|| LookupError::MissingDocument { id: id.clone() })?;
            fold(id, &fields)
        })
        .collect()
}

/// Places `value` at `index`, padding with empty strings.
fn place(list: &mut Vec<String>, index: usize, value: &str) {
    if list.len() <= index {
        list.resize(index + 1, String::new());
    }
    list[index] = value.to_string();
}

/// Folds one document's stored fields into an entry.
pub fn fold(id: &str, fields: &[StoredField]) -> Result<Entry, LookupError> {
    let mut entry = Entry {
        id: id.to_string(),
        ..Entry::default()
    };

    for stored in fields {
        let Some(field) = EntryField::from_path(&stored.name) else {
            continue;
        };
        let value = stored.value.as_str();

        match (field.shape(), stored.positions.as_slice()) {
            (FieldShape::Scalar, _) => match field {
                EntryField::Source => entry.source = value.to_string(),
                _ => entry.word = value.to_string(),
            },
            (FieldShape::List, &[i, ..]) => place(&mut entry.alternate_forms, i, value),
            (FieldShape::List, []) => entry.alternate_forms.push(value.to_string()),
            (FieldShape::Grouped, &[group, i, ..]) => {
                if entry.definitions.len() <= group {
                    entry.definitions.resize_with(group + 1, Definition::default);
                }
                let def = &mut entry.definitions[group];
                let list = match field {
                    EntryField::Readings => &mut def.readings,
                    EntryField::ReadingsNoDiacritics => &mut def.readings_no_diacritics,
                    _ => &mut def.meanings,
                };
                place(list, i, value);
            }
            (FieldShape::Grouped, _) => {
                return Err(LookupError::MalformedDocument {
                    id: id.to_string(),
                    message: format!(
                        "{field} value {value:?} has positions {:?}, expected [group, i]",
                        stored.positions
                    ),
                });
            }
        }
    }

    Ok(entry)
}
