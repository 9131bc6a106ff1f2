//! Index writer for adding entries to the tantivy index.

use shdict_model::Entry;
use tantivy::{Index, IndexWriter as TantivyIndexWriter, Term};

use crate::{document::entry_document, error::IndexError, schema::IndexSchema};

/// Default heap size for the index writer (50 MB).
const DEFAULT_HEAP_SIZE: usize = 50_000_000;

/// Writes entries to a tantivy index.
///
/// Entries are keyed by id: adding an entry replaces any earlier entry with the
/// same id once committed.
pub struct EntryWriter {
    /// The tantivy index.
    index: Index,
    /// The underlying tantivy writer.
    writer: TantivyIndexWriter,
    /// Schema with field handles.
    schema: IndexSchema,
}

impl EntryWriter {
    /// Creates a writer on an opened index.
    pub(crate) fn new(index: &Index, schema: IndexSchema) -> Result<Self, IndexError> {
        let writer = index
            .writer(DEFAULT_HEAP_SIZE)
            .map_err(|e| IndexError::write(&e))?;
        Ok(Self {
            index: index.clone(),
            writer,
            schema,
        })
    }

    /// Adds an entry, replacing any entry with the same id.
    ///
    /// The entry is staged for writing but not visible until [`Self::commit`] is called.
    pub fn add_entry(&mut self, entry: &Entry) -> Result<(), IndexError> {
        self.writer
            .delete_term(Term::from_field_text(self.schema.id, &entry.id));
        self.writer
            .add_document(entry_document(&self.schema, entry))
            .map_err(|e| IndexError::write(&e))?;
        Ok(())
    }

    /// Adds multiple entries, later duplicates replacing earlier ones.
    pub fn add_entries(&mut self, entries: &[Entry]) -> Result<(), IndexError> {
        for entry in entries {
            self.add_entry(entry)?;
        }
        Ok(())
    }

    /// Commits all pending changes to the index.
    pub fn commit(&mut self) -> Result<(), IndexError> {
        self.writer.commit().map_err(|e| IndexError::commit(&e))?;
        Ok(())
    }

    /// Rolls back any uncommitted changes.
    pub fn rollback(&mut self) -> Result<(), IndexError> {
        self.writer.rollback().map_err(|e| IndexError::commit(&e))?;
        Ok(())
    }

    /// Deletes all entries from the index.
    pub fn delete_all(&mut self) -> Result<(), IndexError> {
        self.writer
            .delete_all_documents()
            .map_err(|e| IndexError::write(&e))?;
        Ok(())
    }

    /// Returns the number of committed entries.
    pub fn num_docs(&self) -> Result<u64, IndexError> {
        let reader = self.index.reader().map_err(|e| IndexError::read(&e))?;
        Ok(reader.searcher().num_docs())
    }
}

#[cfg(test)]
mod test {
    use shdict_model::Definition;
    use tempfile::TempDir;

    use super::*;
    use crate::EntryIndex;

    fn entry(source: &str, word: &str, reading: &str) -> Entry {
        Entry::new(
            source,
            word,
            vec![],
            vec![Definition::new(vec![reading.into()], vec!["test".into()])],
        )
    }

    #[test]
    fn creates_index_in_empty_directory() {
        let temp = TempDir::new().unwrap();
        let index = EntryIndex::create(temp.path()).unwrap();
        drop(index.writer().unwrap());

        assert!(temp.path().join("meta.json").exists());
    }

    #[test]
    fn adds_and_commits_entries() {
        let index = EntryIndex::in_ram().unwrap();
        let mut writer = index.writer().unwrap();

        writer
            .add_entries(&[entry("c", "好", "hao"), entry("r", "好", "ho")])
            .unwrap();
        writer.commit().unwrap();

        assert_eq!(writer.num_docs().unwrap(), 2);
    }

    #[test]
    fn same_id_replaces_entry() {
        let index = EntryIndex::in_ram().unwrap();
        let mut writer = index.writer().unwrap();

        writer.add_entry(&entry("c", "好", "hao")).unwrap();
        writer.add_entry(&entry("c", "好", "ho")).unwrap();
        writer.commit().unwrap();

        assert_eq!(writer.num_docs().unwrap(), 1);
    }

    #[test]
    fn reopens_existing_index() {
        let temp = TempDir::new().unwrap();
        {
            let index = EntryIndex::create(temp.path()).unwrap();
            let mut writer = index.writer().unwrap();
            writer.add_entry(&entry("c", "好", "hao")).unwrap();
            writer.commit().unwrap();
        }

        let index = EntryIndex::open(temp.path()).unwrap();
        assert_eq!(index.writer().unwrap().num_docs().unwrap(), 1);
    }

    #[test]
    fn delete_all_removes_entries() {
        let index = EntryIndex::in_ram().unwrap();
        let mut writer = index.writer().unwrap();
        writer.add_entry(&entry("c", "好", "hao")).unwrap();
        writer.commit().unwrap();

        writer.delete_all().unwrap();
        writer.commit().unwrap();

        assert_eq!(writer.num_docs().unwrap(), 0);
    }

    #[test]
    fn rollback_discards_uncommitted_changes() {
        let index = EntryIndex::in_ram().unwrap();
        let mut writer = index.writer().unwrap();

        writer.add_entry(&entry("c", "好", "hao")).unwrap();
        writer.rollback().unwrap();
        writer.commit().unwrap();

        assert_eq!(writer.num_docs().unwrap(), 0);
    }
}
