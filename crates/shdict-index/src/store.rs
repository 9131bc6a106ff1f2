//! Opening and creating entry indexes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tantivy::{Index, directory::MmapDirectory};

use crate::{
    IndexError, analyzer::Analyzers, provider::TantivyProvider, schema::IndexSchema,
    writer::EntryWriter,
};

/// An entry index with its schema and analyzers registered.
///
/// Hands out a writer for imports and a provider for lookups. Both share the
/// same underlying tantivy index.
pub struct EntryIndex {
    /// The tantivy index.
    index: Index,
    /// Schema with field handles.
    schema: IndexSchema,
    /// Analyzers registered on the index.
    analyzers: Analyzers,
}

impl EntryIndex {
    /// Opens an existing index.
    pub fn open(path: &Path) -> Result<Self, IndexError> {
        if !index_exists(path) {
            return Err(IndexError::OpenIndex {
                path: path.to_path_buf(),
                message: "index directory does not exist".to_string(),
            });
        }

        let dir = mmap_directory(path)?;
        let index = Index::open(dir).map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;
        Self::from_index(index)
    }

    /// Opens the index at `path`, creating the directory and an empty index if needed.
    pub fn create(path: &Path) -> Result<Self, IndexError> {
        fs::create_dir_all(path)?;

        let schema = IndexSchema::new();
        let dir = mmap_directory(path)?;
        let index = Index::open_or_create(dir, schema.schema().clone())
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;
        Self::from_index(index)
    }

    /// Creates an empty in-memory index.
    pub fn in_ram() -> Result<Self, IndexError> {
        let schema = IndexSchema::new();
        Self::from_index(Index::create_in_ram(schema.schema().clone()))
    }

    /// Wraps a tantivy index and registers the analyzers.
    fn from_index(index: Index) -> Result<Self, IndexError> {
        let analyzers = Analyzers::new()?;
        analyzers.register(&index);
        Ok(Self {
            index,
            schema: IndexSchema::new(),
            analyzers,
        })
    }

    /// Creates a writer for this index.
    pub fn writer(&self) -> Result<EntryWriter, IndexError> {
        EntryWriter::new(&self.index, self.schema.clone())
    }

    /// Creates a search provider over the committed state of this index.
    pub fn provider(&self) -> Result<TantivyProvider, IndexError> {
        TantivyProvider::new(&self.index, self.schema.clone(), self.analyzers.clone())
    }
}

/// Opens a memory-mapped tantivy directory.
fn mmap_directory(path: &Path) -> Result<MmapDirectory, IndexError> {
    MmapDirectory::open(path).map_err(|e| {
        let err: tantivy::TantivyError = e.into();
        IndexError::open_index(path.to_path_buf(), &err)
    })
}

/// Returns true if a tantivy index exists in the directory.
pub fn index_exists(index_dir: &Path) -> bool {
    index_dir.join("meta.json").exists()
}

/// Removes an index directory so it can be rebuilt from scratch.
///
/// Returns the removed path, or `None` if nothing was there.
pub fn remove_index(index_dir: &Path) -> Result<Option<PathBuf>, IndexError> {
    if !index_dir.exists() {
        return Ok(None);
    }
    fs::remove_dir_all(index_dir)?;
    Ok(Some(index_dir.to_path_buf()))
}

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn open_missing_index_fails() {
        let temp = TempDir::new().unwrap();
        let err = match EntryIndex::open(&temp.path().join("nope")) {
            Err(e) => e,
            Ok(_) => panic!("expected error"),
        };
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn create_then_exists() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("idx");
        assert!(!index_exists(&dir));

        EntryIndex::create(&dir).unwrap();

        assert!(index_exists(&dir));
        assert!(EntryIndex::open(&dir).is_ok());
    }

    #[test]
    fn remove_index_deletes_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("idx");
        EntryIndex::create(&dir).unwrap();

        assert_eq!(remove_index(&dir).unwrap(), Some(dir.clone()));
        assert!(!dir.exists());
        assert_eq!(remove_index(&dir).unwrap(), None);
    }
}
