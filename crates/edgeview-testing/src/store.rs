use anyhow::Result;
use edgeview_index::Database;
use edgeview_types::ResourceRecord;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An `edgecore.db` in its own temp dir.
///
/// The file exists (with an empty `meta` table) as soon as the store is
/// created; the temp dir is removed on drop.
pub struct TestStore {
    _temp_dir: TempDir,
    db_path: PathBuf,
}

impl TestStore {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let db_path = temp_dir.path().join("edgecore.db");
        Database::create(&db_path)?;

        Ok(Self {
            _temp_dir: temp_dir,
            db_path,
        })
    }

    pub fn with_records(records: &[ResourceRecord]) -> Result<Self> {
        let store = Self::new()?;
        store.insert_all(records)?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    pub fn insert_all(&self, records: &[ResourceRecord]) -> Result<()> {
        let db = Database::create(&self.db_path)?;
        for record in records {
            db.insert(record)?;
        }
        Ok(())
    }

    /// Path next to the store that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.db_path.with_file_name("missing.db")
    }
}
