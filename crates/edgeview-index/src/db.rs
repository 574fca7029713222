use edgeview_types::{KindSelector, ResourceRecord};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use crate::queries::meta;
use crate::{Error, RecordStore, Result, schema};

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an existing edge store read-only.
    ///
    /// Never creates the file and never touches the schema.
    pub fn open(db_path: &Path) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(db_path, flags).map_err(|source| Error::Open {
            path: db_path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %db_path.display(), "opened edge store");
        Ok(Self { conn })
    }

    /// Writable in-memory store with the edge agent's layout, for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Create (or reuse) a writable store file with the edge agent's layout.
    ///
    /// Used by fixtures to seed stores the CLI then opens read-only.
    pub fn create(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path).map_err(|source| Error::Open {
            path: db_path.to_path_buf(),
            source,
        })?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn insert(&self, record: &ResourceRecord) -> Result<()> {
        meta::insert(&self.conn, record)
    }
}

impl RecordStore for Database {
    fn fetch_all(&self, selector: KindSelector) -> Result<Vec<ResourceRecord>> {
        let records = match selector {
            KindSelector::All => meta::list_all(&self.conn)?,
            KindSelector::Kind(kind) => meta::list_by_kind(&self.conn, kind)?,
        };
        tracing::debug!(selector = %selector, count = records.len(), "fetched records");
        Ok(records)
    }
}
