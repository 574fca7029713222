use std::path::PathBuf;
use thiserror::Error;

/// Result type for edgeview-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// The store could not be opened or queried.
#[derive(Debug, Error)]
pub enum Error {
    /// The database file is missing or unreadable
    #[error("failed to open edge store {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query against an opened store failed
    #[error("{}", query_message(.0))]
    Query(#[from] rusqlite::Error),
}

fn query_message(err: &rusqlite::Error) -> String {
    let msg = err.to_string();
    // A valid SQLite file that the edge agent never initialised
    if msg.contains("no such table") || msg.contains("no such column") {
        format!(
            "edge store schema mismatch: {}. Is --input pointing at an edgecore database?",
            msg
        )
    } else {
        format!("edge store query failed: {}", msg)
    }
}
