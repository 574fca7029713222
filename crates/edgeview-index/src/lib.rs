// Read-only view of the edge node metadata store
// Rows are returned as opaque records; payload decoding happens upstream

mod db;
mod error;
mod queries;
mod schema;
mod store;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use store::RecordStore;
