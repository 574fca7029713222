// Engine - pure transformations over fetched records
// Sits between the store adapter (index) and CLI presentation

pub mod distribute;
pub mod envelope;
pub mod error;
pub mod namespace;
pub mod summary;

pub use distribute::{Distribution, distribute};
pub use envelope::build_list;
pub use error::DecodeError;
pub use namespace::{NamespaceScope, filter};
pub use summary::summarize;
