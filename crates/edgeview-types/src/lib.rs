pub mod error;
pub mod kind;
pub mod record;
pub mod summary;

pub use error::UsageError;
pub use kind::{KindSelector, ResourceKind};
pub use record::{ResourceRecord, namespace_of};
pub use summary::WorkloadSummary;
