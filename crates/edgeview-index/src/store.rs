use edgeview_types::{KindSelector, ResourceRecord};

use crate::Result;

/// Bulk read access to persisted resource snapshots.
///
/// One call per invocation; implementations return the full result or an
/// error, never a partial list.
pub trait RecordStore {
    fn fetch_all(&self, selector: KindSelector) -> Result<Vec<ResourceRecord>>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn fetch_all(&self, selector: KindSelector) -> Result<Vec<ResourceRecord>> {
        (**self).fetch_all(selector)
    }
}
