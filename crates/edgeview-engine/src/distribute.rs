use edgeview_types::{ResourceKind, ResourceRecord};
use std::collections::BTreeMap;

/// Records bucketed by kind. Every supported kind has a bucket, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    buckets: BTreeMap<ResourceKind, Vec<ResourceRecord>>,
}

impl Distribution {
    fn empty() -> Self {
        Self {
            buckets: ResourceKind::ALL
                .into_iter()
                .map(|kind| (kind, Vec::new()))
                .collect(),
        }
    }

    pub fn get(&self, kind: ResourceKind) -> &[ResourceRecord] {
        self.buckets.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Move one bucket out, leaving it empty.
    pub fn take(&mut self, kind: ResourceKind) -> Vec<ResourceRecord> {
        self.buckets
            .get_mut(&kind)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &[ResourceRecord])> {
        self.buckets
            .iter()
            .map(|(kind, records)| (*kind, records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition records by their own kind.
///
/// Records whose stored type is not a supported kind are dropped.
pub fn distribute(records: Vec<ResourceRecord>) -> Distribution {
    let mut distribution = Distribution::empty();

    for record in records {
        match record.resource_kind() {
            Some(kind) => distribution
                .buckets
                .entry(kind)
                .or_default()
                .push(record),
            None => {
                tracing::debug!(key = %record.key, kind = %record.kind, "dropping record of unknown kind")
            }
        }
    }

    distribution
}
