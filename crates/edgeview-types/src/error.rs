use thiserror::Error;

/// Invalid command input, detected before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// The `get` command takes exactly one resource type.
    #[error(
        "need to specify exactly one type of resource, got {0} (e.g. `edgeview get pod`)"
    )]
    ArgumentCount(usize),

    /// The resource type is outside the supported set.
    #[error("resource type {0} is not available (expected one of: {list})", list = crate::KindSelector::VARIANTS.join(", "))]
    UnsupportedKind(String),
}
