use crate::ResourceKind;

/// One resource snapshot as persisted by the edge agent.
///
/// The payload is kept as the raw JSON text; each render path decodes only
/// what it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// `<namespace>/<name>`
    pub key: String,
    /// Stored type column. Usually a [`ResourceKind`] wire name, but not
    /// guaranteed: the store is written by another process.
    pub kind: String,
    /// Serialized object, shape depends on `kind`.
    pub payload: String,
}

impl ResourceRecord {
    pub fn new(key: impl Into<String>, kind: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        namespace_of(&self.key)
    }

    /// `None` when the stored type is not one of the supported kinds.
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        self.kind.parse().ok()
    }
}

/// Namespace component of a record key: everything before the first `/`.
///
/// A key without a separator has no namespace and yields `""`.
pub fn namespace_of(key: &str) -> &str {
    key.split_once('/').map(|(ns, _)| ns).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_of() {
        assert_eq!(namespace_of("default/foo"), "default");
        assert_eq!(namespace_of("kube-system/bar"), "kube-system");
    }

    #[test]
    fn test_namespace_of_splits_on_first_separator() {
        assert_eq!(namespace_of("default/foo/bar"), "default");
        assert_eq!(namespace_of("/orphan"), "");
    }

    #[test]
    fn test_namespace_of_key_without_separator() {
        assert_eq!(namespace_of("edge-node-1"), "");
    }

    #[test]
    fn test_resource_kind_of_unknown_type() {
        let record = ResourceRecord::new("default/x", "podstatus", "{}");
        assert_eq!(record.resource_kind(), None);

        let record = ResourceRecord::new("default/x", "configmap", "{}");
        assert_eq!(record.resource_kind(), Some(ResourceKind::ConfigMap));
    }
}
