use edgeview_types::ResourceRecord;

/// Which namespaces a `get` invocation covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceScope {
    /// `--all-namespaces`: no filtering at all.
    All,
    /// Exact, case-sensitive match on the key's namespace component.
    Only(String),
}

impl NamespaceScope {
    pub fn from_flags(namespace: impl Into<String>, all_namespaces: bool) -> Self {
        if all_namespaces {
            NamespaceScope::All
        } else {
            NamespaceScope::Only(namespace.into())
        }
    }

    pub fn matches(&self, record: &ResourceRecord) -> bool {
        match self {
            NamespaceScope::All => true,
            NamespaceScope::Only(namespace) => record.namespace() == namespace,
        }
    }
}

/// Keep the records in scope, preserving their relative order.
///
/// `NamespaceScope::All` returns the input untouched.
pub fn filter(records: Vec<ResourceRecord>, scope: &NamespaceScope) -> Vec<ResourceRecord> {
    if let NamespaceScope::All = scope {
        return records;
    }

    let before = records.len();
    let kept: Vec<_> = records
        .into_iter()
        .filter(|record| scope.matches(record))
        .collect();
    tracing::debug!(before, after = kept.len(), scope = ?scope, "filtered by namespace");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ResourceRecord> {
        vec![
            ResourceRecord::new("default/pod/a", "pod", "{}"),
            ResourceRecord::new("kube-system/pod/b", "pod", "{}"),
            ResourceRecord::new("default/service/c", "service", "{}"),
            ResourceRecord::new("Default/pod/d", "pod", "{}"),
            ResourceRecord::new("edge-node-1", "node", "{}"),
        ]
    }

    #[test]
    fn test_all_namespaces_is_identity() {
        let input = records();
        for ns in ["default", "kube-system", "", "nope"] {
            let scope = NamespaceScope::from_flags(ns, true);
            assert_eq!(filter(input.clone(), &scope), input);
        }
    }

    #[test]
    fn test_filter_keeps_matching_in_order() {
        let scope = NamespaceScope::Only("default".to_string());
        let keys: Vec<_> = filter(records(), &scope)
            .into_iter()
            .map(|r| r.key)
            .collect();
        assert_eq!(keys, vec!["default/pod/a", "default/service/c"]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let scope = NamespaceScope::Only("Default".to_string());
        let kept = filter(records(), &scope);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].key, "Default/pod/d");
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        let scope = NamespaceScope::Only("monitoring".to_string());
        assert!(filter(records(), &scope).is_empty());
    }

    #[test]
    fn test_key_without_separator_has_empty_namespace() {
        let scope = NamespaceScope::Only("edge-node-1".to_string());
        assert!(filter(records(), &scope).is_empty());

        let scope = NamespaceScope::Only(String::new());
        let kept = filter(records(), &scope);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].key, "edge-node-1");
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(NamespaceScope::from_flags("x", true), NamespaceScope::All);
        assert_eq!(
            NamespaceScope::from_flags("x", false),
            NamespaceScope::Only("x".to_string())
        );
    }
}
