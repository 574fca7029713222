use std::fmt;
use std::str::FromStr;

use crate::UsageError;

/// Resource kinds the edge node persists and that can be inspected offline.
///
/// The wire name (`pod`, `configmap`, ...) is the value of the `type`
/// column in the edge store and the `kind` stamped on rendered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Pod,
    Node,
    Service,
    Secret,
    ConfigMap,
    Endpoint,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Pod,
        ResourceKind::Node,
        ResourceKind::Service,
        ResourceKind::Secret,
        ResourceKind::ConfigMap,
        ResourceKind::Endpoint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Pod => "pod",
            ResourceKind::Node => "node",
            ResourceKind::Service => "service",
            ResourceKind::Secret => "secret",
            ResourceKind::ConfigMap => "configmap",
            ResourceKind::Endpoint => "endpoint",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UsageError::UnsupportedKind(s.to_string()))
    }
}

/// What a `get` invocation asks the store for.
///
/// `all` only ever appears here; it is never a stored kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindSelector {
    All,
    Kind(ResourceKind),
}

impl KindSelector {
    /// Accepted spellings, in help order.
    pub const VARIANTS: &'static [&'static str] = &[
        "all",
        "pod",
        "node",
        "service",
        "secret",
        "configmap",
        "endpoint",
    ];

    /// Resolve the positional arguments of `get` into a selector.
    ///
    /// Exactly one argument is accepted.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, UsageError> {
        match args {
            [single] => single.as_ref().parse(),
            _ => Err(UsageError::ArgumentCount(args.len())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KindSelector::All => "all",
            KindSelector::Kind(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for KindSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KindSelector {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(KindSelector::All)
        } else {
            s.parse().map(KindSelector::Kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_parse_is_case_sensitive() {
        assert!("Pod".parse::<ResourceKind>().is_err());
        assert!("configMap".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_all_is_a_selector_not_a_kind() {
        assert!("all".parse::<ResourceKind>().is_err());
        assert_eq!("all".parse::<KindSelector>().unwrap(), KindSelector::All);
    }

    #[test]
    fn test_selector_variants_cover_every_kind() {
        for kind in ResourceKind::ALL {
            assert!(KindSelector::VARIANTS.contains(&kind.as_str()));
        }
        assert_eq!(KindSelector::VARIANTS.len(), ResourceKind::ALL.len() + 1);
    }

    #[test]
    fn test_from_args_requires_exactly_one() {
        let none: [&str; 0] = [];
        assert_eq!(
            KindSelector::from_args(&none),
            Err(UsageError::ArgumentCount(0))
        );
        assert_eq!(
            KindSelector::from_args(&["pod", "node"]),
            Err(UsageError::ArgumentCount(2))
        );
        assert_eq!(
            KindSelector::from_args(&["service"]),
            Ok(KindSelector::Kind(ResourceKind::Service))
        );
    }

    #[test]
    fn test_from_args_rejects_unknown_kind() {
        let err = KindSelector::from_args(&["widget"]).unwrap_err();
        assert_eq!(err, UsageError::UnsupportedKind("widget".to_string()));
        assert!(err.to_string().contains("resource type widget is not available"));
    }
}
