use crate::args::GetArgs;
use crate::types::OutputFormat;
use edgeview_engine::NamespaceScope;
use std::path::PathBuf;

/// Where edgecore keeps its metadata store.
pub const DEFAULT_DB_PATH: &str = "/var/lib/kubeedge/edgecore.db";

/// Overrides [`DEFAULT_DB_PATH`]; `--input` overrides both.
pub const DB_PATH_ENV: &str = "EDGECORE_DB_PATH";

/// Everything a `get` invocation needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub scope: NamespaceScope,
}

impl GetConfig {
    pub fn from_args(args: &GetArgs) -> Self {
        Self {
            input: resolve_input(&args.input),
            format: args.output,
            scope: NamespaceScope::from_flags(args.namespace.clone(), args.all_namespaces),
        }
    }
}

fn resolve_input(input: &str) -> PathBuf {
    if input.is_empty() {
        return PathBuf::from(DEFAULT_DB_PATH);
    }
    expand_tilde(input)
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str, namespace: &str, all_namespaces: bool) -> GetArgs {
        GetArgs {
            types: vec!["pod".to_string()],
            input: input.to_string(),
            output: OutputFormat::Table,
            namespace: namespace.to_string(),
            all_namespaces,
        }
    }

    #[test]
    fn test_scope_from_flags() {
        let config = GetConfig::from_args(&args("/tmp/e.db", "kube-system", false));
        assert_eq!(
            config.scope,
            NamespaceScope::Only("kube-system".to_string())
        );

        let config = GetConfig::from_args(&args("/tmp/e.db", "kube-system", true));
        assert_eq!(config.scope, NamespaceScope::All);
    }

    #[test]
    fn test_empty_input_falls_back_to_default() {
        let config = GetConfig::from_args(&args("", "default", false));
        assert_eq!(config.input, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn test_input_is_kept_verbatim() {
        let config = GetConfig::from_args(&args("/data/edgecore.db", "default", false));
        assert_eq!(config.input, PathBuf::from("/data/edgecore.db"));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/edge.db"), home.join("edge.db"));
        }
        assert_eq!(expand_tilde("relative.db"), PathBuf::from("relative.db"));
    }
}
