use edgeview_engine::DecodeError;
use edgeview_types::UsageError;
use thiserror::Error;

/// Result type for edgeview CLI operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad command input; nothing was read
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Store could not be opened or queried
    #[error(transparent)]
    Store(#[from] edgeview_index::Error),

    /// A record does not have the shape the selected output needs
    #[error("rendering failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}
