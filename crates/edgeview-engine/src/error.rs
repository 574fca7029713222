use thiserror::Error;

/// A record's payload does not have the shape a render path needs.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Required field missing or of the wrong type
    #[error("failed to decode {key}: {source}")]
    Payload {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Payload parsed, but is not a JSON object
    #[error("failed to decode {key}: payload is not a JSON object")]
    NotAnObject { key: String },

    /// `restartCount` is not a whole, non-negative number
    #[error("failed to decode {key}: restartCount {value} is not a valid count")]
    RestartCount { key: String, value: String },

    /// Restart counts of one pod add up past `u64::MAX`
    #[error("failed to decode {key}: total restartCount overflows")]
    RestartOverflow { key: String },
}

impl DecodeError {
    /// Key of the offending record.
    pub fn key(&self) -> &str {
        match self {
            DecodeError::Payload { key, .. }
            | DecodeError::NotAnObject { key }
            | DecodeError::RestartCount { key, .. }
            | DecodeError::RestartOverflow { key } => key,
        }
    }
}
