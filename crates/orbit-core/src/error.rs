use thiserror::Error;

/// Failure to interpret a wire value (stored preference, command type or payload).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown {kind} value {value:?}")]
    UnknownValue { kind: &'static str, value: String },
    #[error("unknown command type {0:?}")]
    UnknownCommand(String),
    #[error("invalid payload for {command}: {reason}")]
    InvalidPayload {
        command: &'static str,
        reason: String,
    },
}

/// Failure reported by a [`crate::prefs::KeyValueStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}
