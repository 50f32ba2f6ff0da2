//! Error types raised by repository implementations.

use planner_core::{ErrorSeverity, PlannerError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("loadout repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("storage quota exceeded: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { needed: usize, limit: usize },
}

impl PlannerError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) | Self::QuotaExceeded { .. } | Self::CorruptedData(_) => {
                ErrorSeverity::Recoverable
            }
            Self::LockPoisoned | Self::Json(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPO_LOCK_POISONED",
            Self::Io(_) => "REPO_IO",
            Self::Json(_) => "REPO_JSON",
            Self::CorruptedData(_) => "REPO_CORRUPTED",
            Self::QuotaExceeded { .. } => "REPO_QUOTA_EXCEEDED",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Decodes a persisted payload into raw records.
///
/// Anything other than a JSON array is reported as corrupted.
pub(crate) fn decode_payload(payload: &str) -> Result<Vec<serde_json::Value>> {
    match serde_json::from_str(payload) {
        Ok(serde_json::Value::Array(records)) => Ok(records),
        Ok(other) => Err(RepositoryError::CorruptedData(format!(
            "expected an array of loadouts, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(RepositoryError::CorruptedData(e.to_string())),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
