//! Error Types
//!
//! Failures from the browser seams (storage, downloads) and configuration.
//! User-facing problems are reported through `Prompt`, not through these.

use thiserror::Error;

/// Common result type for checklist operations
pub type ChecklistResult<T> = Result<T, ChecklistError>;

#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("browser storage is unavailable")]
    StorageUnavailable,
    #[error("storage operation failed: {0}")]
    Storage(String),
    #[error("snapshot could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("download failed: {0}")]
    Download(String),
}
