//! Error types for catalog synchronization.

use thiserror::Error;

/// Errors that can occur during catalog sync operations.
#[derive(Error, Debug)]
pub enum SyncError {
  #[error("Fetch error: {0}")]
  Fetch(#[from] ck_core::Error),

  #[error("Storage error: {0}")]
  Storage(String),

  #[error("State storage error: {0}")]
  State(String),

  #[error("Bundle resource error: {0}")]
  Bundle(String),

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
