//! Error types for session operations.

use thiserror::Error;

/// Alias for `Result<T, SessionError>`.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A catalog lookup failed.
    #[error(transparent)]
    Core(#[from] iv_core::CoreError),

    /// A progression operation failed.
    #[error(transparent)]
    Mech(#[from] iv_mechanics::MechError),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
