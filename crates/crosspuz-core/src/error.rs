//! Error types for puzzle normalization and encoding

use thiserror::Error;

/// Error type for puzzle fetch, parse, and assembly operations
///
/// The first three variants form the user-facing taxonomy: authentication
/// preconditions, payloads stripped by the provider for expired sessions,
/// and lookups for dates with no published puzzle. `Invariant` marks an
/// adapter defect caught at assembly; it is never expected in normal
/// operation and indicates a bug, not bad input.
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// No usable session credential
    #[error("Authentication required: {0}")]
    Authentication(String),

    /// Schema-valid payload without the expected puzzle-data block
    ///
    /// The provider returns stripped-down payloads to unauthenticated or
    /// expired sessions, so this is recoverable by re-authenticating and
    /// retrying. The core never retries on its own.
    #[error("Puzzle data unavailable: {0}")]
    DataUnavailable(String),

    /// No puzzle exists for the requested date or id
    #[error("Puzzle not found: {0}")]
    PuzzleNotFound(String),

    /// Internal invariant violated during puzzle assembly
    #[error("Internal invariant violated: {0}")]
    Invariant(String),

    /// JSON decoding error
    #[error("Failed to decode puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error from the fetch layer
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Result type alias for puzzle operations
pub type Result<T> = std::result::Result<T, PuzzleError>;
