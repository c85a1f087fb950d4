//! Error types for boothkit-common

use thiserror::Error;

/// Common error type used across boothkit crates
#[derive(Error, Debug)]
pub enum Error {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The fetched body parsed as JSON but is not an object
    #[error("content document must be a JSON object")]
    NotAnObject,

    /// A section key that is not part of the registry
    #[error("unknown section key: {0}")]
    UnknownSection(String),
}

/// Result type alias using the common Error
pub type Result<T> = std::result::Result<T, Error>;
