//! Error types for object decoding
//!
//! Every decode entry point fails fast with one of the kinds below; there is
//! no partial decode of a single object. Layers above decide whether a failed
//! decode is fatal or recoverable; this layer never retries or suppresses.

use thiserror::Error;

/// Result type for object decoding operations
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Error kinds surfaced by the object decoders
///
/// Messages name the offending field and, once known, the abbreviated object
/// ID, so repository corruption can be traced back to a concrete object.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// Byte width or hex-text mismatch when constructing an object ID
    #[error("Malformed object ID: {0}")]
    MalformedId(String),

    /// Missing or unparseable name, email, or timestamp in a signature
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Handle type mismatch, unrecognized entry tag, unreadable required
    /// field, or a length that cannot be represented on this platform
    #[error("Invalid object: {0}")]
    InvalidObject(String),
}
