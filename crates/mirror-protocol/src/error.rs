//! Error types for protocol operations.

use thiserror::Error;

/// Errors that can occur while framing requests or decoding responses.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Codec error.
    #[error("Codec error: {0}")]
    Codec(#[from] mirror_codec::CodecError),

    /// JSON serialization or parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Encrypted-body framing needs the mirror's public key.
    #[error("Encrypted-body framing requires the mirror's public key")]
    MirrorKeyRequired,

    /// The decrypted response is not valid UTF-8.
    #[error("Decrypted response is not valid UTF-8")]
    ResponseNotUtf8,
}

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
