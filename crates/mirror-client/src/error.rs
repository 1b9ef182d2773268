//! Error types for client operations.

use thiserror::Error;

/// Errors surfaced by the mirror client.
///
/// The three transport outcomes stay distinguishable: a connection
/// failure, a timeout, and a non-success HTTP status are different
/// variants, never collapsed into one.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Codec error.
    #[error("Codec error: {0}")]
    Codec(#[from] mirror_codec::CodecError),

    /// Protocol error.
    #[error("Protocol error: {0}")]
    Protocol(#[from] mirror_protocol::ProtocolError),

    /// Invalid configuration value.
    #[error("Invalid configuration: {field}: {reason}")]
    Configuration {
        /// The offending field.
        field: &'static str,
        /// Why it is invalid.
        reason: String,
    },

    /// Connecting to the mirror failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The request/response cycle exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The mirror answered with a non-200 status. The body is diagnostic
    /// text from the mirror, not a message to decrypt.
    #[error("Mirror returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body as text.
        body: String,
    },
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
