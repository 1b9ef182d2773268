//! Error types for codec operations.

use thiserror::Error;

/// Errors that can occur during codec operations.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The loaded key produced ciphertext chunks of an unexpected size.
    ///
    /// Raised by the startup self-test; the deployment expects a specific
    /// modulus size and a mismatched key must fail before any network call.
    #[error("Unexpected key size: expected {expected}-byte chunks, got {actual}")]
    UnexpectedKeySize {
        /// Chunk size the deployment expects.
        expected: usize,
        /// Chunk size the key actually produced.
        actual: usize,
    },

    /// The key modulus is too small for the padding scheme.
    #[error("Invalid key size: modulus is {key_size} bytes but the scheme overhead is {overhead}")]
    InvalidKeySize {
        /// Modulus size in bytes.
        key_size: usize,
        /// Padding overhead in bytes.
        overhead: usize,
    },

    /// Encrypting one chunk failed.
    #[error("Encryption failed at chunk {chunk}")]
    EncryptionFailure {
        /// Zero-based index of the failing chunk.
        chunk: usize,
        /// Underlying cipher error.
        #[source]
        source: rsa::Error,
    },

    /// Decrypting one chunk failed: wrong key, corrupted chunk, or scheme
    /// mismatch. Padding validation gives no finer signal than this.
    #[error("Decryption failed at chunk {chunk}: invalid padding")]
    DecryptionFailure {
        /// Zero-based index of the failing chunk.
        chunk: usize,
    },

    /// Ciphertext length is not a multiple of the key modulus size.
    #[error("Malformed ciphertext: {len} bytes is not a multiple of the {key_size}-byte modulus")]
    MalformedCiphertext {
        /// Ciphertext length in bytes.
        len: usize,
        /// Modulus size in bytes.
        key_size: usize,
    },

    /// The operation needs private key material the handle does not hold.
    #[error("Private key required for {0}")]
    PrivateKeyRequired(&'static str),

    /// Signing failed.
    #[error("Signing failed: {0}")]
    SigningFailure(String),

    /// Signature verification failed.
    #[error("Signature verification failed")]
    SignatureMismatch,

    /// Key material could not be parsed.
    #[error("Invalid key material: {0}")]
    KeyParse(String),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
