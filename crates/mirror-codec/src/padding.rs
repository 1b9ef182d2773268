//! Padding scheme selection and per-chunk overhead.
//!
//! The mirror transport supports two RSA padding schemes. The scheme is a
//! protocol-level agreement between client and mirror, fixed per
//! deployment: it is threaded explicitly through every call and never
//! inferred from the data, and the same scheme must be used to encrypt and
//! decrypt one message.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// SHA-256 output size in bytes, fixing the OAEP overhead.
const SHA256_SIZE: usize = 32;

/// RSA padding schemes supported by the mirror transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddingScheme {
    /// Legacy PKCS#1 v1.5 encryption padding, 11 bytes of overhead per chunk.
    Pkcs1V15,

    /// OAEP with SHA-256, `2 + 2 * 32 = 66` bytes of overhead per chunk.
    OaepSha256,
}

impl PaddingScheme {
    /// Bytes the padding consumes inside each encrypted chunk.
    pub fn overhead(&self) -> usize {
        match self {
            PaddingScheme::Pkcs1V15 => 11,
            PaddingScheme::OaepSha256 => 2 + 2 * SHA256_SIZE,
        }
    }

    /// Largest plaintext chunk that fits one RSA operation under this scheme.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeySize` if the modulus is not larger than the
    /// padding overhead.
    pub fn max_chunk_size(&self, key_size: usize) -> Result<usize> {
        let overhead = self.overhead();
        if key_size <= overhead {
            return Err(CodecError::InvalidKeySize { key_size, overhead });
        }
        Ok(key_size - overhead)
    }
}

impl fmt::Display for PaddingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaddingScheme::Pkcs1V15 => write!(f, "PKCS#1 v1.5"),
            PaddingScheme::OaepSha256 => write!(f, "OAEP-SHA256"),
        }
    }
}
