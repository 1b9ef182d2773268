//! The signed JSON envelope.
//!
//! Wire shape, matching the mirror's `/signed-request` endpoint:
//!
//! ```json
//! { "request": "<json-string>", "signature": [183, 12, 4] }
//! ```
//!
//! The signature covers the exact bytes of `request` with no digest, so the
//! mirror verifies the very string it is about to parse. The request itself
//! stays plaintext — only the response comes back encrypted.

use serde::{Deserialize, Serialize};

use mirror_codec::{sign_raw, verify_raw, AsymmetricKey};

use crate::error::Result;

/// A plaintext request together with a detached raw signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    /// The JSON request, passed through as a string.
    pub request: String,

    /// Raw signature over the request bytes; exactly `key_size` bytes.
    pub signature: Vec<u8>,
}

impl SignedEnvelope {
    /// Sign `request` with the client's private key and wrap both.
    ///
    /// # Errors
    ///
    /// `SigningFailure` from the codec when the key holds no private
    /// material or the request is too long for one raw signature.
    pub fn seal(request: &str, key: &AsymmetricKey) -> Result<Self> {
        let signature = sign_raw(key, request.as_bytes())?;
        Ok(Self {
            request: request.to_owned(),
            signature,
        })
    }

    /// Verify the signature over the request bytes.
    ///
    /// # Errors
    ///
    /// `SignatureMismatch` from the codec if the envelope was altered.
    pub fn verify(&self, key: &AsymmetricKey) -> Result<()> {
        verify_raw(key, self.request.as_bytes(), &self.signature)?;
        Ok(())
    }

    /// Serialize to the JSON wire form.
    ///
    /// # Errors
    ///
    /// `Json` if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse from the JSON wire form.
    ///
    /// # Errors
    ///
    /// `Json` if the bytes are not a well-formed envelope.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
