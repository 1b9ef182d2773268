//! RSA key handles for the mirror transport.
//!
//! A handle always carries a public key and may carry the matching private
//! key. With public material only it can encrypt and verify; with private
//! material it can also decrypt and sign. Key material is loaded once at
//! startup and passed explicitly into every codec call — nothing here is
//! global or mutable, so a handle is safe to share across any number of
//! concurrent operations.

use std::fmt;

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::{CodecError, Result};

/// An RSA key usable as a public key and, when private material is held,
/// for decryption and signing.
///
/// Private material (when present) is zeroized on drop by the underlying
/// `rsa` types.
#[derive(Clone)]
pub struct AsymmetricKey {
    public: RsaPublicKey,
    private: Option<RsaPrivateKey>,
}

impl AsymmetricKey {
    /// Wrap an existing public key.
    pub fn from_public_key(public: RsaPublicKey) -> Self {
        Self {
            public,
            private: None,
        }
    }

    /// Wrap an existing private key; the public half is derived from it.
    pub fn from_private_key(private: RsaPrivateKey) -> Self {
        Self {
            public: private.to_public_key(),
            private: Some(private),
        }
    }

    /// Parse a PEM-encoded public key.
    ///
    /// Accepts PKCS#8 (`PUBLIC KEY`) and PKCS#1 (`RSA PUBLIC KEY`) documents.
    ///
    /// # Errors
    ///
    /// Returns `KeyParse` if the text is neither.
    pub fn from_public_key_pem(pem: &str) -> Result<Self> {
        if let Ok(public) = RsaPublicKey::from_public_key_pem(pem) {
            return Ok(Self::from_public_key(public));
        }
        RsaPublicKey::from_pkcs1_pem(pem)
            .map(Self::from_public_key)
            .map_err(|err| CodecError::KeyParse(err.to_string()))
    }

    /// Parse an unencrypted PEM-encoded private key.
    ///
    /// Accepts PKCS#8 (`PRIVATE KEY`) and PKCS#1 (`RSA PRIVATE KEY`)
    /// documents. Passphrase-protected keys are not supported; the mirror
    /// deployments use unencrypted key files.
    ///
    /// # Errors
    ///
    /// Returns `KeyParse` if the text is neither.
    pub fn from_private_key_pem(pem: &str) -> Result<Self> {
        if let Ok(private) = RsaPrivateKey::from_pkcs8_pem(pem) {
            return Ok(Self::from_private_key(private));
        }
        RsaPrivateKey::from_pkcs1_pem(pem)
            .map(Self::from_private_key)
            .map_err(|err| CodecError::KeyParse(err.to_string()))
    }

    /// Modulus size in bytes.
    ///
    /// Encrypted chunks and raw signatures are exactly this long.
    pub fn key_size(&self) -> usize {
        self.public.size()
    }

    /// The public half.
    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }

    /// The private half, when held.
    pub fn private(&self) -> Option<&RsaPrivateKey> {
        self.private.as_ref()
    }

    /// Whether this handle can decrypt and sign.
    pub fn has_private(&self) -> bool {
        self.private.is_some()
    }
}

impl fmt::Debug for AsymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsymmetricKey")
            .field("key_size", &self.key_size())
            .field(
                "private",
                &if self.has_private() { "[REDACTED]" } else { "none" },
            )
            .finish()
    }
}
