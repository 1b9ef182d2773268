//! Raw RSA signing with no message digest.
//!
//! The mirror protocol signs the exact request bytes: the signature is a
//! PKCS#1 v1.5 operation applied directly to the buffer, with no hash and
//! no `DigestInfo` prefix. The mirror verifies the very bytes it received,
//! and a caller that pre-hashes produces a signature the mirror rejects —
//! hence the `_raw` names.
//!
//! The padding limits signable buffers to `key_size - 11` bytes.

use rsa::Pkcs1v15Sign;

use crate::error::{CodecError, Result};
use crate::keys::AsymmetricKey;

/// Sign a buffer directly, with no digest.
///
/// Returns a detached signature of exactly `key_size` bytes.
///
/// # Errors
///
/// Returns `SigningFailure` when the handle holds no private key, or when
/// the buffer does not fit the modulus (longer than `key_size - 11`).
pub fn sign_raw(key: &AsymmetricKey, buffer: &[u8]) -> Result<Vec<u8>> {
    let private = key
        .private()
        .ok_or_else(|| CodecError::SigningFailure("private key required".into()))?;

    let signature = private
        .sign(Pkcs1v15Sign::new_unprefixed(), buffer)
        .map_err(|err| CodecError::SigningFailure(err.to_string()))?;

    if signature.len() != key.key_size() {
        return Err(CodecError::SigningFailure(format!(
            "signature is {} bytes, expected {}",
            signature.len(),
            key.key_size()
        )));
    }
    Ok(signature)
}

/// Verify a raw signature over the exact buffer — the check the mirror
/// performs on `/signed-request` submissions.
///
/// # Errors
///
/// Returns `SignatureMismatch` if the signature does not match the buffer
/// under this key.
pub fn verify_raw(key: &AsymmetricKey, buffer: &[u8], signature: &[u8]) -> Result<()> {
    key.public()
        .verify(Pkcs1v15Sign::new_unprefixed(), buffer, signature)
        .map_err(|_| CodecError::SignatureMismatch)
}
