//! Chunked RSA encryption and decryption.
//!
//! A single RSA operation is bounded by the modulus size, so
//! arbitrary-length payloads are split into chunks: at most
//! `key_size - overhead` plaintext bytes go into each operation, and every
//! encrypted chunk comes out exactly `key_size` bytes long. Chunks are
//! independent of each other but always concatenated in input order, so a
//! well-formed message has a length that is a multiple of `key_size`.
//!
//! Encryption uses the public half of a key; decryption needs the private
//! half. Both sides must agree on the padding scheme out of band — a
//! mismatch surfaces as a padding failure, not as a distinct error code.

use rand::rngs::OsRng;
use rsa::{Oaep, Pkcs1v15Encrypt};
use sha2::Sha256;

use crate::error::{CodecError, Result};
use crate::keys::AsymmetricKey;
use crate::padding::PaddingScheme;

/// Probe plaintext for [`verify_key_size`].
const KEY_SIZE_PROBE: [u8; 3] = [1, 2, 3];

fn encrypt_chunk(
    key: &AsymmetricKey,
    scheme: PaddingScheme,
    chunk: &[u8],
) -> std::result::Result<Vec<u8>, rsa::Error> {
    let mut rng = OsRng;
    match scheme {
        PaddingScheme::Pkcs1V15 => key.public().encrypt(&mut rng, Pkcs1v15Encrypt, chunk),
        PaddingScheme::OaepSha256 => key.public().encrypt(&mut rng, Oaep::new::<Sha256>(), chunk),
    }
}

/// Encrypt a payload of arbitrary length.
///
/// The payload is split into consecutive chunks of at most
/// `key_size - overhead` bytes (the last chunk may be shorter), each chunk
/// is encrypted with the public key under `scheme`, and the ciphertexts are
/// concatenated in input order. An empty payload yields an empty result.
///
/// # Errors
///
/// - `InvalidKeySize` if the modulus is too small for the scheme.
/// - `EncryptionFailure` with the chunk index if the cipher rejects a chunk.
pub fn encrypt(key: &AsymmetricKey, scheme: PaddingScheme, plaintext: &[u8]) -> Result<Vec<u8>> {
    let key_size = key.key_size();
    let max_chunk_size = scheme.max_chunk_size(key_size)?;

    let mut ciphertext = Vec::with_capacity(plaintext.len().div_ceil(max_chunk_size) * key_size);
    for (chunk_index, chunk) in plaintext.chunks(max_chunk_size).enumerate() {
        let encrypted = encrypt_chunk(key, scheme, chunk).map_err(|source| {
            CodecError::EncryptionFailure {
                chunk: chunk_index,
                source,
            }
        })?;
        ciphertext.extend_from_slice(&encrypted);
    }
    Ok(ciphertext)
}

/// Decrypt a message produced by [`encrypt`].
///
/// The ciphertext is split into exact `key_size` chunks, each chunk is
/// decrypted with the private key under `scheme`, and the plaintexts are
/// concatenated in input order.
///
/// # Errors
///
/// - `MalformedCiphertext` if the length is not a multiple of `key_size`;
///   nothing is decrypted in that case.
/// - `PrivateKeyRequired` if the handle holds no private material.
/// - `DecryptionFailure` with the chunk index on padding failure — the
///   wrong key, a corrupted chunk, or a scheme mismatch all end up here.
pub fn decrypt(key: &AsymmetricKey, scheme: PaddingScheme, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let key_size = key.key_size();
    if ciphertext.len() % key_size != 0 {
        return Err(CodecError::MalformedCiphertext {
            len: ciphertext.len(),
            key_size,
        });
    }
    let private = key
        .private()
        .ok_or(CodecError::PrivateKeyRequired("decryption"))?;
    // Reject a scheme/key mismatch before touching the ciphertext.
    scheme.max_chunk_size(key_size)?;

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    for (chunk_index, chunk) in ciphertext.chunks(key_size).enumerate() {
        let decrypted = match scheme {
            PaddingScheme::Pkcs1V15 => private.decrypt(Pkcs1v15Encrypt, chunk),
            PaddingScheme::OaepSha256 => private.decrypt(Oaep::new::<Sha256>(), chunk),
        }
        .map_err(|_| CodecError::DecryptionFailure { chunk: chunk_index })?;
        plaintext.extend_from_slice(&decrypted);
    }
    Ok(plaintext)
}

/// Startup self-test: assert the key produces chunks of the expected size.
///
/// Encrypts a small probe buffer and compares the output length to
/// `expected`. Deployments agree on a modulus size, and a key of any other
/// size would produce undecodable messages — so this runs once, before any
/// network activity.
///
/// # Errors
///
/// Returns `UnexpectedKeySize` on mismatch; probe encryption errors
/// propagate unchanged.
pub fn verify_key_size(key: &AsymmetricKey, scheme: PaddingScheme, expected: usize) -> Result<()> {
    let probe = encrypt(key, scheme, &KEY_SIZE_PROBE)?;
    if probe.len() != expected {
        return Err(CodecError::UnexpectedKeySize {
            expected,
            actual: probe.len(),
        });
    }
    Ok(())
}
