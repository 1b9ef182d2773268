//! Shared RSA test keys.
//!
//! Key generation dominates test runtime, so each test binary generates one
//! key pair per role and reuses it. The codec laws are all relative to the
//! modulus size, so 2048-bit keys exercise the same properties as the
//! 4096-bit keys production deployments use.

use std::sync::OnceLock;

use rand::rngs::OsRng;
use rsa::RsaPrivateKey;

use crate::keys::AsymmetricKey;

/// Modulus size of the generated test keys, in bits.
pub(crate) const TEST_KEY_BITS: usize = 2048;

/// Modulus size of the generated test keys, in bytes.
pub(crate) const TEST_KEY_SIZE: usize = TEST_KEY_BITS / 8;

fn generate() -> AsymmetricKey {
    let private = RsaPrivateKey::new(&mut OsRng, TEST_KEY_BITS).expect("test key generation");
    AsymmetricKey::from_private_key(private)
}

/// The key most tests encrypt, decrypt, and sign with.
pub(crate) fn test_key() -> &'static AsymmetricKey {
    static KEY: OnceLock<AsymmetricKey> = OnceLock::new();
    KEY.get_or_init(generate)
}

/// An unrelated key for wrong-key tests.
pub(crate) fn other_key() -> &'static AsymmetricKey {
    static KEY: OnceLock<AsymmetricKey> = OnceLock::new();
    KEY.get_or_init(generate)
}
