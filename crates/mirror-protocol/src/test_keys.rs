//! Shared RSA test keys for protocol tests.
//!
//! One generated key per role per test binary; generation is the slow part.

use std::sync::OnceLock;

use rand::rngs::OsRng;
use rsa::RsaPrivateKey;

use mirror_codec::AsymmetricKey;

/// Modulus size of the generated test keys, in bits.
pub(crate) const TEST_KEY_BITS: usize = 2048;

/// Modulus size of the generated test keys, in bytes.
pub(crate) const TEST_KEY_SIZE: usize = TEST_KEY_BITS / 8;

fn generate() -> AsymmetricKey {
    let private = RsaPrivateKey::new(&mut OsRng, TEST_KEY_BITS).expect("test key generation");
    AsymmetricKey::from_private_key(private)
}

/// The client's key pair.
pub(crate) fn client_key() -> &'static AsymmetricKey {
    static KEY: OnceLock<AsymmetricKey> = OnceLock::new();
    KEY.get_or_init(generate)
}

/// The mirror's key pair (tests hold the private half to play the mirror).
pub(crate) fn mirror_key() -> &'static AsymmetricKey {
    static KEY: OnceLock<AsymmetricKey> = OnceLock::new();
    KEY.get_or_init(generate)
}
