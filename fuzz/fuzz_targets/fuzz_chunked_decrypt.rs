//! Fuzz target for chunked decryption.
//!
//! Decrypt must handle arbitrary ciphertext gracefully: reject malformed
//! lengths and invalid padding, never panic.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use mirror_codec::{chunked, AsymmetricKey, PaddingScheme};

fn key() -> &'static AsymmetricKey {
    static KEY: OnceLock<AsymmetricKey> = OnceLock::new();
    KEY.get_or_init(|| {
        let private =
            rsa::RsaPrivateKey::new(&mut rand::rngs::OsRng, 2048).expect("fuzz key generation");
        AsymmetricKey::from_private_key(private)
    })
}

fuzz_target!(|data: &[u8]| {
    // Either plaintext or an error, never a panic.
    let _ = chunked::decrypt(key(), PaddingScheme::OaepSha256, data);
    let _ = chunked::decrypt(key(), PaddingScheme::Pkcs1V15, data);
});
