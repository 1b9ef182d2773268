//! Property-based tests for the chunked codec and raw signing.
//!
//! These tests verify the codec laws for arbitrary inputs:
//!
//! - encrypt/decrypt round-trips reproduce the payload exactly
//! - ciphertext length follows the chunk-count law
//! - ciphertext whose length is not a modulus multiple is always rejected
//! - tampering inside a chunk is detected
//! - signatures bind to the exact buffer bytes

use proptest::prelude::*;

use crate::chunked::{decrypt, encrypt};
use crate::error::CodecError;
use crate::padding::PaddingScheme;
use crate::signing::{sign_raw, verify_raw};
use crate::test_keys::test_key;

fn schemes() -> impl Strategy<Value = PaddingScheme> {
    prop_oneof![
        Just(PaddingScheme::Pkcs1V15),
        Just(PaddingScheme::OaepSha256),
    ]
}

proptest! {
    // RSA operations are slow; keep the case count moderate.
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn roundtrip_preserves_payload(
        payload in proptest::collection::vec(any::<u8>(), 0..1200),
        scheme in schemes(),
    ) {
        let key = test_key();
        let ciphertext = encrypt(key, scheme, &payload).unwrap();
        let decrypted = decrypt(key, scheme, &ciphertext).unwrap();
        prop_assert_eq!(payload, decrypted);
    }

    #[test]
    fn ciphertext_length_follows_chunk_count_law(
        payload in proptest::collection::vec(any::<u8>(), 0..1200),
        scheme in schemes(),
    ) {
        let key = test_key();
        let key_size = key.key_size();
        let max_chunk = scheme.max_chunk_size(key_size).unwrap();

        let ciphertext = encrypt(key, scheme, &payload).unwrap();
        prop_assert_eq!(
            ciphertext.len(),
            payload.len().div_ceil(max_chunk) * key_size
        );
    }

    #[test]
    fn non_modulus_multiple_lengths_are_rejected(
        len in 1usize..2048,
        scheme in schemes(),
    ) {
        let key = test_key();
        prop_assume!(len % key.key_size() != 0);

        let result = decrypt(key, scheme, &vec![0u8; len]);
        // `prop_assert!` treats its stringified condition as a format string,
        // so the `{ .. }` pattern cannot appear inline.
        let malformed = matches!(result, Err(CodecError::MalformedCiphertext { .. }));
        prop_assert!(malformed);
    }

    #[test]
    fn tampered_ciphertext_is_detected(
        payload in proptest::collection::vec(any::<u8>(), 1..800),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let key = test_key();
        let mut ciphertext = encrypt(key, PaddingScheme::OaepSha256, &payload).unwrap();

        let index = position.index(ciphertext.len());
        ciphertext[index] ^= 1 << bit;

        let result = decrypt(key, PaddingScheme::OaepSha256, &ciphertext);
        let detected = matches!(result, Err(CodecError::DecryptionFailure { .. }));
        prop_assert!(detected);
    }

    #[test]
    fn signature_binds_to_exact_bytes(
        payload in proptest::collection::vec(any::<u8>(), 1..200),
        position in any::<prop::sample::Index>(),
    ) {
        let key = test_key();
        let signature = sign_raw(key, &payload).unwrap();
        prop_assert_eq!(signature.len(), key.key_size());
        prop_assert!(verify_raw(key, &payload, &signature).is_ok());

        let mut altered = payload.clone();
        let index = position.index(altered.len());
        altered[index] ^= 0x01;
        prop_assert!(verify_raw(key, &altered, &signature).is_err());
    }
}
