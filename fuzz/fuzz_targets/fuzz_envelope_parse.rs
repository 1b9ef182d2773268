//! Fuzz target for signed envelope parsing.
//!
//! Arbitrary bytes must either parse into an envelope or be rejected;
//! parsed envelopes must re-serialize without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mirror_protocol::SignedEnvelope;

fuzz_target!(|data: &[u8]| {
    if let Ok(envelope) = SignedEnvelope::from_bytes(data) {
        let _ = envelope.to_bytes();
    }
});
