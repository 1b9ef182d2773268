//! # mirror-codec
//!
//! Asymmetric building blocks for the mirror transport:
//!
//! - **PaddingScheme**: the two RSA padding policies the mirror speaks and
//!   their fixed per-chunk overhead
//! - **AsymmetricKey**: an immutable key handle, public or public+private
//! - **Chunked codec**: arbitrary-length payloads split into
//!   modulus-bounded chunks, encrypted and reassembled in order
//! - **Raw signing**: detached signatures over the exact buffer bytes,
//!   with no digest
//!
//! ## Security
//!
//! Padding validation is the only authenticity signal this transport has:
//! a tampered or wrongly-keyed chunk surfaces as a decryption failure, and
//! decryption errors deliberately carry no detail beyond the chunk index.
//! Key material is injected explicitly into every call and never held in
//! global state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunked;
pub mod error;
pub mod keys;
pub mod padding;
pub mod signing;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod test_keys;

pub use chunked::{decrypt, encrypt, verify_key_size};
pub use error::{CodecError, Result};
pub use keys::AsymmetricKey;
pub use padding::PaddingScheme;
pub use signing::{sign_raw, verify_raw};
