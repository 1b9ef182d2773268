//! # mirror-protocol
//!
//! Wire framing for requests to a mirror service. A deployment picks one of
//! two framings, fixed for its lifetime:
//!
//! - **Encrypted body**: the JSON request is encrypted with the mirror's
//!   public key and POSTed as opaque bytes to `/encrypted-request`
//! - **Signed envelope**: the plaintext JSON request plus a raw signature
//!   travel as a JSON object to `/signed-request`
//!
//! In both framings the mirror answers with an encrypted message that only
//! the client's private key can open. [`RequestCodec`] bundles the framing,
//! padding scheme, and keys for one deployment; [`RequestPhase`] names the
//! stages a single request moves through.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod envelope;
pub mod error;
pub mod framing;
pub mod state;

#[cfg(test)]
pub(crate) mod test_keys;

pub use envelope::SignedEnvelope;
pub use error::{ProtocolError, Result};
pub use framing::{EncodedRequest, RequestCodec, RequestFraming};
pub use state::RequestPhase;
