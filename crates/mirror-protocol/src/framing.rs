//! Request framings and the per-deployment request codec.
//!
//! A deployment speaks exactly one framing; it is configuration, not a
//! per-call choice. Key roles are fixed the same way: outgoing bodies are
//! encrypted with the **mirror's** public key, envelopes are signed and
//! responses decrypted with the **client's** own key. [`RequestCodec::new`]
//! enforces both at construction so a miswired deployment fails before the
//! first request.

use serde::{Deserialize, Serialize};

use mirror_codec::{chunked, AsymmetricKey, CodecError, PaddingScheme};

use crate::envelope::SignedEnvelope;
use crate::error::{ProtocolError, Result};

/// How requests are framed on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestFraming {
    /// Opaque encrypted body: the request is encrypted with the mirror's
    /// public key and POSTed as raw bytes.
    EncryptedBody,

    /// Signed JSON envelope: the plaintext request travels with a raw
    /// signature from the client's private key.
    SignedEnvelope,
}

impl RequestFraming {
    /// Endpoint path on the public mirror.
    pub fn endpoint(&self) -> &'static str {
        match self {
            RequestFraming::EncryptedBody => "/encrypted-request",
            RequestFraming::SignedEnvelope => "/signed-request",
        }
    }

    /// Content type of the request body.
    pub fn content_type(&self) -> &'static str {
        match self {
            RequestFraming::EncryptedBody => "application/octet-stream",
            RequestFraming::SignedEnvelope => "application/json",
        }
    }
}

/// An encoded request, ready for the transport.
#[derive(Clone, Debug)]
pub struct EncodedRequest {
    /// Endpoint path the body must be POSTed to.
    pub endpoint: &'static str,

    /// Content type header value.
    pub content_type: &'static str,

    /// Request body bytes.
    pub body: Vec<u8>,
}

/// Encoder/decoder for one deployment's framing, scheme, and keys.
#[derive(Clone, Debug)]
pub struct RequestCodec {
    framing: RequestFraming,
    scheme: PaddingScheme,
    client_key: AsymmetricKey,
    mirror_key: Option<AsymmetricKey>,
}

impl RequestCodec {
    /// Build a codec for one deployment.
    ///
    /// `client_key` must hold private material: responses are always
    /// decrypted with it, and the signed framing signs with it.
    ///
    /// # Errors
    ///
    /// - `Codec(PrivateKeyRequired)` if `client_key` is public-only.
    /// - `MirrorKeyRequired` for encrypted-body framing without a mirror key.
    pub fn new(
        framing: RequestFraming,
        scheme: PaddingScheme,
        client_key: AsymmetricKey,
        mirror_key: Option<AsymmetricKey>,
    ) -> Result<Self> {
        if !client_key.has_private() {
            return Err(ProtocolError::Codec(CodecError::PrivateKeyRequired(
                "response decryption",
            )));
        }
        if framing == RequestFraming::EncryptedBody && mirror_key.is_none() {
            return Err(ProtocolError::MirrorKeyRequired);
        }
        Ok(Self {
            framing,
            scheme,
            client_key,
            mirror_key,
        })
    }

    /// The framing in use.
    pub fn framing(&self) -> RequestFraming {
        self.framing
    }

    /// The padding scheme in use.
    pub fn scheme(&self) -> PaddingScheme {
        self.scheme
    }

    /// The client's key.
    pub fn client_key(&self) -> &AsymmetricKey {
        &self.client_key
    }

    /// The mirror's public key, when held.
    pub fn mirror_key(&self) -> Option<&AsymmetricKey> {
        self.mirror_key.as_ref()
    }

    /// Encode one JSON request for the wire.
    ///
    /// # Errors
    ///
    /// Codec errors from encryption or signing propagate with their chunk
    /// and size context intact.
    pub fn encode(&self, request: &str) -> Result<EncodedRequest> {
        let body = match self.framing {
            RequestFraming::EncryptedBody => {
                let mirror_key = self
                    .mirror_key
                    .as_ref()
                    .ok_or(ProtocolError::MirrorKeyRequired)?;
                chunked::encrypt(mirror_key, self.scheme, request.as_bytes())?
            }
            RequestFraming::SignedEnvelope => {
                SignedEnvelope::seal(request, &self.client_key)?.to_bytes()?
            }
        };
        Ok(EncodedRequest {
            endpoint: self.framing.endpoint(),
            content_type: self.framing.content_type(),
            body,
        })
    }

    /// Decode a success response body into the JSON text it carries.
    ///
    /// In both framings the body is an encrypted message for the client's
    /// private key under the deployment scheme.
    ///
    /// # Errors
    ///
    /// - `Codec(MalformedCiphertext)` / `Codec(DecryptionFailure)` from the
    ///   chunked codec.
    /// - `ResponseNotUtf8` if the plaintext is not valid UTF-8.
    pub fn decode_response(&self, body: &[u8]) -> Result<String> {
        let plaintext = chunked::decrypt(&self.client_key, self.scheme, body)?;
        String::from_utf8(plaintext).map_err(|_| ProtocolError::ResponseNotUtf8)
    }
}
