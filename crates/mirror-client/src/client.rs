//! The mirror client.
//!
//! Drives single request/response cycles against a public mirror. One
//! outstanding request per call; the network exchange is the only
//! suspension point, and a failure at any stage is terminal for that call.

use tracing::{debug, info};

use mirror_codec::{chunked, AsymmetricKey};
use mirror_protocol::{RequestCodec, RequestPhase};

use crate::config::MirrorConfig;
use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, Transport};

/// Client for one mirror deployment.
///
/// Construction validates the configuration and runs the key-size
/// self-test, so a key/deployment mismatch fails before any network
/// activity. Keys are immutable afterwards and all codec operations are
/// pure, so the client can be shared freely across tasks.
#[derive(Clone, Debug)]
pub struct MirrorClient<T = HttpTransport> {
    codec: RequestCodec,
    transport: T,
    base_url: String,
}

impl MirrorClient<HttpTransport> {
    /// Build a client over the reqwest transport.
    ///
    /// `client_key` must hold private material: it decrypts responses and,
    /// under the signed framing, signs requests. `mirror_key` is the
    /// mirror's public key, required for encrypted-body framing.
    ///
    /// # Errors
    ///
    /// - `Configuration` for invalid config values.
    /// - `Codec(UnexpectedKeySize)` if a key fails the startup self-test.
    /// - `Protocol(MirrorKeyRequired)` / `Codec(PrivateKeyRequired)` for
    ///   missing key capabilities.
    pub fn new(
        config: MirrorConfig,
        client_key: AsymmetricKey,
        mirror_key: Option<AsymmetricKey>,
    ) -> Result<Self> {
        let transport = HttpTransport::new(config.request_timeout)?;
        Self::with_transport(config, client_key, mirror_key, transport)
    }
}

impl<T: Transport> MirrorClient<T> {
    /// Build a client over a custom transport.
    ///
    /// Same checks as [`MirrorClient::new`]; the transport is taken as-is
    /// and must enforce the deployment's timeout itself.
    pub fn with_transport(
        config: MirrorConfig,
        client_key: AsymmetricKey,
        mirror_key: Option<AsymmetricKey>,
        transport: T,
    ) -> Result<Self> {
        config.validate()?;
        let codec = RequestCodec::new(config.framing, config.scheme, client_key, mirror_key)?;

        // Key-size self-test: runs once, before any network call.
        chunked::verify_key_size(codec.client_key(), codec.scheme(), config.expected_key_size)?;
        if let Some(key) = codec.mirror_key() {
            chunked::verify_key_size(key, codec.scheme(), config.expected_key_size)?;
        }

        info!(
            base_url = %config.base_url,
            framing = ?codec.framing(),
            scheme = %codec.scheme(),
            key_size = config.expected_key_size,
            "mirror client ready"
        );

        Ok(Self {
            codec,
            transport,
            base_url: config.base_url,
        })
    }

    /// Submit one JSON request and return the decrypted JSON response.
    ///
    /// A single request/response cycle with no retries. Non-200 responses
    /// surface as [`ClientError::Status`] carrying the raw body as
    /// diagnostic text; connection failures and timeouts stay separate
    /// variants.
    ///
    /// # Errors
    ///
    /// Any stage error — encoding, transport, status, decryption — ends
    /// the call.
    pub async fn submit(&self, request: &str) -> Result<String> {
        match self.drive(request).await {
            Ok(response) => Ok(response),
            Err(err) => {
                debug!(phase = %RequestPhase::Failed, error = %err, "request failed");
                Err(err)
            }
        }
    }

    async fn drive(&self, request: &str) -> Result<String> {
        debug!(phase = %RequestPhase::Encoding, "encoding request");
        let encoded = self.codec.encode(request)?;

        let url = format!("{}{}", self.base_url.trim_end_matches('/'), encoded.endpoint);
        debug!(phase = %RequestPhase::Sent, url = %url, bytes = encoded.body.len(), "posting request");
        let response = self
            .transport
            .post(&url, encoded.content_type, encoded.body)
            .await?;

        debug!(
            phase = %RequestPhase::AwaitingResponse,
            status = response.status,
            bytes = response.body.len(),
            "response received"
        );
        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let decoded = self.codec.decode_response(&response.body)?;
        debug!(phase = %RequestPhase::Decoded, bytes = decoded.len(), "response decoded");
        Ok(decoded)
    }
}
