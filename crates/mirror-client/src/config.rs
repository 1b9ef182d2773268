//! Client configuration.
//!
//! Framing, padding scheme, and expected key size are deployment
//! agreements with the mirror; the client only makes them explicit and
//! checks them up front.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use mirror_client::{MirrorConfig, PaddingScheme, RequestFraming};
//!
//! // Defaults: signed envelope, OAEP-SHA256, 4096-bit keys, 120 s timeout.
//! let config = MirrorConfig::new("http://127.0.0.1:8001");
//!
//! // Or customize through the builder.
//! let config = MirrorConfig::builder("http://127.0.0.1:8001")
//!     .with_framing(RequestFraming::EncryptedBody)
//!     .with_scheme(PaddingScheme::Pkcs1V15)
//!     .with_request_timeout(Duration::from_secs(30))
//!     .build();
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use mirror_codec::PaddingScheme;
use mirror_protocol::RequestFraming;

use crate::error::{ClientError, Result};

/// Default timeout for one request/response cycle.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Default expected modulus size in bytes (4096-bit keys).
const DEFAULT_KEY_SIZE: usize = 512;

/// Configuration for one mirror deployment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Base URL of the public mirror, e.g. `http://127.0.0.1:8001`.
    pub base_url: String,

    /// Request framing; fixed per deployment.
    pub framing: RequestFraming,

    /// Padding scheme agreed with the mirror; never inferred from data.
    pub scheme: PaddingScheme,

    /// Expected modulus size in bytes, checked against the loaded keys at
    /// startup.
    pub expected_key_size: usize,

    /// Timeout for one request/response cycle, enforced by the transport.
    pub request_timeout: Duration,
}

impl MirrorConfig {
    /// Configuration for `base_url` with the mirror's shipped defaults:
    /// signed envelope framing, OAEP-SHA256, 4096-bit keys, 120 s timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            framing: RequestFraming::SignedEnvelope,
            scheme: PaddingScheme::OaepSha256,
            expected_key_size: DEFAULT_KEY_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Create a configuration builder.
    pub fn builder(base_url: impl Into<String>) -> MirrorConfigBuilder {
        MirrorConfigBuilder::new(base_url)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::Configuration {
                field: "base_url",
                reason: "base URL cannot be empty".into(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ClientError::Configuration {
                field: "request_timeout",
                reason: "timeout must be greater than zero".into(),
            });
        }
        if self.expected_key_size <= self.scheme.overhead() {
            return Err(ClientError::Configuration {
                field: "expected_key_size",
                reason: format!(
                    "must exceed the {}-byte overhead of {}",
                    self.scheme.overhead(),
                    self.scheme
                ),
            });
        }
        Ok(())
    }
}

/// Builder for [`MirrorConfig`].
#[derive(Clone, Debug)]
pub struct MirrorConfigBuilder {
    config: MirrorConfig,
}

impl MirrorConfigBuilder {
    /// Start from the defaults for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: MirrorConfig::new(base_url),
        }
    }

    /// Set the request framing.
    pub fn with_framing(mut self, framing: RequestFraming) -> Self {
        self.config.framing = framing;
        self
    }

    /// Set the padding scheme.
    pub fn with_scheme(mut self, scheme: PaddingScheme) -> Self {
        self.config.scheme = scheme;
        self
    }

    /// Set the expected modulus size in bytes.
    pub fn with_expected_key_size(mut self, bytes: usize) -> Self {
        self.config.expected_key_size = bytes;
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> MirrorConfig {
        self.config
    }
}
