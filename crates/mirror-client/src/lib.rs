//! # mirror-client
//!
//! Async client for a mirror deployment. One call drives one
//! request/response cycle: encode (encrypt or sign) the JSON request, POST
//! it to the public mirror, await the response, decrypt it with the
//! client's private key. There is no retry machinery — a failed call is
//! reported and the next call starts fresh.
//!
//! # Example
//!
//! ```ignore
//! use mirror_client::{AsymmetricKey, MirrorClient, MirrorConfig};
//!
//! let key = AsymmetricKey::from_private_key_pem(&pem_text)?;
//! let config = MirrorConfig::new("http://127.0.0.1:8001");
//! let client = MirrorClient::new(config, key, None)?;
//!
//! let response = client
//!     .submit(r#"{"method": "get_block", "params": {"block_index": "0"}, "jsonrpc": "2.0", "id": 1}"#)
//!     .await?;
//! println!("{response}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::MirrorClient;
pub use config::{MirrorConfig, MirrorConfigBuilder};
pub use error::{ClientError, Result};
pub use transport::{HttpResponse, HttpTransport, Transport};

pub use mirror_codec::{AsymmetricKey, PaddingScheme};
pub use mirror_protocol::RequestFraming;
