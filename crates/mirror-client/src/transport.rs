//! HTTP transport for the mirror client.
//!
//! The transport performs the POST/response cycle and nothing else: the
//! layers above it only produce and consume byte buffers. It also owns the
//! request timeout — the codec never blocks on anything. The three failure
//! modes stay distinguishable: connection error, timeout, and non-success
//! status (the latter reported by the client, not here).

use std::future::Future;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// A raw HTTP response: status code and body bytes.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the mirror accepted the request (status 200).
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// The POST/response cycle the client drives.
pub trait Transport: Send + Sync {
    /// POST `body` to `url` and return the raw response.
    fn post(
        &self,
        url: &str,
        content_type: &'static str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<HttpResponse>> + Send;
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn post(
        &self,
        url: &str,
        content_type: &'static str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<HttpResponse>> + Send {
        (**self).post(url, content_type, body)
    }
}

fn reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Connection(err.to_string())
    }
}

/// reqwest-backed transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport enforcing `timeout` on each request/response cycle.
    ///
    /// # Errors
    ///
    /// Returns `Connection` if the underlying HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Connection(err.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        content_type: &'static str,
        body: Vec<u8>,
    ) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(reqwest_error)?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
