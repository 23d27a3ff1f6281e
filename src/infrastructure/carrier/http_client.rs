//! # HTTP Client Utilities
//!
//! Shared HTTP plumbing for the carrier gateway.
//!
//! The carrier web service takes `application/x-www-form-urlencoded`
//! requests and answers with JSON bodies that are not always well-formed,
//! so this wrapper hands back the raw body text and lets the adapter
//! decide how to parse it.

use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use reqwest::Client;
use std::time::Duration;

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Raw response of a form POST: status plus unparsed body.
#[derive(Debug, Clone)]
pub struct FormResponse {
    status: u16,
    body: String,
}

impl FormResponse {
    /// Returns the HTTP status code.
    #[inline]
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true for 2xx statuses.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the raw body text.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// HTTP client wrapper for the carrier's form-encoded endpoints.
#[derive(Debug, Clone)]
pub struct FormClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl FormClient {
    /// Creates a client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Internal` if the client cannot be created.
    pub fn new() -> CarrierResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    /// Creates a client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Internal` if the client cannot be created.
    pub fn with_timeout(timeout_ms: u64) -> CarrierResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| CarrierError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// POSTs a form-encoded body and returns the raw response.
    ///
    /// Any HTTP status is returned as a [`FormResponse`]; only transport
    /// failures become errors here. Status handling is the adapter's
    /// concern, because the carrier embeds error payloads in non-2xx
    /// bodies.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Timeout` or `CarrierError::Connection` on
    /// transport failure.
    pub async fn post_form<B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        form: &B,
    ) -> CarrierResult<FormResponse> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;

        Ok(FormResponse { status, body })
    }
}

/// Maps a reqwest error to a CarrierError.
fn map_reqwest_error(error: reqwest::Error) -> CarrierError {
    if error.is_timeout() {
        CarrierError::timeout("request timed out")
    } else if error.is_connect() {
        CarrierError::connection(format!("connection failed: {error}"))
    } else {
        CarrierError::connection(format!("HTTP request failed: {error}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_client() {
        let client = FormClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout_ms(), DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn with_timeout() {
        let client = FormClient::with_timeout(3000).unwrap();
        assert_eq!(client.timeout_ms(), 3000);
    }

    #[test]
    fn form_response_success_range() {
        let ok = FormResponse {
            status: 204,
            body: String::new(),
        };
        assert!(ok.is_success());

        let not_found = FormResponse {
            status: 404,
            body: String::new(),
        };
        assert!(!not_found.is_success());
    }
}
