//! HTTP client for the Safe transaction service
//!
//! GET helpers build `{base_url}{endpoint}?{params}` and return the body as
//! JSON verbatim. Call-data decoding is a separate POST because its failure
//! statuses carry meaning for the caller.

use crate::config::ServerConfig;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Endpoint used for call-data decoding
pub const DATA_DECODER_ENDPOINT: &str = "/data-decoder/";

/// Safe transaction service errors
#[derive(Debug, Error)]
pub enum SafeApiError {
    #[error("Safe API error: {}", status_text(.status))]
    Status { status: StatusCode },
    #[error("Decoder API error: {}", status_text(.status))]
    Decoder { status: StatusCode },
    #[error("Request to Safe API failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Safe API returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Invalid Safe API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SafeApiError {
    /// HTTP status of the failed response, if the request reached the server
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SafeApiError::Status { status } | SafeApiError::Decoder { status } => Some(*status),
            _ => None,
        }
    }
}

/// Reason phrase for a status, empty for unregistered codes
fn status_text(status: &StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}

/// Body of a `/data-decoder/` request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DecodeRequest {
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Client for the Safe transaction service
#[derive(Debug, Clone)]
pub struct SafeApiClient {
    base_url: String,
    client: Client,
}

impl SafeApiClient {
    /// Create a client against the given base URL, e.g.
    /// `https://safe-transaction-mainnet.safe.global/api/v1`
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self, SafeApiError> {
        let client = Client::builder().build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Create a client from the resolved server configuration
    pub fn from_config(config: &ServerConfig) -> Result<Self, SafeApiError> {
        Self::new(config.safe.base_url.clone())
    }

    /// Build request URL from base, endpoint and query parameters (pure function)
    pub fn build_url(
        base_url: &str,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Url, SafeApiError> {
        let mut url = Url::parse(&format!("{base_url}{endpoint}"))?;

        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// GET `endpoint` and return the JSON body unchanged
    pub async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, SafeApiError> {
        let url = Self::build_url(&self.base_url, endpoint, params)?;
        debug!(url = %url, "Safe API GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), endpoint, "Safe API request failed");
            return Err(SafeApiError::Status { status });
        }

        Self::parse_body(&response.text().await?)
    }

    /// POST call-data to the decoder endpoint
    pub async fn decode_data(&self, request: &DecodeRequest) -> Result<Value, SafeApiError> {
        let url = Self::build_url(&self.base_url, DATA_DECODER_ENDPOINT, &[])?;
        debug!(url = %url, has_to = request.to.is_some(), "Safe API decode");

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Safe data decoder request failed");
            return Err(SafeApiError::Decoder { status });
        }

        Self::parse_body(&response.text().await?)
    }

    /// Parse response body as JSON (pure function)
    fn parse_body(body: &str) -> Result<Value, SafeApiError> {
        Ok(serde_json::from_str(body)?)
    }
}
