/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

use crate::http::error::{Result, TanukiError};
use crate::types::ErrorBody;

/// Default base URL for a locally running Tanuki-Programmer service
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Header carrying the API key for authenticated endpoints
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Fallback retry delay when the service rate-limits without a Retry-After header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
}

/// Main HTTP client for the Tanuki-Programmer API
#[derive(Debug)]
pub struct TanukiClient {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
    credentials: Option<Credentials>,
}

impl TanukiClient {
    /// Create a new client with default configuration against the local service
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_config_and_base_url(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration and base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            timeout: config.timeout,
            credentials: None,
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint path
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build a request builder for an unauthenticated endpoint
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build a request builder with the API key header attached
    pub(crate) fn api_request_with_key(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<RequestBuilder> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            TanukiError::Authentication {
                message: "API key not configured".to_string(),
            }
        })?;
        Ok(self
            .api_request(method, endpoint)?
            .header(API_KEY_HEADER, credentials.api_key.clone()))
    }

    /// Send a request and decode a JSON response, mapping error statuses
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request_id = Uuid::new_v4().to_string();
        let response = builder
            .header("x-request-id", request_id.as_str())
            .send()
            .await
            .map_err(|err| self.map_transport_error(err))?;

        let status = response.status();
        tracing::debug!(request_id = %request_id, status = %status, "api response received");

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok());
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, retry_after, &body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(TanukiError::from)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> TanukiError {
        if err.is_timeout() {
            TanukiError::Timeout {
                duration: self.timeout.as_secs(),
            }
        } else {
            TanukiError::Http(err)
        }
    }
}

/// Translate a non-2xx status plus body into the matching error variant.
///
/// The service reports errors as a JSON object `{"detail": "..."}`; fall
/// back to the raw body when that shape is absent.
fn error_for_status(status: StatusCode, retry_after: Option<u64>, body: &str) -> TanukiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|err| err.detail)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TanukiError::Authentication {
            message: if detail.is_empty() {
                status.to_string()
            } else {
                detail
            },
        },
        StatusCode::TOO_MANY_REQUESTS => TanukiError::RateLimit {
            retry_after: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        },
        _ => TanukiError::api_error(status, detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status_parses_detail_body() {
        let err = error_for_status(
            StatusCode::UNAUTHORIZED,
            None,
            r#"{"detail": "Invalid API Key"}"#,
        );
        match err {
            TanukiError::Authentication { message } => assert_eq!(message, "Invalid API Key"),
            _ => panic!("Expected Authentication variant"),
        }
    }

    #[test]
    fn test_error_for_status_rate_limit() {
        let err = error_for_status(
            StatusCode::TOO_MANY_REQUESTS,
            None,
            r#"{"detail": "Rate limit exceeded. Max 5 requests per minute."}"#,
        );
        match err {
            TanukiError::RateLimit { retry_after } => {
                assert_eq!(retry_after, DEFAULT_RETRY_AFTER_SECS)
            }
            _ => panic!("Expected RateLimit variant"),
        }
    }

    #[test]
    fn test_error_for_status_rate_limit_honors_header() {
        let err = error_for_status(StatusCode::TOO_MANY_REQUESTS, Some(7), "");
        match err {
            TanukiError::RateLimit { retry_after } => assert_eq!(retry_after, 7),
            _ => panic!("Expected RateLimit variant"),
        }
    }

    #[test]
    fn test_error_for_status_plain_body() {
        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, None, "boom");
        match err {
            TanukiError::Api { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "boom");
            }
            _ => panic!("Expected Api variant"),
        }
    }

    #[test]
    fn test_api_request_with_key_requires_credentials() {
        let client = TanukiClient::new().unwrap();
        let err = client
            .api_request_with_key(Method::GET, "/health")
            .unwrap_err();
        assert!(err.is_auth_error());
    }
}
