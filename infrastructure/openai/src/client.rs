use std::time::Duration;

use reqwest::Client;

use business::domain::completion::errors::CompletionError;
use business::domain::completion::model::ClientConfig;

/// Default request timeout applied when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client bound to one chat-completion endpoint.
pub struct OpenAIClient {
    pub client: Client,
    pub config: ClientConfig,
}

impl OpenAIClient {
    /// Builds the underlying reqwest client with an explicit `timeout`.
    ///
    /// The client pools connections; concurrent requests share it without locking.
    /// A zero `timeout` would fail every request and is rejected.
    pub fn new(config: ClientConfig, timeout: Duration) -> Result<Self, CompletionError> {
        if timeout.is_zero() {
            return Err(CompletionError::InvalidConfig);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Builds the authorization header value.
    ///
    /// A missing key yields an empty bearer token; the endpoint rejects it.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.config.api_key().unwrap_or_default())
    }

    pub fn endpoint_url(&self) -> &str {
        self.config.endpoint_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_bearer_header_from_key() {
        let config = ClientConfig::new("https://example.com", Some("sk-test".to_string())).unwrap();
        let client = OpenAIClient::new(config, DEFAULT_TIMEOUT).unwrap();

        assert_eq!(client.auth_header(), "Bearer sk-test");
    }

    #[test]
    fn should_build_empty_bearer_header_without_key() {
        let config = ClientConfig::new("https://example.com", None).unwrap();
        let client = OpenAIClient::new(config, DEFAULT_TIMEOUT).unwrap();

        assert_eq!(client.auth_header(), "Bearer ");
    }

    #[test]
    fn should_reject_zero_timeout() {
        let config = ClientConfig::new("https://example.com", Some("sk-test".to_string())).unwrap();

        let result = OpenAIClient::new(config, Duration::ZERO);

        assert!(matches!(result, Err(CompletionError::InvalidConfig)));
    }
}
