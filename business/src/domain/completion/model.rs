use std::collections::BTreeMap;

use serde::Serialize;

use super::errors::CompletionError;

/// Model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Type discriminator exposed to the orchestration layer.
pub const LLM_TYPE: &str = "custom_openai_chat";

/// Key under which the endpoint is reported in [`IdentifyingParams`].
pub const ENDPOINT_URL_PARAM: &str = "endpoint_url";

/// Metadata describing a generator instance, used for logging and cache keys.
pub type IdentifyingParams = BTreeMap<String, String>;

/// Connection settings for a chat-completion endpoint.
///
/// Immutable once built. The environment is never consulted here; callers
/// resolve the API key before construction.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    endpoint_url: String,
    api_key: Option<String>,
}

impl ClientConfig {
    /// Creates a config for `endpoint_url`.
    ///
    /// Only emptiness is checked. A malformed URL surfaces as a transport
    /// error when the first request is sent.
    pub fn new(
        endpoint_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, CompletionError> {
        let endpoint_url = endpoint_url.into();
        if endpoint_url.is_empty() {
            return Err(CompletionError::InvalidConfig);
        }

        Ok(Self {
            endpoint_url,
            api_key,
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn identifying_params(&self) -> IdentifyingParams {
        let mut params = IdentifyingParams::new();
        params.insert(ENDPOINT_URL_PARAM.to_string(), self.endpoint_url.clone());
        params
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// A single role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of one chat-completion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl CompletionRequest {
    /// Builds the fixed-parameter request carrying `prompt` as the only user message.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// The part of a chat-completion reply this crate cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
}

impl CompletionResponse {
    /// Extracts `choices[0].message.content` from a raw JSON body.
    pub fn from_json(body: &str) -> Result<Self, CompletionError> {
        let data: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| CompletionError::malformed_response(format!("invalid json: {}", e)))?;

        let choice = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or_else(|| CompletionError::malformed_response("missing choices[0]"))?;

        let content = choice["message"]["content"].as_str().ok_or_else(|| {
            CompletionError::malformed_response("missing choices[0].message.content")
        })?;

        Ok(Self {
            content: content.to_string(),
        })
    }
}
