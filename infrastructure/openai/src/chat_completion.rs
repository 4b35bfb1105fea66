use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use business::domain::completion::errors::CompletionError;
use business::domain::completion::model::{
    CompletionRequest, CompletionResponse, IdentifyingParams, LLM_TYPE,
};
use business::domain::completion::services::TextGenerator;

use crate::client::OpenAIClient;

/// Text generator backed by an OpenAI-compatible chat-completion endpoint.
///
/// Every call sends one POST with fixed model parameters and returns
/// `choices[0].message.content`. Stop sequences are accepted but not sent.
pub struct ChatCompletionClient {
    client: OpenAIClient,
}

impl ChatCompletionClient {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionClient {
    async fn complete(
        &self,
        prompt: &str,
        stop: Option<Vec<String>>,
    ) -> Result<String, CompletionError> {
        // Known limitation: stop sequences never reach the request body.
        if let Some(stop) = stop.as_ref().filter(|s| !s.is_empty()) {
            debug!(count = stop.len(), "ignoring stop sequences");
        }

        let body = CompletionRequest::from_prompt(prompt);

        debug!(endpoint = self.client.endpoint_url(), model = %body.model, "sending chat completion");

        let response = self
            .client
            .client
            .post(self.client.endpoint_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CompletionError::transport(e.to_string()))?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "chat completion rejected");
            return Err(CompletionError::remote(status.as_u16(), text));
        }

        let parsed = CompletionResponse::from_json(&text)?;
        Ok(parsed.content)
    }

    fn llm_type(&self) -> &'static str {
        LLM_TYPE
    }

    fn identifying_params(&self) -> IdentifyingParams {
        self.client.config.identifying_params()
    }
}
