use std::sync::Arc;

use logger::TracingLogger;
use openai::chat_completion::ChatCompletionClient;
use openai::client::OpenAIClient;

use business::application::completion::generate::GenerateTextUseCaseImpl;
use business::domain::completion::model::ClientConfig;
use business::domain::completion::use_cases::generate::GenerateTextUseCase;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub generate_text_use_case: Arc<dyn GenerateTextUseCase>,
}

impl DependencyContainer {
    pub fn new(openai_config: &OpenAIConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let client_config = ClientConfig::new(
            openai_config.endpoint_url.clone(),
            openai_config.api_key.clone(),
        )?;
        let openai_client = OpenAIClient::new(client_config, openai_config.timeout)?;
        let generator = Arc::new(ChatCompletionClient::new(openai_client));

        let generate_text_use_case = Arc::new(GenerateTextUseCaseImpl { generator, logger });

        Ok(Self {
            generate_text_use_case,
        })
    }
}
