use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::services::TextGenerator;
use crate::domain::completion::use_cases::generate::{GenerateTextParams, GenerateTextUseCase};
use crate::domain::logger::Logger;

pub struct GenerateTextUseCaseImpl {
    pub generator: Arc<dyn TextGenerator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateTextUseCase for GenerateTextUseCaseImpl {
    async fn execute(&self, params: GenerateTextParams) -> Result<String, CompletionError> {
        let identifying = self
            .generator
            .identifying_params()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        self.logger.info(&format!(
            "Generating text with {} ({})",
            self.generator.llm_type(),
            identifying
        ));

        // Failures go straight back to the caller, no retry.
        match self.generator.complete(&params.prompt, params.stop).await {
            Ok(text) => {
                self.logger
                    .info(&format!("Generated {} characters", text.chars().count()));
                Ok(text)
            }
            Err(err) => {
                self.logger.error(&format!("Text generation failed: {}", err));
                Err(err)
            }
        }
    }
}
