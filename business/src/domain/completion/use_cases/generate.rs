use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;

pub struct GenerateTextParams {
    pub prompt: String,
    pub stop: Option<Vec<String>>,
}

#[async_trait]
pub trait GenerateTextUseCase: Send + Sync {
    async fn execute(&self, params: GenerateTextParams) -> Result<String, CompletionError>;
}
