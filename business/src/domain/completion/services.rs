use async_trait::async_trait;

use super::errors::CompletionError;
use super::model::IdentifyingParams;

/// Service port for pluggable text-generation backends.
///
/// Orchestration code depends on this trait, never on a concrete adapter.
/// Calls are independent; implementations hold no per-call mutable state.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` as a single user message and returns the generated text.
    ///
    /// `stop` is accepted for interface compatibility. Implementations are not
    /// required to honor it.
    async fn complete(
        &self,
        prompt: &str,
        stop: Option<Vec<String>>,
    ) -> Result<String, CompletionError>;

    /// Stable type discriminator used for adapter discovery.
    fn llm_type(&self) -> &'static str;

    fn identifying_params(&self) -> IdentifyingParams;
}
