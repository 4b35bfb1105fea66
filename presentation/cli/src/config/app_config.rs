use super::openai_config::OpenAIConfig;

/// Input used when no words are given on the command line.
pub const DEFAULT_INPUT: &str = "What is the capital of France?";

pub struct AppConfig {
    pub openai: OpenAIConfig,
    pub input: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            openai: OpenAIConfig::from_env(),
            input: input_from_args(std::env::args().skip(1)),
        }
    }

    /// Prompt actually sent to the endpoint.
    pub fn prompt(&self) -> String {
        format!("Generate a response for: {}", self.input)
    }
}

/// Joins positional arguments with spaces, falling back to [`DEFAULT_INPUT`].
pub fn input_from_args(args: impl IntoIterator<Item = String>) -> String {
    let joined = args.into_iter().collect::<Vec<_>>().join(" ");
    if joined.trim().is_empty() {
        DEFAULT_INPUT.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_input_without_args() {
        assert_eq!(input_from_args(Vec::new()), DEFAULT_INPUT);
    }

    #[test]
    fn should_join_args_with_spaces() {
        let args = vec!["Who".to_string(), "wrote".to_string(), "Hamlet?".to_string()];

        assert_eq!(input_from_args(args), "Who wrote Hamlet?");
    }

    #[test]
    fn should_prefix_input_in_prompt() {
        // Arrange
        let config = AppConfig {
            openai: OpenAIConfig {
                endpoint_url: "https://example.com".to_string(),
                api_key: None,
                timeout: std::time::Duration::from_secs(5),
            },
            input: DEFAULT_INPUT.to_string(),
        };

        // Act
        let prompt = config.prompt();

        // Assert
        assert_eq!(
            prompt,
            "Generate a response for: What is the capital of France?"
        );
    }
}
