use std::time::Duration;

use openai::client::DEFAULT_TIMEOUT;
use tracing::warn;

pub const DEFAULT_ENDPOINT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Configuration for chat-completion endpoint access.
///
/// Environment variables:
/// - OPENAI_API_KEY: Bearer token (optional; empty counts as unset, requests fail remotely without it)
/// - CHAT_COMPLETION_URL: Endpoint URL (default: OpenAI chat completions)
/// - CHAT_COMPLETION_TIMEOUT_SECS: Request timeout in whole seconds, at least 1 (default: 30)
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub endpoint_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint_url = lookup("CHAT_COMPLETION_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string());

        let timeout = match lookup("CHAT_COMPLETION_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %raw, "invalid CHAT_COMPLETION_TIMEOUT_SECS, using default");
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Self {
            endpoint_url,
            api_key: lookup("OPENAI_API_KEY").filter(|key| !key.is_empty()),
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn should_use_defaults_when_nothing_set() {
        let config = OpenAIConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn should_read_all_variables() {
        let config = OpenAIConfig::from_lookup(lookup_from(&[
            ("CHAT_COMPLETION_URL", "https://proxy.local/v1/chat/completions"),
            ("OPENAI_API_KEY", "sk-env"),
            ("CHAT_COMPLETION_TIMEOUT_SECS", "12"),
        ]));

        assert_eq!(config.endpoint_url, "https://proxy.local/v1/chat/completions");
        assert_eq!(config.api_key.as_deref(), Some("sk-env"));
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn should_fall_back_to_default_timeout_when_unparseable() {
        let config =
            OpenAIConfig::from_lookup(lookup_from(&[("CHAT_COMPLETION_TIMEOUT_SECS", "soon")]));

        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn should_fall_back_to_default_timeout_when_zero() {
        let config =
            OpenAIConfig::from_lookup(lookup_from(&[("CHAT_COMPLETION_TIMEOUT_SECS", "0")]));

        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn should_treat_empty_api_key_as_unset() {
        let config = OpenAIConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "")]));

        assert_eq!(config.api_key, None);
    }
}
