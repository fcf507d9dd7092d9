//! Provider configuration.

use std::time::Duration;

use secrecy::Secret;

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A supported generation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    /// OpenAI chat completions, or any compatible endpoint.
    #[default]
    OpenAi,
}

impl Provider {
    /// Parse a provider name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "open-ai" | "chatgpt" => Some(Self::OpenAi),
            _ => None,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
        }
    }
}

/// Connection settings for remote generation.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Which provider to call.
    pub provider: Provider,
    api_key: Option<Secret<String>>,
    /// Chat model name.
    pub model: String,
    /// API base URL, without the endpoint path.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RemoteConfig {
    /// Set the provider.
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Set the API key. Blank keys count as unset.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.trim().is_empty() {
            None
        } else {
            Some(Secret::new(key))
        };
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The API key, if one is set.
    pub(crate) fn api_key(&self) -> Option<&Secret<String>> {
        self.api_key.as_ref()
    }

    /// Whether a credential is set.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Summary of the configuration, without the credential.
    pub fn status(&self) -> RemoteStatus {
        RemoteStatus {
            provider: self.provider,
            has_api_key: self.has_api_key(),
            model: self.model.clone(),
        }
    }
}

/// What [`RemoteConfig::status`] reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStatus {
    /// Configured provider.
    pub provider: Provider,
    /// Whether a credential is set.
    pub has_api_key: bool,
    /// Configured model.
    pub model: String,
}

impl std::fmt::Display for RemoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = if self.has_api_key { "set" } else { "not set" };
        write!(
            f,
            "provider: {}, model: {}, api key: {key}",
            self.provider, self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn default_config() {
        let cfg = RemoteConfig::default();
        assert_eq!(cfg.provider, Provider::OpenAi);
        assert_eq!(cfg.model, "gpt-4");
        assert_eq!(cfg.base_url, "https://api.openai.com/v1");
        assert!(!cfg.has_api_key());
    }

    #[test]
    fn builder_methods() {
        let cfg = RemoteConfig::default()
            .with_api_key("sk-test")
            .with_model("gpt-4o")
            .with_base_url("http://localhost:8080/v1/")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(cfg.api_key().map(|k| k.expose_secret().as_str()), Some("sk-test"));
        assert_eq!(cfg.model, "gpt-4o");
        assert_eq!(cfg.base_url, "http://localhost:8080/v1");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_key_is_unset() {
        assert!(!RemoteConfig::default().with_api_key("  ").has_api_key());
    }

    #[test]
    fn debug_hides_key() {
        let cfg = RemoteConfig::default().with_api_key("sk-very-secret");
        assert!(!format!("{cfg:?}").contains("sk-very-secret"));
    }

    #[test]
    fn status_report() {
        let status = RemoteConfig::default().with_api_key("k").status();
        assert!(status.has_api_key);
        assert_eq!(
            status.to_string(),
            "provider: openai, model: gpt-4, api key: set"
        );
        assert_eq!(
            RemoteConfig::default().status().to_string(),
            "provider: openai, model: gpt-4, api key: not set"
        );
    }

    #[test]
    fn provider_parse() {
        assert_eq!(Provider::parse("OpenAI"), Some(Provider::OpenAi));
        assert_eq!(Provider::parse("claude"), None);
    }
}
