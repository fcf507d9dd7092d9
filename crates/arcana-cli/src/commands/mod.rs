pub mod classify;
pub mod deck;
pub mod read;
pub mod session;
pub mod spread;

use arcana_core::TopicCategory;
use arcana_remote::{RemoteConfig, RemoteReadingAdapter};
use clap::Args;
use tokio::runtime::Runtime;

/// Remote generation flags shared by `read` and `session`.
#[derive(Args, Debug, Clone)]
pub struct RemoteArgs {
    /// OpenAI API key; without one, readings are composed locally
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat model
    #[arg(long, default_value = arcana_remote::config::DEFAULT_MODEL)]
    pub model: String,

    /// API base URL
    #[arg(long, default_value = arcana_remote::config::DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl RemoteArgs {
    /// Build the remote configuration.
    pub fn config(&self) -> RemoteConfig {
        let config = RemoteConfig::default()
            .with_model(&self.model)
            .with_base_url(&self.base_url);
        match &self.api_key {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }
}

/// A remote adapter and the runtime to drive it, when a key is configured.
pub struct Remote {
    pub adapter: RemoteReadingAdapter,
    pub runtime: Runtime,
}

/// Set up remote generation, or `None` when no credential is configured.
pub fn remote(config: RemoteConfig) -> Result<Option<Remote>, String> {
    if !config.has_api_key() {
        tracing::debug!("no API key configured, composing readings locally");
        return Ok(None);
    }
    let adapter = RemoteReadingAdapter::from_config(config).map_err(|e| e.to_string())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    Ok(Some(Remote { adapter, runtime }))
}

/// Parse an optional topic flag.
pub fn parse_category(category: Option<&str>) -> Result<TopicCategory, String> {
    match category {
        None => Ok(TopicCategory::default()),
        Some(name) => TopicCategory::parse(name).ok_or_else(|| {
            let names: Vec<String> = TopicCategory::all()
                .iter()
                .map(|t| t.to_string().to_lowercase())
                .collect();
            format!("unknown topic '{name}' (expected one of: {})", names.join(", "))
        }),
    }
}
