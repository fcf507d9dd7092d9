//! The text generation seam.

use async_trait::async_trait;

use crate::error::RemoteResult;

/// Anything that turns a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt. Called at most once per reading.
    async fn generate(&self, prompt: &str) -> RemoteResult<String>;
}
