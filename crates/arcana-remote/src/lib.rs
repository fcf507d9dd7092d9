//! Remote reading generation for Arcana.
//!
//! Builds a prompt from a drawn spread, sends it to an OpenAI-compatible
//! chat endpoint once, and falls back to the local composer from
//! `arcana-core` whenever the remote path fails.

pub mod adapter;
pub mod config;
pub mod error;
pub mod generator;
pub mod openai;
pub mod prompt;

pub use adapter::RemoteReadingAdapter;
pub use config::{Provider, RemoteConfig, RemoteStatus};
pub use error::{RemoteError, RemoteResult};
pub use generator::TextGenerator;
pub use openai::OpenAiGenerator;
pub use prompt::{PromptRequest, build_prompt};
