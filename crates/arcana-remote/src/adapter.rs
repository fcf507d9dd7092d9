//! Remote readings with local fallback.
//!
//! [`RemoteReadingAdapter::interpret`] always returns a complete reading.
//! It composes the local reading first, then makes a single remote attempt
//! and attaches the narrative if the attempt succeeds. Any failure is
//! logged and the local reading is returned unchanged.

use std::sync::Arc;

use arcana_core::Reading;
use arcana_core::reading::compose;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};
use crate::generator::TextGenerator;
use crate::openai::OpenAiGenerator;
use crate::prompt::{PromptRequest, build_prompt};

/// Reading composer that prefers remote narrative.
#[derive(Clone)]
pub struct RemoteReadingAdapter {
    generator: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for RemoteReadingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteReadingAdapter").finish_non_exhaustive()
    }
}

impl RemoteReadingAdapter {
    /// Wrap any generator.
    pub fn new(generator: impl TextGenerator + 'static) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }

    /// Adapter for the configured provider.
    pub fn from_config(config: RemoteConfig) -> RemoteResult<Self> {
        Ok(Self::new(OpenAiGenerator::new(config)?))
    }

    /// Compose a reading, with remote narrative when available.
    pub async fn interpret(&self, request: &PromptRequest<'_>) -> Reading {
        let local = compose(request.picks, request.intent, request.category);
        match self.narrate(request).await {
            Ok(narrative) => {
                tracing::info!(chars = narrative.chars().count(), "remote reading received");
                local.with_narrative(narrative)
            }
            Err(err) => {
                tracing::warn!(error = %err, "remote reading unavailable, using local reading");
                local
            }
        }
    }

    async fn narrate(&self, request: &PromptRequest<'_>) -> RemoteResult<String> {
        let prompt = build_prompt(request);
        let text = self.generator.generate(&prompt).await?;
        let text = normalize_narrative(&text);
        if text.is_empty() {
            return Err(RemoteError::Format("empty response".to_string()));
        }
        Ok(text)
    }
}

/// Trim the text, strip trailing spaces and collapse runs of blank lines.
pub fn normalize_narrative(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in text.trim().lines().map(str::trim_end) {
        if line.is_empty() && out.last().is_some_and(|l| l.is_empty()) {
            continue;
        }
        out.push(line);
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::deck;
    use arcana_core::{Intent, Orientation, Pick, Position, TopicCategory};
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::Mutex;

    struct MockGenerator {
        reply: RemoteResult<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        fn new(reply: RemoteResult<String>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for Arc<MockGenerator> {
        async fn generate(&self, prompt: &str) -> RemoteResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    fn picks() -> Vec<Pick> {
        vec![Pick {
            card: deck::find("The Star").unwrap(),
            position: Position::Answer,
            orientation: Orientation::Upright,
        }]
    }

    fn request(picks: &[Pick]) -> PromptRequest<'_> {
        PromptRequest {
            question: "Will the move go well?",
            intent: Intent::YesNo,
            category: TopicCategory::Travel,
            picks,
        }
    }

    #[tokio::test]
    async fn success_attaches_narrative() {
        let mock = Arc::new(MockGenerator::new(Ok("  Yes.\n\n\n\nGo.  ".to_string())));
        let adapter = RemoteReadingAdapter::new(Arc::clone(&mock));
        let picks = picks();
        let reading = adapter.interpret(&request(&picks)).await;
        assert_eq!(reading.narrative.as_deref(), Some("Yes.\n\nGo."));
        assert_eq!(reading.picks, picks);
        assert_eq!(mock.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn every_failure_falls_back_after_one_attempt() {
        let failures = [
            RemoteError::Configuration("no key".into()),
            RemoteError::Transport("status 500".into()),
            RemoteError::Format("no content".into()),
        ];
        let picks = picks();
        let expected = compose(&picks, Intent::YesNo, TopicCategory::Travel);
        for failure in failures {
            let mock = Arc::new(MockGenerator::new(Err(failure)));
            let adapter = RemoteReadingAdapter::new(Arc::clone(&mock));
            let reading = adapter.interpret(&request(&picks)).await;
            assert_eq!(reading, expected);
            assert_eq!(mock.prompts.lock().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn blank_reply_falls_back() {
        let mock = Arc::new(MockGenerator::new(Ok(" \n\n ".to_string())));
        let adapter = RemoteReadingAdapter::new(mock);
        let picks = picks();
        let reading = adapter.interpret(&request(&picks)).await;
        assert!(reading.narrative.is_none());
    }

    #[tokio::test]
    async fn prompt_carries_question() {
        let mock = Arc::new(MockGenerator::new(Ok("ok".to_string())));
        let adapter = RemoteReadingAdapter::new(Arc::clone(&mock));
        let picks = picks();
        adapter.interpret(&request(&picks)).await;
        let prompts = mock.prompts.lock().unwrap();
        assert!(prompts[0].contains("Will the move go well?"));
        assert!(prompts[0].contains("answer - The Star (upright)"));
    }

    #[tokio::test]
    async fn unconfigured_provider_falls_back() {
        let adapter = RemoteReadingAdapter::from_config(RemoteConfig::default()).unwrap();
        let picks = picks();
        let reading = adapter.interpret(&request(&picks)).await;
        assert!(!reading.is_remote());
        assert_eq!(reading.interpretations.len(), 1);
    }

    #[test]
    fn normalize_collapses_blank_runs() {
        assert_eq!(normalize_narrative("a  \n\n\n b\n"), "a\n\n b");
        assert_eq!(normalize_narrative("\n\n"), "");
    }

    proptest! {
        #[test]
        fn normalized_text_has_no_blank_runs(text in "[ a-z\n]{0,40}") {
            let out = normalize_narrative(&text);
            prop_assert!(!out.contains("\n\n\n"));
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }
}
