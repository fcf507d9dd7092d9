//! Line-oriented console over a [`Session`].
//!
//! Each input line is one command; [`Console::process`] returns the text to
//! print. Failed commands leave the session exactly as it was.

use arcana_core::reading::render;
use arcana_core::{
    ArcanaError, ArcanaResult, Pick, Reading, Selection, Session, SessionConfig, SupplementKind,
    TopicCategory,
};
use arcana_remote::{PromptRequest, RemoteConfig};
use rand::rngs::StdRng;

use crate::commands::{self, Remote};

const HELP: &str = "\
Commands:
  ask <question>     Ask a new question (clears earlier readings)
  topic [name]       Show or set the topic (love, career, health, ...)
  draw               Draw cards at random for the current question
  pick <card>        Choose the next card yourself, e.g. 'pick the star'
  more [pick]        Draw one additional card, or choose it with 'pick'
  clarify [pick]     Draw one clarifying card, or choose it with 'pick'
  show               Show the latest reading again
  status             Show the session state
  reset              Start over
  help               Show this help
  quit, q            Leave the session";

/// Interactive reading console.
pub struct Console {
    session: Session,
    selection: Option<Selection>,
    supplement: Option<SupplementKind>,
    rng: StdRng,
    remote: Option<Remote>,
    remote_status: String,
}

impl Console {
    /// Start a console. Remote readings are used when `remote` carries a key.
    pub fn new(seed: Option<u64>, remote: RemoteConfig) -> Result<Self, String> {
        let mut config = SessionConfig::default();
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        let remote_status = remote.status().to_string();
        Ok(Self {
            session: Session::new(&config),
            selection: None,
            supplement: None,
            rng: config.rng(),
            remote: commands::remote(remote)?,
            remote_status,
        })
    }

    /// Start with a topic already chosen.
    pub fn with_category(mut self, category: TopicCategory) -> Self {
        self.session = self.session.with_category(category);
        self
    }

    /// Remote configuration summary.
    pub fn remote_status(&self) -> &str {
        &self.remote_status
    }

    /// Handle one line of input.
    pub fn process(&mut self, input: &str) -> ArcanaResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "ask" => self.do_ask(rest),
            "topic" => self.do_topic(rest),
            "draw" => self.do_draw(),
            "pick" => self.do_pick(rest),
            "more" => self.do_supplement(SupplementKind::Additional, rest),
            "clarify" => self.do_supplement(SupplementKind::Clarify, rest),
            "show" => self.do_show(),
            "status" => Ok(self.do_status()),
            "reset" => Ok(self.do_reset()),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(ArcanaError::UnknownCommand(cmd)),
        }
    }

    fn do_ask(&mut self, rest: &str) -> ArcanaResult<String> {
        self.session = self.session.clone().ask(rest)?;
        self.clear_selection();

        let question = self.session.question().ok_or(ArcanaError::NoQuestion)?;
        let intent = question.intent;
        let mut out = format!("{} {}: {}\n", intent.glyph(), intent.label(), intent.hint());
        out.push_str(&format!(
            "Spread: {} ({} card{})\n",
            intent.spread_name(),
            question.spread.card_count(),
            if question.spread.card_count() == 1 { "" } else { "s" }
        ));
        out.push_str(&format!(
            "Positions: {}\n",
            question.spread.labels().join(", ")
        ));
        out.push_str("Type 'draw' for a random draw, or 'pick <card>' to choose each card.");
        Ok(out)
    }

    fn do_topic(&mut self, rest: &str) -> ArcanaResult<String> {
        if rest.is_empty() {
            let names: Vec<String> = TopicCategory::all()
                .iter()
                .map(|t| {
                    if *t == self.session.category() {
                        format!("[{t}]")
                    } else {
                        t.to_string()
                    }
                })
                .collect();
            return Ok(format!("Topics: {}", names.join(" ")));
        }

        let category =
            TopicCategory::parse(rest).ok_or_else(|| ArcanaError::UnknownTopic(rest.to_string()))?;
        self.session = self.session.clone().with_category(category);
        Ok(format!("Topic: {category}\n{}", category.suggestion()))
    }

    fn do_draw(&mut self) -> ArcanaResult<String> {
        let picks = self.session.draw_picks(&mut self.rng)?;
        self.clear_selection();
        self.record_full(&picks)
    }

    fn do_pick(&mut self, rest: &str) -> ArcanaResult<String> {
        if rest.is_empty() {
            return Err(ArcanaError::InvalidChoice(
                "name a card, e.g. 'pick the star'".to_string(),
            ));
        }

        let mut selection = match self.selection.take() {
            Some(selection) => selection,
            None => {
                self.supplement = None;
                self.session.begin_selection()?
            }
        };
        let progress = match selection.accept(rest) {
            Ok(progress) => progress,
            Err(e) => {
                self.selection = Some(selection);
                return Err(e);
            }
        };

        let line = format!(
            "Card {} of {}: {}",
            progress.chosen, progress.needed, progress.card
        );
        if !progress.is_complete() {
            let next = selection.next_position().unwrap_or_default();
            self.selection = Some(selection);
            return Ok(format!("{line}\nNext position: {next}"));
        }

        let reading = match self.supplement.take() {
            Some(kind) => {
                self.session = self.session.clone().supplement_from_selection(
                    selection,
                    kind,
                    &mut self.rng,
                )?;
                self.do_show()?
            }
            None => {
                let picks = self.session.selection_picks(selection, &mut self.rng)?;
                self.record_full(&picks)?
            }
        };
        Ok(format!("{line}\n\n{reading}"))
    }

    fn do_supplement(&mut self, kind: SupplementKind, rest: &str) -> ArcanaResult<String> {
        match rest.to_lowercase().as_str() {
            "" => {
                self.session = self.session.clone().supplement(kind, &mut self.rng)?;
                self.do_show()
            }
            "pick" => {
                self.selection = Some(self.session.begin_supplement_selection()?);
                self.supplement = Some(kind);
                Ok(format!(
                    "Choose the {} card with 'pick <card>'.",
                    card_noun(kind)
                ))
            }
            other => Err(ArcanaError::InvalidChoice(format!(
                "'{other}' (expected nothing or 'pick')"
            ))),
        }
    }

    fn do_show(&self) -> ArcanaResult<String> {
        self.session
            .last_reading()
            .map(render)
            .ok_or(ArcanaError::NoReading)
    }

    fn do_status(&self) -> String {
        let mut out = format!("Topic: {}\n", self.session.category());
        match self.session.question() {
            Some(q) => {
                out.push_str(&format!("Question: {}\n", q.text));
                out.push_str(&format!(
                    "Intent: {} | Spread: {}\n",
                    q.intent,
                    q.intent.spread_name()
                ));
            }
            None => out.push_str("Question: (none)\n"),
        }
        out.push_str(&format!("Readings: {}\n", self.session.readings().len()));
        if let Some(selection) = &self.selection {
            let target = match self.supplement {
                Some(kind) => format!("{} card", card_noun(kind)),
                None => "spread".to_string(),
            };
            out.push_str(&format!(
                "Selection ({target}): {} of {} cards chosen\n",
                selection.chosen().len(),
                selection.spread().card_count()
            ));
        }
        out.push_str(&format!("Remote: {}", self.remote_status));
        out
    }

    fn do_reset(&mut self) -> String {
        self.session = self.session.clone().reset();
        self.clear_selection();
        "Session reset.".to_string()
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.supplement = None;
    }

    fn record_full(&mut self, picks: &[Pick]) -> ArcanaResult<String> {
        let reading = self.full_reading(picks)?;
        let text = render(&reading);
        self.session = self.session.clone().record(reading);
        Ok(text)
    }

    fn full_reading(&self, picks: &[Pick]) -> ArcanaResult<Reading> {
        let Some(remote) = &self.remote else {
            return self.session.compose(picks);
        };
        let question = self.session.question().ok_or(ArcanaError::NoQuestion)?;
        let request = PromptRequest {
            question: &question.text,
            intent: question.intent,
            category: self.session.category(),
            picks,
        };
        Ok(remote.runtime.block_on(remote.adapter.interpret(&request)))
    }
}

fn card_noun(kind: SupplementKind) -> &'static str {
    match kind {
        SupplementKind::Additional => "additional",
        SupplementKind::Clarify => "clarifying",
    }
}
