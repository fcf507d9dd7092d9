//! The session value.
//!
//! A [`Session`] holds the current question, its topic and the readings
//! drawn for it. Transitions consume the session and hand back the next
//! one; resetting is just building a fresh value.

use serde::Serialize;

use crate::config::SessionConfig;
use crate::draw::{self, Pick, RandomSource, Selection};
use crate::error::{ArcanaError, ArcanaResult};
use crate::intent::{self, Intent};
use crate::reading::{self, Reading, SupplementKind};
use crate::spread::{self, Spread};
use crate::topic::TopicCategory;

/// A classified question and the spread planned for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// The question as asked, trimmed.
    pub text: String,
    /// Its intent.
    pub intent: Intent,
    /// The planned spread.
    pub spread: Spread,
}

impl Question {
    /// Classify and plan a question.
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        let intent = intent::classify(&text);
        let spread = spread::plan_for_question(intent, &text);
        Self {
            text,
            intent,
            spread,
        }
    }
}

/// A divination session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    #[serde(skip)]
    min_question_chars: usize,
    category: TopicCategory,
    question: Option<Question>,
    readings: Vec<Reading>,
}

impl Session {
    /// Create an empty session.
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_min_chars(config.min_question_chars)
    }

    fn with_min_chars(min_question_chars: usize) -> Self {
        Self {
            min_question_chars,
            category: TopicCategory::default(),
            question: None,
            readings: Vec::new(),
        }
    }

    /// The chosen topic.
    pub fn category(&self) -> TopicCategory {
        self.category
    }

    /// The current question, if one was asked.
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Readings for the current question, oldest first.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// The most recent reading.
    pub fn last_reading(&self) -> Option<&Reading> {
        self.readings.last()
    }

    /// Choose the topic.
    pub fn with_category(self, category: TopicCategory) -> Self {
        Self { category, ..self }
    }

    /// Ask a new question. Earlier readings are discarded.
    pub fn ask(self, text: &str) -> ArcanaResult<Self> {
        if text.trim().chars().count() < self.min_question_chars {
            return Err(ArcanaError::QuestionTooShort {
                min: self.min_question_chars,
            });
        }
        let question = Question::new(text);
        tracing::debug!(
            intent = %question.intent,
            cards = question.spread.card_count(),
            "question asked"
        );
        Ok(Self {
            question: Some(question),
            readings: Vec::new(),
            ..self
        })
    }

    fn require_question(&self) -> ArcanaResult<&Question> {
        self.question.as_ref().ok_or(ArcanaError::NoQuestion)
    }

    /// Draw random cards for the current spread without composing them.
    pub fn draw_picks<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ArcanaResult<Vec<Pick>> {
        draw::resolve_random(&self.require_question()?.spread, rng)
    }

    /// Start a manual selection for the current spread.
    pub fn begin_selection(&self) -> ArcanaResult<Selection> {
        Ok(Selection::begin(self.require_question()?.spread.clone()))
    }

    /// Turn a completed selection into picks.
    pub fn selection_picks<R: RandomSource + ?Sized>(
        &self,
        selection: Selection,
        rng: &mut R,
    ) -> ArcanaResult<Vec<Pick>> {
        self.require_question()?;
        let (spread, names) = selection.finish()?;
        draw::resolve_from_selection(&names, &spread, rng)
    }

    /// Compose a full reading for picks with the local composer.
    pub fn compose(&self, picks: &[Pick]) -> ArcanaResult<Reading> {
        let question = self.require_question()?;
        Ok(reading::compose(picks, question.intent, self.category))
    }

    /// Append a finished reading.
    pub fn record(mut self, reading: Reading) -> Self {
        self.readings.push(reading);
        self
    }

    /// Draw and compose a full reading in one step.
    pub fn draw<R: RandomSource + ?Sized>(self, rng: &mut R) -> ArcanaResult<Self> {
        let picks = self.draw_picks(rng)?;
        let reading = self.compose(&picks)?;
        Ok(self.record(reading))
    }

    fn require_reading(&self) -> ArcanaResult<Intent> {
        let question = self.require_question()?;
        if self.readings.is_empty() {
            return Err(ArcanaError::NoReading);
        }
        Ok(question.intent)
    }

    fn record_supplement(
        self,
        mut picks: Vec<Pick>,
        kind: SupplementKind,
        intent: Intent,
    ) -> ArcanaResult<Self> {
        let pick = picks.pop().ok_or(ArcanaError::PositionMismatch {
            positions: 1,
            cards: 0,
        })?;
        let reading = reading::compose_supplemental(pick, kind, intent, self.category);
        Ok(self.record(reading))
    }

    /// Draw one more card to follow up on the readings so far.
    pub fn supplement<R: RandomSource + ?Sized>(
        self,
        kind: SupplementKind,
        rng: &mut R,
    ) -> ArcanaResult<Self> {
        let intent = self.require_reading()?;
        let picks = draw::resolve_random(&Spread::supplemental(), rng)?;
        self.record_supplement(picks, kind, intent)
    }

    /// Start choosing the follow-up card by hand.
    pub fn begin_supplement_selection(&self) -> ArcanaResult<Selection> {
        self.require_reading()?;
        Ok(Selection::begin(Spread::supplemental()))
    }

    /// Follow up with a hand-chosen card from a completed selection.
    pub fn supplement_from_selection<R: RandomSource + ?Sized>(
        self,
        selection: Selection,
        kind: SupplementKind,
        rng: &mut R,
    ) -> ArcanaResult<Self> {
        let intent = self.require_reading()?;
        let (_, names) = selection.finish()?;
        let picks = draw::resolve_from_selection(&names, &Spread::supplemental(), rng)?;
        self.record_supplement(picks, kind, intent)
    }

    /// Start over with the same configuration.
    pub fn reset(self) -> Self {
        tracing::debug!("session reset");
        Self::with_min_chars(self.min_question_chars)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::ReadingKind;
    use crate::spread::Position;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session {
        Session::new(&SessionConfig::default())
    }

    #[test]
    fn ask_classifies_and_plans() {
        let s = session().ask("我的事业接下来会如何发展？").unwrap();
        let q = s.question().unwrap();
        assert_eq!(q.intent, Intent::Trend);
        assert_eq!(q.spread.card_count(), 3);
    }

    #[test]
    fn short_question_rejected() {
        assert_eq!(
            session().ask("运势").unwrap_err(),
            ArcanaError::QuestionTooShort { min: 5 }
        );
        assert!(session().ask("hello").is_ok());
    }

    #[test]
    fn draw_requires_question() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            session().draw(&mut rng).unwrap_err(),
            ArcanaError::NoQuestion
        );
    }

    #[test]
    fn draw_appends_reading() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = session()
            .with_category(TopicCategory::Career)
            .ask("Should I take the offer or stay?")
            .unwrap()
            .draw(&mut rng)
            .unwrap();
        assert_eq!(s.readings().len(), 1);
        let reading = s.last_reading().unwrap();
        assert_eq!(reading.picks.len(), 2);
        assert_eq!(reading.category, TopicCategory::Career);
        assert_eq!(reading.intent, Intent::Choice);
    }

    #[test]
    fn supplements_append_without_replacing() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = session().ask("Will she call me back").unwrap();
        assert_eq!(
            s.clone()
                .supplement(SupplementKind::Additional, &mut rng)
                .unwrap_err(),
            ArcanaError::NoReading
        );
        let s = s.draw(&mut rng).unwrap();
        let full = s.readings()[0].clone();
        let s = s
            .supplement(SupplementKind::Additional, &mut rng)
            .unwrap()
            .supplement(SupplementKind::Clarify, &mut rng)
            .unwrap();
        let kinds: Vec<_> = s.readings().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ReadingKind::Full,
                ReadingKind::Supplemental(SupplementKind::Additional),
                ReadingKind::Supplemental(SupplementKind::Clarify),
            ]
        );
        assert_eq!(s.readings()[0], full);
        for reading in &s.readings()[1..] {
            assert_eq!(reading.picks.len(), 1);
            assert_eq!(reading.picks[0].position, Position::SupplementalGuidance);
        }
    }

    #[test]
    fn supplement_cards_can_be_chosen() {
        let mut rng = StdRng::seed_from_u64(9);
        let s = session().ask("Will she call me back").unwrap();
        assert_eq!(
            s.begin_supplement_selection().unwrap_err(),
            ArcanaError::NoReading
        );
        let s = s.draw(&mut rng).unwrap();
        let full = s.readings()[0].clone();

        let mut sel = s.begin_supplement_selection().unwrap();
        assert_eq!(sel.next_position(), Some("supplemental guidance"));
        sel.accept("the star").unwrap();
        assert_eq!(
            sel.accept("death").unwrap_err(),
            ArcanaError::SelectionComplete(1)
        );
        let s = s
            .supplement_from_selection(sel, SupplementKind::Additional, &mut rng)
            .unwrap();

        let mut sel = s.begin_supplement_selection().unwrap();
        sel.accept("Death").unwrap();
        let s = s
            .supplement_from_selection(sel, SupplementKind::Clarify, &mut rng)
            .unwrap();

        assert_eq!(s.readings().len(), 3);
        assert_eq!(s.readings()[0], full);
        let added = &s.readings()[1];
        assert_eq!(
            added.kind,
            ReadingKind::Supplemental(SupplementKind::Additional)
        );
        assert_eq!(added.picks[0].card.name, "The Star");
        let clarified = &s.readings()[2];
        assert_eq!(
            clarified.kind,
            ReadingKind::Supplemental(SupplementKind::Clarify)
        );
        assert_eq!(clarified.picks[0].card.name, "Death");
        assert_eq!(clarified.picks[0].position, Position::SupplementalGuidance);
    }

    #[test]
    fn unfinished_supplement_selection_is_rejected() {
        let mut rng = StdRng::seed_from_u64(9);
        let s = session()
            .ask("Will she call me back")
            .unwrap()
            .draw(&mut rng)
            .unwrap();
        let sel = s.begin_supplement_selection().unwrap();
        assert_eq!(
            s.supplement_from_selection(sel, SupplementKind::Clarify, &mut rng)
                .unwrap_err(),
            ArcanaError::SelectionIncomplete {
                chosen: 0,
                needed: 1
            }
        );
    }

    #[test]
    fn manual_selection_flow() {
        let mut rng = StdRng::seed_from_u64(3);
        let s = session().ask("为什么他不回我消息").unwrap();
        let mut sel = s.begin_selection().unwrap();
        for name in ["The Moon", "Five of Cups", "The Devil"] {
            sel.accept(name).unwrap();
        }
        let picks = s.selection_picks(sel, &mut rng).unwrap();
        let reading = s.compose(&picks).unwrap();
        let s = s.record(reading);
        let names: Vec<_> = s.readings()[0].picks.iter().map(|p| p.card.name).collect();
        assert_eq!(names, vec!["The Moon", "Five of Cups", "The Devil"]);
        assert_eq!(s.readings()[0].picks[2].position.label(), "root cause");
    }

    #[test]
    fn new_question_clears_readings() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = session()
            .ask("Will it rain tomorrow")
            .unwrap()
            .draw(&mut rng)
            .unwrap()
            .ask("Tell me about my week")
            .unwrap();
        assert!(s.readings().is_empty());
        assert_eq!(s.question().unwrap().intent, Intent::General);
    }

    #[test]
    fn reset_keeps_configuration_only() {
        let cfg = SessionConfig::default().with_min_question_chars(2);
        let s = Session::new(&cfg)
            .with_category(TopicCategory::Love)
            .ask("ok?")
            .unwrap();
        let s = s.reset();
        assert_eq!(s.category(), TopicCategory::General);
        assert!(s.question().is_none());
        assert_eq!(s, Session::new(&cfg));
    }
}
