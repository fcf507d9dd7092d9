//! Reading composition.
//!
//! [`compose`] turns resolved picks into a complete [`Reading`] using the
//! static tables in [`meanings`]. It never fails: cards and positions
//! without curated text read with generic fallbacks.

pub mod meanings;
pub mod render;
pub mod supplement;
pub mod synthesis;

use serde::Serialize;

use crate::draw::Pick;
use crate::intent::Intent;
use crate::topic::TopicCategory;

pub use meanings::{FALLBACK_CORE_MEANING, FALLBACK_DETAILED_ANALYSIS, FALLBACK_GUIDANCE};
pub use render::render;
pub use supplement::SupplementKind;
pub use synthesis::EnergyTrend;

/// Whether a reading answers the question or follows up on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "supplement", rename_all = "lowercase")]
pub enum ReadingKind {
    /// A reading of the full spread.
    Full,
    /// A single follow-up card.
    Supplemental(SupplementKind),
}

/// Interpretation of one pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardInterpretation {
    /// Keyword summary.
    pub core_meaning: &'static str,
    /// A few sentences of analysis.
    pub detailed_analysis: &'static str,
    /// What the position means for this reading.
    pub guidance: &'static str,
    /// Topic-specific line, for the cards that have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_insight: Option<&'static str>,
    /// What a supplemental card brings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<&'static str>,
}

/// A finished reading. Plain data; render it with [`render()`] or serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// Full or supplemental.
    pub kind: ReadingKind,
    /// Picks in spread order.
    pub picks: Vec<Pick>,
    /// One interpretation per pick, same order.
    pub interpretations: Vec<CardInterpretation>,
    /// Intent of the question.
    pub intent: Intent,
    /// Topic of the question.
    pub category: TopicCategory,
    /// Energy trend detected from the cards (full readings only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyTrend>,
    /// Overall synthesis.
    pub synthesis: String,
    /// Key advice.
    pub advice: Vec<String>,
    /// Remotely generated narrative, when one was obtained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

impl Reading {
    /// Heading for the reading.
    pub fn title(&self) -> String {
        match self.kind {
            ReadingKind::Full => format!("Tarot Reading: {} Analysis", self.category),
            ReadingKind::Supplemental(kind) => kind.title().to_string(),
        }
    }

    /// One-line introduction.
    pub fn description(&self) -> String {
        match self.kind {
            ReadingKind::Full => {
                let n = self.picks.len();
                format!(
                    "{n} card{} drawn using the \"{}\" spread to read the energy of your {}.",
                    if n == 1 { " was" } else { "s were" },
                    self.intent.spread_name(),
                    self.category.display_name()
                )
            }
            ReadingKind::Supplemental(kind) => kind.description().to_string(),
        }
    }

    /// Attach a remotely generated narrative.
    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = Some(narrative.into());
        self
    }

    /// Whether the reading carries a remote narrative.
    pub fn is_remote(&self) -> bool {
        self.narrative.is_some()
    }
}

fn interpret(pick: &Pick, category: TopicCategory) -> CardInterpretation {
    let meaning = meanings::meaning(pick.card, pick.orientation);
    CardInterpretation {
        core_meaning: meaning.core,
        detailed_analysis: meaning.detailed,
        guidance: meanings::guidance(pick.position),
        topic_insight: meanings::topic_insight(pick.card, category),
        focus: None,
    }
}

/// Compose a full reading.
pub fn compose(picks: &[Pick], intent: Intent, category: TopicCategory) -> Reading {
    let interpretations = picks.iter().map(|p| interpret(p, category)).collect();
    let (energy, synthesis) = synthesis::synthesize(picks, category);
    tracing::debug!(%intent, %category, %energy, cards = picks.len(), "composed reading");
    Reading {
        kind: ReadingKind::Full,
        picks: picks.to_vec(),
        interpretations,
        intent,
        category,
        energy: Some(energy),
        synthesis,
        advice: synthesis::advice(intent, category),
        narrative: None,
    }
}

/// Compose a single-card follow-up reading.
pub fn compose_supplemental(
    pick: Pick,
    kind: SupplementKind,
    intent: Intent,
    category: TopicCategory,
) -> Reading {
    let interpretation = CardInterpretation {
        guidance: kind.guidance(),
        focus: Some(kind.focus(pick.card)),
        ..interpret(&pick, category)
    };
    tracing::debug!(%kind, card = pick.card.name, "composed supplemental reading");
    Reading {
        kind: ReadingKind::Supplemental(kind),
        picks: vec![pick],
        interpretations: vec![interpretation],
        intent,
        category,
        energy: None,
        synthesis: kind.synthesis(category),
        advice: kind.advice(),
        narrative: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck;
    use crate::draw::Orientation;
    use crate::spread::Position;

    fn pick(name: &str, position: Position, orientation: Orientation) -> Pick {
        Pick {
            card: deck::find(name).unwrap(),
            position,
            orientation,
        }
    }

    fn trend_picks() -> Vec<Pick> {
        vec![
            pick("The Fool", Position::PastOrigin, Orientation::Upright),
            pick("Death", Position::PresentDevelopment, Orientation::Reversed),
            pick("Three of Swords", Position::FutureTrend, Orientation::Upright),
        ]
    }

    #[test]
    fn one_interpretation_per_pick() {
        let reading = compose(&trend_picks(), Intent::Trend, TopicCategory::Love);
        assert_eq!(reading.picks.len(), 3);
        assert_eq!(reading.interpretations.len(), 3);
        assert_eq!(reading.kind, ReadingKind::Full);
        assert_eq!(reading.energy, Some(EnergyTrend::Transforming));
        assert!(reading.narrative.is_none());
    }

    #[test]
    fn known_cards_have_meanings() {
        let reading = compose(&trend_picks(), Intent::Trend, TopicCategory::Love);
        for interp in &reading.interpretations[..2] {
            assert!(!interp.core_meaning.is_empty());
            assert!(!interp.detailed_analysis.is_empty());
            assert_ne!(interp.core_meaning, FALLBACK_CORE_MEANING);
        }
        assert!(reading.interpretations[1].core_meaning.contains("Resisting change"));
        assert!(
            reading.interpretations[0]
                .topic_insight
                .is_some_and(|t| t.starts_with("In love"))
        );
    }

    #[test]
    fn unknown_cards_get_fallback_verbatim() {
        let reading = compose(&trend_picks(), Intent::Trend, TopicCategory::Love);
        let interp = &reading.interpretations[2];
        assert_eq!(interp.core_meaning, FALLBACK_CORE_MEANING);
        assert_eq!(interp.detailed_analysis, FALLBACK_DETAILED_ANALYSIS);
        assert!(interp.topic_insight.is_none());
    }

    #[test]
    fn comprehensive_positions_get_fallback_guidance() {
        let picks = vec![
            pick("The Moon", Position::Challenge, Orientation::Upright),
            pick("The Hermit", Position::NearTerm, Orientation::Upright),
        ];
        let reading = compose(&picks, Intent::General, TopicCategory::General);
        assert_eq!(reading.interpretations[0].guidance, FALLBACK_GUIDANCE);
        assert_ne!(reading.interpretations[1].guidance, FALLBACK_GUIDANCE);
    }

    #[test]
    fn compose_is_deterministic() {
        let picks = trend_picks();
        assert_eq!(
            compose(&picks, Intent::Trend, TopicCategory::Career),
            compose(&picks, Intent::Trend, TopicCategory::Career)
        );
    }

    #[test]
    fn headings() {
        let reading = compose(&trend_picks(), Intent::Trend, TopicCategory::Career);
        assert_eq!(reading.title(), "Tarot Reading: Career Analysis");
        assert_eq!(
            reading.description(),
            "3 cards were drawn using the \"Past-Present-Future\" spread to read the energy of your career."
        );
    }

    #[test]
    fn supplemental_reading_shape() {
        let p = pick(
            "The Tower",
            Position::SupplementalGuidance,
            Orientation::Upright,
        );
        let reading = compose_supplemental(
            p,
            SupplementKind::Clarify,
            Intent::Trend,
            TopicCategory::Love,
        );
        assert_eq!(
            reading.kind,
            ReadingKind::Supplemental(SupplementKind::Clarify)
        );
        assert_eq!(reading.picks.len(), 1);
        assert_eq!(reading.energy, None);
        assert_eq!(reading.title(), SupplementKind::Clarify.title());
        let interp = &reading.interpretations[0];
        assert_eq!(interp.core_meaning, FALLBACK_CORE_MEANING);
        assert_eq!(
            interp.focus,
            Some("Accept sudden change and rebuild on new foundations")
        );
        assert_eq!(interp.guidance, SupplementKind::Clarify.guidance());
    }

    #[test]
    fn reading_serializes_to_json() {
        let reading = compose(&trend_picks(), Intent::Trend, TopicCategory::Love);
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["kind"]["type"], "full");
        assert_eq!(json["intent"], "trend");
        assert_eq!(json["picks"][0]["card"]["name"], "The Fool");
        assert_eq!(json["picks"][1]["orientation"], "reversed");
        assert_eq!(json["picks"][0]["position"], "past_origin");
        assert!(json.get("narrative").is_none());
    }

    #[test]
    fn narrative_attaches() {
        let reading = compose(&trend_picks(), Intent::Trend, TopicCategory::Love)
            .with_narrative("The cards speak.");
        assert!(reading.is_remote());
        assert_eq!(reading.narrative.as_deref(), Some("The cards speak."));
    }
}
