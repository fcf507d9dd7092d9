//! Overall synthesis and advice for a full reading.
//!
//! The synthesis looks for signal cards anywhere in the spread; the first
//! matching group decides the tone. Advice depends only on the intent.

use serde::{Deserialize, Serialize};

use crate::deck::Card;
use crate::draw::Pick;
use crate::intent::Intent;
use crate::topic::TopicCategory;

/// The overall direction of a spread's energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyTrend {
    /// Hope and success gathering.
    Ascending,
    /// A period of deep change.
    Transforming,
    /// Moving toward harmony and balance.
    Harmonizing,
    /// Slow, steady development.
    #[default]
    Steady,
}

const ASCENDING_SIGNALS: &[&str] = &["The Sun", "The Star"];
const TRANSFORMING_SIGNALS: &[&str] = &["Death", "The Tower"];
const HARMONIZING_SIGNALS: &[&str] = &["The Lovers", "Two of Cups"];

impl EnergyTrend {
    /// Detect the trend from the cards of a spread.
    pub fn detect<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let names: Vec<&str> = cards.into_iter().map(|c| c.name).collect();
        if contains_any(&names, ASCENDING_SIGNALS) {
            Self::Ascending
        } else if contains_any(&names, TRANSFORMING_SIGNALS) {
            Self::Transforming
        } else if contains_any(&names, HARMONIZING_SIGNALS) {
            Self::Harmonizing
        } else {
            Self::Steady
        }
    }

    /// Synthesis text for a topic.
    pub fn describe(self, category: TopicCategory) -> String {
        let topic = category.display_name();
        match self {
            Self::Ascending => format!(
                "Out of the present challenges, your {topic} is moving in a positive direction. \
                 The cards show hope and success gathering, a sign that a welcome change is near."
            ),
            Self::Transforming => format!(
                "Your {topic} is going through an important period of change. There may be \
                 challenges along the way, but this renewal is a necessary part of growth and \
                 will lead somewhere better."
            ),
            Self::Harmonizing => format!(
                "The energy around your {topic} is moving toward harmony and balance. Positive \
                 change may show up in relationships or choices; stay open and sincere."
            ),
            Self::Steady => format!(
                "The energy around your {topic} is developing steadily and asks for patience \
                 and persistence. Things may not be ideal yet, but with continued effort in the \
                 right direction they will gradually improve."
            ),
        }
    }
}

fn contains_any(names: &[&str], signals: &[&str]) -> bool {
    names.iter().any(|n| signals.iter().any(|s| s == n))
}

impl std::fmt::Display for EnergyTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Transforming => write!(f, "transforming"),
            Self::Harmonizing => write!(f, "harmonizing"),
            Self::Steady => write!(f, "steady"),
        }
    }
}

/// Synthesis text for a set of picks.
pub fn synthesize(picks: &[Pick], category: TopicCategory) -> (EnergyTrend, String) {
    let trend = EnergyTrend::detect(picks.iter().map(|p| p.card));
    (trend, trend.describe(category))
}

/// Key advice for an intent.
pub fn advice(intent: Intent, category: TopicCategory) -> Vec<String> {
    let topic = category.display_name();
    match intent {
        Intent::Trend => vec![
            format!(
                "If you are already committed in your {topic}: replace old quarrels with honest \
                 conversation and do not dig up the past."
            ),
            "If you are unattached: you may soon meet someone you truly click with, but watch \
             what they do as well as what they say."
                .to_string(),
            "In general: trust your intuition, but do not let expectation hide the details of \
             reality."
                .to_string(),
        ],
        Intent::Choice => vec![
            format!(
                "Weigh the pros and cons of each {topic} option carefully and do not rush the \
                 decision."
            ),
            "Consider the long-term effects and pick the option that best matches your values."
                .to_string(),
            "Trust your own judgement, but also listen to people you trust.".to_string(),
        ],
        Intent::YesNo => vec![
            format!("Follow what the card shows about your {topic} and trust your intuition."),
            "Whatever the answer, meet the outcome with a positive attitude.".to_string(),
            "Yes or no is only the beginning; what matters is how you respond.".to_string(),
        ],
        _ => vec![
            format!("Keep an open mind about your {topic} and trust your intuition."),
            "Treat the reading as a reference and decide based on your real circumstances."
                .to_string(),
            "Remember that your actions shape the final outcome.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck;

    fn cards(names: &[&str]) -> Vec<&'static Card> {
        names.iter().map(|n| deck::find(n).unwrap()).collect()
    }

    #[test]
    fn detects_each_trend() {
        assert_eq!(
            EnergyTrend::detect(cards(&["Death", "The Star"])),
            EnergyTrend::Ascending
        );
        assert_eq!(
            EnergyTrend::detect(cards(&["The Lovers", "The Tower"])),
            EnergyTrend::Transforming
        );
        assert_eq!(
            EnergyTrend::detect(cards(&["Two of Cups", "Ace of Wands"])),
            EnergyTrend::Harmonizing
        );
        assert_eq!(
            EnergyTrend::detect(cards(&["The Fool", "Ten of Swords"])),
            EnergyTrend::Steady
        );
        assert_eq!(EnergyTrend::detect(Vec::new()), EnergyTrend::Steady);
    }

    #[test]
    fn description_names_topic() {
        let text = EnergyTrend::Steady.describe(TopicCategory::Career);
        assert!(text.contains("your career"));
        let text = EnergyTrend::Ascending.describe(TopicCategory::General);
        assert!(text.contains("overall situation"));
    }

    #[test]
    fn advice_sets_by_intent() {
        let trend = advice(Intent::Trend, TopicCategory::Love);
        assert_eq!(trend.len(), 3);
        assert!(trend[0].contains("your love"));
        let choice = advice(Intent::Choice, TopicCategory::Love);
        let yes_no = advice(Intent::YesNo, TopicCategory::Love);
        let other = advice(Intent::Reason, TopicCategory::Love);
        assert_ne!(trend, choice);
        assert_ne!(choice, yes_no);
        assert_ne!(yes_no, other);
        assert_eq!(other, advice(Intent::General, TopicCategory::Love));
        assert_eq!(other, advice(Intent::Comparison, TopicCategory::Love));
    }
}
