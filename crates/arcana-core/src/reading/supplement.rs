//! Follow-up single-card readings.

use serde::{Deserialize, Serialize};

use crate::deck::Card;
use crate::topic::TopicCategory;

use super::meanings;

/// Why an extra card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplementKind {
    /// More insight on the same question.
    Additional,
    /// Clear up something the reading left vague.
    Clarify,
}

impl SupplementKind {
    /// Reading title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Additional => "Additional Card: Further Guidance",
            Self::Clarify => "Clarifying Card: Clearer Guidance",
        }
    }

    /// One-line introduction.
    pub fn description(self) -> &'static str {
        match self {
            Self::Additional => {
                "One card was drawn to offer additional guidance and insight."
            }
            Self::Clarify => {
                "One card was drawn to clarify what was unclear in your earlier reading."
            }
        }
    }

    /// What the card adds, specific to the card where possible.
    pub fn focus(self, card: &Card) -> &'static str {
        match self {
            Self::Additional => meanings::keywords(card)
                .unwrap_or("This card brings additional guidance and insight."),
            Self::Clarify => meanings::clarify_hint(card)
                .unwrap_or("This card clarifies something important; think carefully about it."),
        }
    }

    /// Position guidance for the single card.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::Additional => {
                "This additional card offers extra guidance. Combine it with your earlier \
                 reading, weigh everything together and trust your intuition to decide."
            }
            Self::Clarify => {
                "This clarifying card sheds light on what was unclear before. Combine it with \
                 your earlier reading, weigh everything together and trust your intuition to \
                 decide."
            }
        }
    }

    /// Short synthesis.
    pub fn synthesis(self, category: TopicCategory) -> String {
        match self {
            Self::Additional => format!(
                "This card adds a new perspective on your {} question. It may reveal something \
                 you had not noticed, or suggest a new way of approaching your decision.",
                category.display_name()
            ),
            Self::Clarify => "This card clears up the vague parts of your earlier reading and \
                              gives you a clearer direction."
                .to_string(),
        }
    }

    /// Key advice.
    pub fn advice(self) -> Vec<String> {
        let noun = match self {
            Self::Additional => "additional card",
            Self::Clarify => "clarifying card",
        };
        let reveals = match self {
            Self::Additional => "new angles or hidden information",
            Self::Clarify => "hidden information or new angles",
        };
        let role = match self {
            Self::Additional => "supplements",
            Self::Clarify => "clarifies",
        };
        vec![
            format!("Consider what this {noun} says together with your earlier reading."),
            format!("Pay attention to the {reveals} it may reveal."),
            "Trust your intuition, but keep thinking clearly.".to_string(),
            format!("Remember: the {noun} {role} the original reading; it does not replace it."),
        ]
    }
}

impl std::fmt::Display for SupplementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Additional => write!(f, "additional"),
            Self::Clarify => write!(f, "clarify"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck;

    #[test]
    fn focus_uses_card_tables() {
        let tower = deck::find("The Tower").unwrap();
        assert_eq!(
            SupplementKind::Additional.focus(tower),
            "Upheaval, collapse, revelation, sudden change"
        );
        assert_eq!(
            SupplementKind::Clarify.focus(tower),
            "Accept sudden change and rebuild on new foundations"
        );
    }

    #[test]
    fn minor_cards_get_generic_focus() {
        let card = deck::find("Five of Wands").unwrap();
        assert!(SupplementKind::Additional.focus(card).starts_with("This card"));
        assert!(SupplementKind::Clarify.focus(card).starts_with("This card"));
    }

    #[test]
    fn kinds_read_differently() {
        assert_ne!(
            SupplementKind::Additional.title(),
            SupplementKind::Clarify.title()
        );
        assert!(
            SupplementKind::Additional
                .synthesis(TopicCategory::Finance)
                .contains("finances")
        );
        assert_eq!(SupplementKind::Clarify.advice().len(), 4);
        assert!(SupplementKind::Clarify.advice()[3].contains("does not replace"));
    }
}
