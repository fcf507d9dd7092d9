//! Topic categories chosen by the querent.
//!
//! The category never influences card selection or classification; it only
//! fills the subject slot of generated text ("your career", "your health").

use serde::{Deserialize, Serialize};

/// Subject area of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicCategory {
    /// Romance and partnership.
    Love,
    /// Work and vocation.
    Career,
    /// Body and wellbeing.
    Health,
    /// Money and investments.
    Finance,
    /// Home and relatives.
    Family,
    /// School and learning.
    Study,
    /// Friends and social circle.
    Friendship,
    /// Journeys and moves.
    Travel,
    /// A pending decision.
    Decision,
    /// Inner life.
    Spiritual,
    /// No particular subject.
    #[default]
    General,
}

impl TopicCategory {
    /// Parse a category from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "love" | "romance" | "relationship" | "relationships" | "感情" => Some(Self::Love),
            "career" | "work" | "job" | "事业" => Some(Self::Career),
            "health" | "健康" => Some(Self::Health),
            "finance" | "money" | "wealth" | "财运" => Some(Self::Finance),
            "family" | "home" | "家庭" => Some(Self::Family),
            "study" | "school" | "education" | "学业" => Some(Self::Study),
            "friendship" | "friends" | "友情" => Some(Self::Friendship),
            "travel" | "trip" | "出行" => Some(Self::Travel),
            "decision" | "决策" => Some(Self::Decision),
            "spiritual" | "spirit" | "心灵" => Some(Self::Spiritual),
            "general" | "综合" => Some(Self::General),
            _ => None,
        }
    }

    /// All categories in menu order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Love,
            Self::Career,
            Self::Health,
            Self::Finance,
            Self::Family,
            Self::Study,
            Self::Friendship,
            Self::Travel,
            Self::Decision,
            Self::Spiritual,
            Self::General,
        ]
    }

    /// Name substituted into generated text.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Career => "career",
            Self::Health => "health",
            Self::Finance => "finances",
            Self::Family => "family",
            Self::Study => "studies",
            Self::Friendship => "friendships",
            Self::Travel => "travel",
            Self::Decision => "decision",
            Self::Spiritual => "spiritual life",
            Self::General => "overall situation",
        }
    }

    /// An example question shown when the category is picked.
    pub fn suggestion(self) -> &'static str {
        match self {
            Self::Love => {
                "e.g. How will my love life develop? Should I make the first move?"
            }
            Self::Career => "e.g. Is my career on the right track? Should I change jobs?",
            Self::Health => "e.g. How is my health? What should I pay attention to?",
            Self::Finance => {
                "e.g. How do my finances look? Is my investment direction sound?"
            }
            Self::Family => "e.g. How are things at home? How can I improve them?",
            _ => "e.g. What is the main challenge I face right now? How should I respond?",
        }
    }
}

impl std::fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Love => write!(f, "Love"),
            Self::Career => write!(f, "Career"),
            Self::Health => write!(f, "Health"),
            Self::Finance => write!(f, "Finance"),
            Self::Family => write!(f, "Family"),
            Self::Study => write!(f, "Study"),
            Self::Friendship => write!(f, "Friendship"),
            Self::Travel => write!(f, "Travel"),
            Self::Decision => write!(f, "Decision"),
            Self::Spiritual => write!(f, "Spiritual"),
            Self::General => write!(f, "General"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variants() {
        assert_eq!(TopicCategory::parse("LOVE"), Some(TopicCategory::Love));
        assert_eq!(TopicCategory::parse(" work "), Some(TopicCategory::Career));
        assert_eq!(TopicCategory::parse("事业"), Some(TopicCategory::Career));
        assert_eq!(TopicCategory::parse("astrology"), None);
    }

    #[test]
    fn every_category_parses_from_its_display() {
        for topic in TopicCategory::all() {
            assert_eq!(TopicCategory::parse(&topic.to_string()), Some(*topic));
        }
    }

    #[test]
    fn default_is_general() {
        assert_eq!(TopicCategory::default(), TopicCategory::General);
        assert_eq!(TopicCategory::General.display_name(), "overall situation");
    }

    #[test]
    fn suggestions_fall_back_to_general() {
        assert_eq!(
            TopicCategory::Travel.suggestion(),
            TopicCategory::General.suggestion()
        );
        assert_ne!(
            TopicCategory::Love.suggestion(),
            TopicCategory::General.suggestion()
        );
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&TopicCategory::Finance).unwrap();
        assert_eq!(json, "\"finance\"");
        let back: TopicCategory = serde_json::from_str("\"spiritual\"").unwrap();
        assert_eq!(back, TopicCategory::Spiritual);
    }
}
