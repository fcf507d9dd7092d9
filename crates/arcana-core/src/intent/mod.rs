//! Question intent: what kind of answer the querent is looking for.
//!
//! Classification is pattern based (see [`rules`]). The display metadata on
//! [`Intent`] is informational; only the variant itself drives planning and
//! composition.

pub mod rules;

use serde::{Deserialize, Serialize};

pub use rules::{MIN_CLASSIFY_CHARS, classify, detect};

/// The classified purpose of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// A yes-or-no answer.
    YesNo,
    /// Choosing between options.
    Choice,
    /// Where something is heading.
    Trend,
    /// What is going to happen.
    Prediction,
    /// What to do.
    Advice,
    /// Why something happened.
    Reason,
    /// When something happens.
    Time,
    /// Weighing two things against each other.
    Comparison,
    /// Anything else.
    #[default]
    General,
}

impl Intent {
    /// All intents.
    pub fn all() -> &'static [Self] {
        &[
            Self::YesNo,
            Self::Choice,
            Self::Trend,
            Self::Prediction,
            Self::Advice,
            Self::Reason,
            Self::Time,
            Self::Comparison,
            Self::General,
        ]
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::YesNo => "Yes/No",
            Self::Choice => "Choice",
            Self::Trend => "Trend",
            Self::Prediction => "Prediction",
            Self::Advice => "Advice",
            Self::Reason => "Cause",
            Self::Time => "Timing",
            Self::Comparison => "Comparison",
            Self::General => "General",
        }
    }

    /// One-line description of the question type.
    pub fn hint(self) -> &'static str {
        match self {
            Self::YesNo => "Seeking a clear yes or no",
            Self::Choice => "Choosing the best of several options",
            Self::Trend => "Understanding how things develop and where they are heading",
            Self::Prediction => "Foreseeing what is likely to happen",
            Self::Advice => "Looking for concrete guidance and next steps",
            Self::Reason => "Searching for the root cause of a situation",
            Self::Time => "Asking about timing",
            Self::Comparison => "Comparing different options or situations",
            Self::General => "A broad question that needs a full view",
        }
    }

    /// Symbol shown next to the label.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::YesNo => "❓",
            Self::Choice => "🔀",
            Self::Trend => "📈",
            Self::Prediction => "🔮",
            Self::Advice => "💡",
            Self::Reason => "🔍",
            Self::Time => "⏰",
            Self::Comparison => "⚖️",
            Self::General => "🌟",
        }
    }

    /// Recommended way of reading the cards.
    pub fn reading_method(self) -> &'static str {
        match self {
            Self::YesNo => "single card with a direct answer",
            Self::Choice => "one card per option, weighed against each other",
            Self::Trend => "three-card timeline of past, present and future",
            Self::Prediction => "forecast spread revealing what may come",
            Self::Advice => "guidance spread with a concrete plan of action",
            Self::Reason => "cause-and-effect spread from surface to root",
            Self::Time => "timing spread across near, mid and long term",
            Self::Comparison => "side-by-side spread weighing strengths and weaknesses",
            Self::General => "comprehensive reading from several angles",
        }
    }

    /// Name of the spread used for this intent.
    pub fn spread_name(self) -> &'static str {
        match self {
            Self::YesNo => "Single Card Guidance",
            Self::Choice => "Choice Comparison",
            Self::Trend => "Past-Present-Future",
            Self::Prediction => "Future Forecast",
            Self::Advice => "Guidance",
            Self::Reason => "Cause Exploration",
            Self::Time => "Flow of Time",
            Self::Comparison => "Comparative Analysis",
            Self::General => "Comprehensive Reading",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<_> = Intent::all().iter().map(|i| i.label()).collect();
        assert_eq!(labels.len(), Intent::all().len());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Intent::YesNo.to_string(), "Yes/No");
        assert_eq!(Intent::Reason.to_string(), "Cause");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Intent::YesNo).unwrap();
        assert_eq!(json, "\"yesno\"");
        let back: Intent = serde_json::from_str("\"comparison\"").unwrap();
        assert_eq!(back, Intent::Comparison);
    }
}
