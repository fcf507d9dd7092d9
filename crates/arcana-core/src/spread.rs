//! Spread planning: how many cards to draw and what each position means.
//!
//! The mapping from intent to layout is a fixed table. Only General
//! questions branch, on question length: long questions get the ten-card
//! comprehensive layout, short ones the three-card past/present/future.

use serde::{Deserialize, Serialize};

use crate::error::{ArcanaError, ArcanaResult};
use crate::intent::Intent;

/// General questions longer than this (in characters) get the ten-card spread.
pub const COMPREHENSIVE_THRESHOLD: usize = 20;

/// A named slot in a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Single-card yes/no answer.
    Answer,
    /// First option of a choice or comparison.
    OptionA,
    /// Second option of a choice or comparison.
    OptionB,
    /// The coming weeks.
    NearTerm,
    /// The coming months.
    MidTerm,
    /// The longer run.
    LongTerm,
    /// The visible cause.
    SurfaceCause,
    /// The cause beneath it.
    DeeperCause,
    /// Where it all started.
    RootCause,
    /// Trend spread: where things came from.
    PastOrigin,
    /// Trend spread: what is unfolding now.
    PresentDevelopment,
    /// Trend spread: where things are heading.
    FutureTrend,
    /// Advice spread: the situation as it stands.
    CurrentAnalysis,
    /// Advice spread: what to do.
    ActionSuggestion,
    /// Advice spread: what doing it brings.
    ExpectedResult,
    /// Prediction spread: the present state.
    CurrentState,
    /// Prediction spread: the probable next step.
    LikelyDevelopment,
    /// Prediction spread: how it ends.
    FinalOutcome,
    /// Short general spread: the past.
    PastCause,
    /// Short general spread: the present.
    PresentSituation,
    /// Short general spread: the future.
    FutureResult,
    /// Comprehensive spread: the heart of the matter.
    CurrentSituation,
    /// Comprehensive spread: what crosses it.
    Challenge,
    /// Comprehensive spread: the recent past.
    Past,
    /// Comprehensive spread: the near future.
    Future,
    /// Comprehensive spread: the best achievable result.
    PossibleOutcome,
    /// Comprehensive spread: the querent's stance.
    YourApproach,
    /// Comprehensive spread: other people and circumstances.
    ExternalInfluence,
    /// Comprehensive spread: hopes and fears.
    HopesFears,
    /// Comprehensive spread: the final result.
    FinalResult,
    /// A single follow-up card.
    SupplementalGuidance,
}

impl Position {
    /// The position's label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::OptionA => "option A",
            Self::OptionB => "option B",
            Self::NearTerm => "near term",
            Self::MidTerm => "mid term",
            Self::LongTerm => "long term",
            Self::SurfaceCause => "surface cause",
            Self::DeeperCause => "deeper cause",
            Self::RootCause => "root cause",
            Self::PastOrigin => "past/origin",
            Self::PresentDevelopment => "present/development",
            Self::FutureTrend => "future/trend",
            Self::CurrentAnalysis => "current analysis",
            Self::ActionSuggestion => "action suggestion",
            Self::ExpectedResult => "expected result",
            Self::CurrentState => "current state",
            Self::LikelyDevelopment => "likely development",
            Self::FinalOutcome => "final outcome",
            Self::PastCause => "past/cause",
            Self::PresentSituation => "present/situation",
            Self::FutureResult => "future/result",
            Self::CurrentSituation => "current situation",
            Self::Challenge => "challenge",
            Self::Past => "past",
            Self::Future => "future",
            Self::PossibleOutcome => "possible outcome",
            Self::YourApproach => "your approach",
            Self::ExternalInfluence => "external influence",
            Self::HopesFears => "hopes/fears",
            Self::FinalResult => "final result",
            Self::SupplementalGuidance => "supplemental guidance",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const YES_NO: &[Position] = &[Position::Answer];
const TWO_OPTIONS: &[Position] = &[Position::OptionA, Position::OptionB];
const TIME: &[Position] = &[Position::NearTerm, Position::MidTerm, Position::LongTerm];
const REASON: &[Position] = &[
    Position::SurfaceCause,
    Position::DeeperCause,
    Position::RootCause,
];
const TREND: &[Position] = &[
    Position::PastOrigin,
    Position::PresentDevelopment,
    Position::FutureTrend,
];
const ADVICE: &[Position] = &[
    Position::CurrentAnalysis,
    Position::ActionSuggestion,
    Position::ExpectedResult,
];
const PREDICTION: &[Position] = &[
    Position::CurrentState,
    Position::LikelyDevelopment,
    Position::FinalOutcome,
];
const GENERAL_SHORT: &[Position] = &[
    Position::PastCause,
    Position::PresentSituation,
    Position::FutureResult,
];
const GENERAL_COMPREHENSIVE: &[Position] = &[
    Position::CurrentSituation,
    Position::Challenge,
    Position::Past,
    Position::Future,
    Position::PossibleOutcome,
    Position::NearTerm,
    Position::YourApproach,
    Position::ExternalInfluence,
    Position::HopesFears,
    Position::FinalResult,
];

/// The layout of one reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spread {
    positions: Vec<Position>,
}

impl Spread {
    /// Build a spread from an ordered list of positions. A spread needs at
    /// least one position.
    pub fn new(positions: Vec<Position>) -> ArcanaResult<Self> {
        if positions.is_empty() {
            return Err(ArcanaError::EmptySpread);
        }
        Ok(Self { positions })
    }

    fn from_table(positions: &[Position]) -> Self {
        Self {
            positions: positions.to_vec(),
        }
    }

    /// The one-card layout used for follow-up draws.
    pub fn supplemental() -> Self {
        Self::from_table(&[Position::SupplementalGuidance])
    }

    /// Number of cards to draw. Always equals the number of positions.
    pub fn card_count(&self) -> usize {
        self.positions.len()
    }

    /// Positions in draw order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Position labels in draw order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.positions.iter().map(|p| p.label()).collect()
    }

    /// Whether this is the ten-card comprehensive layout.
    pub fn is_comprehensive(&self) -> bool {
        self.positions == GENERAL_COMPREHENSIVE
    }
}

/// Plan the spread for an intent. `question_len` is the question length in
/// characters and only matters for General.
pub fn plan(intent: Intent, question_len: usize) -> Spread {
    let positions = match intent {
        Intent::YesNo => YES_NO,
        Intent::Choice | Intent::Comparison => TWO_OPTIONS,
        Intent::Time => TIME,
        Intent::Reason => REASON,
        Intent::Trend => TREND,
        Intent::Advice => ADVICE,
        Intent::Prediction => PREDICTION,
        Intent::General if question_len > COMPREHENSIVE_THRESHOLD => GENERAL_COMPREHENSIVE,
        Intent::General => GENERAL_SHORT,
    };
    let spread = Spread::from_table(positions);
    tracing::debug!(%intent, question_len, cards = spread.card_count(), "planned spread");
    spread
}

/// Plan the spread for a question text and its intent.
pub fn plan_for_question(intent: Intent, question: &str) -> Spread {
    plan(intent, question.trim().chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_table() {
        let cases: &[(Intent, &[&str])] = &[
            (Intent::YesNo, &["answer"]),
            (Intent::Choice, &["option A", "option B"]),
            (Intent::Comparison, &["option A", "option B"]),
            (Intent::Time, &["near term", "mid term", "long term"]),
            (Intent::Reason, &["surface cause", "deeper cause", "root cause"]),
            (
                Intent::Trend,
                &["past/origin", "present/development", "future/trend"],
            ),
            (
                Intent::Advice,
                &["current analysis", "action suggestion", "expected result"],
            ),
            (
                Intent::Prediction,
                &["current state", "likely development", "final outcome"],
            ),
        ];
        for (intent, labels) in cases {
            let spread = plan(*intent, 0);
            assert_eq!(spread.labels(), labels.to_vec(), "{intent}");
            assert_eq!(spread.card_count(), labels.len());
        }
    }

    #[test]
    fn long_general_question_gets_comprehensive_spread() {
        let spread = plan(Intent::General, 25);
        assert_eq!(spread.card_count(), 10);
        assert!(spread.is_comprehensive());
        assert_eq!(
            spread.labels(),
            vec![
                "current situation",
                "challenge",
                "past",
                "future",
                "possible outcome",
                "near term",
                "your approach",
                "external influence",
                "hopes/fears",
                "final result",
            ]
        );
    }

    #[test]
    fn short_general_question_gets_three_cards() {
        let spread = plan(Intent::General, 10);
        assert_eq!(
            spread.labels(),
            vec!["past/cause", "present/situation", "future/result"]
        );
        assert!(!spread.is_comprehensive());
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(plan(Intent::General, 20).card_count(), 3);
        assert_eq!(plan(Intent::General, 21).card_count(), 10);
    }

    #[test]
    fn question_length_counts_characters() {
        // 22 CJK characters, far more bytes.
        let q = "请全面地看看我今年整体的运势与各方面的状况吧";
        assert_eq!(q.chars().count(), 22);
        assert_eq!(plan_for_question(Intent::General, q).card_count(), 10);
        assert_eq!(plan_for_question(Intent::General, "说说我的近况").card_count(), 3);
    }

    #[test]
    fn length_ignored_outside_general() {
        assert_eq!(plan(Intent::Trend, 500), plan(Intent::Trend, 0));
    }

    #[test]
    fn empty_spread_rejected() {
        assert_eq!(Spread::new(Vec::new()), Err(ArcanaError::EmptySpread));
        let custom = Spread::new(vec![Position::Past, Position::Future]).unwrap();
        assert_eq!(custom.labels(), vec!["past", "future"]);
    }

    #[test]
    fn supplemental_spread() {
        let spread = Spread::supplemental();
        assert_eq!(spread.labels(), vec!["supplemental guidance"]);
    }

    proptest! {
        #[test]
        fn positions_match_count(idx in 0usize..9, len in 0usize..200) {
            let intent = Intent::all()[idx];
            let spread = plan(intent, len);
            prop_assert_eq!(spread.positions().len(), spread.card_count());
            prop_assert!(spread.card_count() >= 1);
        }

        #[test]
        fn plan_is_idempotent(idx in 0usize..9, len in 0usize..200) {
            let intent = Intent::all()[idx];
            prop_assert_eq!(plan(intent, len), plan(intent, len));
        }
    }
}
