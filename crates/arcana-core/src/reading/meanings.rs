//! Static interpretation tables.
//!
//! Only a curated subset of the deck has hand-written meanings; every other
//! card reads with the fallback text. Lookups are keyed on the major arcana
//! number so the tables cannot drift from the catalog's names.

use crate::deck::{Arcana, Card};
use crate::draw::Orientation;
use crate::spread::Position;
use crate::topic::TopicCategory;

/// Core meaning used for cards without a curated entry.
pub const FALLBACK_CORE_MEANING: &str =
    "this card offers guidance — interpret it against your situation";

/// Detailed analysis used for cards without a curated entry.
pub const FALLBACK_DETAILED_ANALYSIS: &str = "Reflect carefully on the imagery of this card and \
     relate it to your actual circumstances to understand the message it carries. Trust your \
     intuition; it will point you in the right direction.";

/// Guidance for positions without a dedicated sentence.
pub const FALLBACK_GUIDANCE: &str =
    "This position offers important guidance. Read it together with the meaning of the card.";

/// A meaning pair for one card in one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meaning {
    /// Short keyword summary.
    pub core: &'static str,
    /// A few sentences of interpretation.
    pub detailed: &'static str,
}

const FALLBACK: Meaning = Meaning {
    core: FALLBACK_CORE_MEANING,
    detailed: FALLBACK_DETAILED_ANALYSIS,
};

const fn pair(core: &'static str, detailed: &'static str) -> Meaning {
    Meaning { core, detailed }
}

fn major_number(card: &Card) -> Option<u8> {
    match card.arcana {
        Arcana::Major(n) => Some(n),
        Arcana::Minor(_) => None,
    }
}

/// Curated meaning for a card, if it has one.
pub fn curated(card: &Card, orientation: Orientation) -> Option<Meaning> {
    let reversed = orientation.is_reversed();
    let meaning = match (major_number(card)?, reversed) {
        (0, false) => pair(
            "New beginnings, adventurous spirit, fearless and innocent exploration",
            "This card marks a new chapter about to open. Keep an open mind and take the first \
             step bravely. Do not let past experience hold you back; trust your intuition, new \
             opportunities are waiting ahead.",
        ),
        (0, true) => pair(
            "Recklessness, impulsiveness, lack of planning, avoiding responsibility",
            "The reversed Fool asks you to act with care and not make hasty decisions on a \
             whim. Pause and think, make a more thorough plan, and avoid trouble born of poor \
             preparation.",
        ),
        (1, false) => pair(
            "Creativity, willpower, skill, the power to manifest",
            "The Magician says you already hold every resource and skill you need. Now is the \
             time to show what you can do: believe in your strength, focus, and put your skill \
             to work. Success is within reach.",
        ),
        (1, true) => pair(
            "Misused power, lack of skill, deception",
            "The reversed Magician asks for an honest assessment of your abilities without \
             exaggerating or hiding the facts. More study and preparation may be needed, or a \
             fresh look at your methods and motives.",
        ),
        (2, false) => pair(
            "Intuition, the subconscious, hidden wisdom, inner knowing",
            "The High Priestess reminds you to trust your intuition and inner wisdom. Silence \
             can be stronger than words; listen to your inner voice and the answer will surface \
             on its own. This is a time for reflection.",
        ),
        (2, true) => pair(
            "Ignored intuition, lack of reflection, secrets coming out",
            "The reversed High Priestess asks you to reconnect with your inner wisdom and stop \
             ignoring what your intuition tells you. More reflection may be needed, or more care \
             for your privacy.",
        ),
        (3, false) => pair(
            "Nurture, abundance, creativity, nature and fertility",
            "The Empress stands for abundance and creativity. She foretells harvest and growth \
             and asks for patience and care, nourishing what matters to you with warmth and \
             wisdom.",
        ),
        (3, true) => pair(
            "Over-dependence, lack of confidence, blocked creativity",
            "The reversed Empress asks you to regain your confidence and creativity instead of \
             leaning too heavily on others. Self-care and independence may be needed, or a new \
             balance between giving and receiving.",
        ),
        (4, false) => pair(
            "Authority, stability, leadership, order and control",
            "The Emperor stands for stability and authority. Build order and structure, and use \
             your leadership to steer the situation in the right direction.",
        ),
        (4, true) => pair(
            "Tyranny, rigidity, abuse of power",
            "The reversed Emperor asks you to stay flexible rather than domineering or stubborn. \
             More cooperation and compromise may be needed, or a second look at how you exercise \
             control.",
        ),
        (6, false) => pair(
            "Love, choice, shared values, harmonious relationships",
            "The Lovers foretell an important choice. Choose the path that truly fits your \
             values and your heart, in love or in any other major decision.",
        ),
        (6, true) => pair(
            "Imbalanced relationships, wrong choices, clashing values",
            "The reversed Lovers ask you to re-examine your choices; values may be in conflict \
             or a relationship out of balance. Understand your real needs, and the other \
             person's real situation, more deeply.",
        ),
        (11, false) => pair(
            "Balance, fairness, truth, cause and effect, responsibility",
            "Justice asks you to stay fair and balanced. The truth is about to come out; take \
             responsibility for your actions and trust that what goes around comes around.",
        ),
        (11, true) => pair(
            "Injustice, evading responsibility, imbalance",
            "Reversed Justice asks you to face unfairness squarely and not dodge responsibility. \
             Relationships may need rebalancing, or a mistake may need to be owned and \
             corrected.",
        ),
        (13, false) => pair(
            "Endings and rebirth, deep transformation, releasing the past",
            "Death foretells an important transformation. Have the courage to close the old \
             chapter and prepare for a new beginning. Change can hurt, but it is a necessary part \
             of growth.",
        ),
        (13, true) => pair(
            "Resisting change, stagnation, fear of transformation",
            "Reversed Death asks you to accept the change that is needed instead of resisting \
             it. Face your fears, or end what no longer fits of your own accord.",
        ),
        (17, false) => pair(
            "Hope, healing, spiritual guidance, inspiration",
            "The Star stands for hope and healing. Keep faith that a good future is coming, stay \
             open, and accept the guidance offered to you.",
        ),
        (17, true) => pair(
            "Lost hope, lack of faith, spiritual disorientation",
            "The reversed Star asks you to find your hope and confidence again and not be beaten \
             by temporary setbacks. Some self-healing may be needed, or a reconnection with what \
             guides you.",
        ),
        (19, false) => pair(
            "Success, vitality, innocence and joy, achievement",
            "The Sun foretells success and happiness. Keep a positive outlook and enjoy the good \
             times; your efforts will be rewarded.",
        ),
        (19, true) => pair(
            "Over-optimism, lack of realism, delayed success",
            "The reversed Sun asks you to stay realistic rather than overly optimistic. More \
             patience may be needed, or an adjustment of your expectations and approach.",
        ),
        _ => return None,
    };
    Some(meaning)
}

/// Meaning for a card, falling back to the generic text.
pub fn meaning(card: &Card, orientation: Orientation) -> Meaning {
    curated(card, orientation).unwrap_or(FALLBACK)
}

/// A topic-specific insight line for the handful of cards that have one.
pub fn topic_insight(card: &Card, category: TopicCategory) -> Option<&'static str> {
    let (love, career, general) = match major_number(card)? {
        0 => (
            "In love, keep an innocent heart and do not let old wounds bind you. A new chance \
             is on its way; accept it bravely.",
            "In your career this is a fresh start. Do not fear the risk; trust your instincts, \
             a new opportunity is waiting.",
            "Life is about to turn a new page. Stay open and take the first step; new \
             opportunities lie ahead.",
        ),
        1 => (
            "In love, you have what it takes to build something beautiful. Say what you feel \
             and let your charm draw the right person in.",
            "In your career you have every skill success requires. Now is the time to show \
             it; believe in your own power.",
            "You hold every resource needed to reach your goal. Focus, use your skill and \
             judgement, and success is close.",
        ),
        2 => (
            "In love, trust your intuition. Silence can say more than words; listen to your \
             inner voice.",
            "In your career, more reflection is needed. Trust your intuition; the answer lies \
             within you.",
            "This is a time for reflection. Trust your intuition and inner wisdom and the \
             answer will surface.",
        ),
        6 => (
            "In love, this card foretells an important choice. Choose someone who truly shares \
             your values.",
            "In your career you face an important choice. Pick the path that matches your \
             values and long-term goals.",
            "An important choice is coming. Choose the path that truly fits your heart.",
        ),
        13 => (
            "In love, old patterns must end to make room for something new. Let the past go \
             and welcome new possibilities.",
            "In your career an old phase is ending. This is a moment of change; new \
             opportunities are about to appear.",
            "An important transformation is about to happen. End the old and prepare for the \
             new.",
        ),
        19 => (
            "In love, joy and success are coming. Enjoy the good moments; a positive attitude \
             brings luck.",
            "In your career, success and recognition are coming. Stay positive; your efforts \
             will be rewarded.",
            "Life is full of sunshine and hope. Keep a positive mind; good times are on the \
             way.",
        ),
        _ => return None,
    };
    Some(match category {
        TopicCategory::Love => love,
        TopicCategory::Career => career,
        _ => general,
    })
}

/// Keyword summary for a major arcana card.
pub fn keywords(card: &Card) -> Option<&'static str> {
    let text = match major_number(card)? {
        0 => "New beginnings, adventure, innocence, fearless exploration",
        1 => "Creativity, willpower, skill, manifestation",
        2 => "Intuition, the subconscious, hidden wisdom, inner knowing",
        3 => "Nurture, abundance, creativity, nature and fertility",
        4 => "Authority, stability, leadership, order and control",
        5 => "Tradition, spiritual guidance, learning, institutions and morals",
        6 => "Love, choice, shared values, harmonious relationships",
        7 => "Willpower, victory, self-control, determination",
        8 => "Inner strength, courage, patience and compassion, gentleness over force",
        9 => "Introspection, solitude, seeking truth, spiritual guidance",
        10 => "Change, fate, cycles, accepting impermanence",
        11 => "Balance, fairness, truth, cause and effect, responsibility",
        12 => "Sacrifice, a new perspective, pause, seeing things differently",
        13 => "Endings and rebirth, deep transformation, releasing the past",
        14 => "Harmony, moderation, blending opposites, balance",
        15 => "Bondage to desire, material obsession, fear, temptation",
        16 => "Upheaval, collapse, revelation, sudden change",
        17 => "Hope, healing, spiritual guidance, inspiration",
        18 => "The subconscious, illusion, fear and confusion, intuition",
        19 => "Success, vitality, innocence and joy, achievement",
        20 => "Awakening, rebirth, a calling, forgiveness",
        21 => "Completion, integration, a journey fulfilled, success",
        _ => return None,
    };
    Some(text)
}

/// What a major arcana card clarifies when drawn as a clarification card.
pub fn clarify_hint(card: &Card) -> Option<&'static str> {
    let text = match major_number(card)? {
        0 => "Keep an innocent heart and bravely take the first step",
        1 => "Use your skills and resources to create the result you want",
        2 => "Trust your intuition and listen to your inner voice",
        3 => "Express your creativity and enjoy abundance",
        4 => "Build order, take responsibility, show leadership",
        5 => "Seek traditional wisdom and follow your moral compass",
        6 => "Stay sincere in your relationships and choose wisely",
        7 => "Hold on to your resolve, overcome obstacles, pursue victory",
        8 => "Meet difficulty with gentle strength and patience",
        9 => "Turn inward and seek your own wisdom",
        10 => "Accept change and trust how things unfold",
        11 => "Stay fair and take on the responsibility that is yours",
        12 => "Look at the problem from another angle and accept the needed sacrifice",
        13 => "End what is old and welcome a new beginning",
        14 => "Keep your balance and reconcile opposing forces",
        15 => "Recognize what binds you and break free",
        16 => "Accept sudden change and rebuild on new foundations",
        17 => "Keep hope and trust in a good future",
        18 => "Face your fears and let intuition guide you",
        19 => "Enjoy success and keep a positive mind",
        20 => "Embrace the awakening and answer the new calling",
        21 => "Celebrate completion and get ready for the next journey",
        _ => return None,
    };
    Some(text)
}

/// Guidance sentence for a spread position.
pub fn guidance(position: Position) -> &'static str {
    match position {
        Position::Answer => {
            "This card is the direct answer to your question. Let its tone tell you whether the \
             way is open or whether it is wiser to wait."
        }
        Position::OptionA => {
            "This card shows where the first option leads. Weigh its strengths and its costs \
             honestly."
        }
        Position::OptionB => {
            "This card shows where the second option leads. Compare it with the first before \
             you decide."
        }
        Position::NearTerm => {
            "This is what the coming weeks hold. It is the window where your actions have the \
             most immediate effect."
        }
        Position::MidTerm => {
            "This is how things settle over the next few months, once the first moves have \
             played out."
        }
        Position::LongTerm => {
            "This is the longer arc. Treat it as a direction rather than a fixed date."
        }
        Position::SurfaceCause => {
            "This is the visible cause, what everyone can see. It is real, but it is not the \
             whole story."
        }
        Position::DeeperCause => {
            "This is the cause beneath the surface. Understanding it explains why the obvious \
             fixes have not worked."
        }
        Position::RootCause => {
            "This is the root of the matter. Address it and the rest can begin to change."
        }
        Position::PastOrigin | Position::PastCause => {
            "This represents past factors that shape the present. Understanding them helps you \
             handle today's problem and avoid repeating old mistakes."
        }
        Position::PresentDevelopment | Position::PresentSituation => {
            "This reflects where you stand now. See it objectively; it is the basis for a sound \
             decision and the starting point for changing the future."
        }
        Position::FutureTrend | Position::FutureResult => {
            "This points to where things may be heading. The future can change; your actions \
             shape the final result, so keep a positive attitude."
        }
        Position::CurrentAnalysis | Position::CurrentState => {
            "This describes the situation as it stands. Start from it rather than from how you \
             wish things were."
        }
        Position::ActionSuggestion => {
            "This offers concrete advice for action. Following it will help you reach your \
             goal, but apply it flexibly to your real circumstances."
        }
        Position::ExpectedResult | Position::LikelyDevelopment => {
            "This shows what is likely to come of the present course. Use it to decide whether \
             to stay on it."
        }
        Position::FinalOutcome => {
            "This foretells a possible result. Stay positive and keep working toward a good \
             outcome; your efforts will be repaid."
        }
        Position::SupplementalGuidance => {
            "This card adds to your earlier reading. Consider it together with everything \
             before it and trust your intuition to decide."
        }
        Position::CurrentSituation
        | Position::Challenge
        | Position::Past
        | Position::Future
        | Position::PossibleOutcome
        | Position::YourApproach
        | Position::ExternalInfluence
        | Position::HopesFears
        | Position::FinalResult => FALLBACK_GUIDANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck;

    fn card(name: &str) -> &'static Card {
        deck::find(name).unwrap()
    }

    #[test]
    fn curated_cards_have_both_orientations() {
        for name in [
            "The Fool",
            "The Magician",
            "The High Priestess",
            "The Empress",
            "The Emperor",
            "The Lovers",
            "Justice",
            "Death",
            "The Sun",
            "The Star",
        ] {
            for o in [Orientation::Upright, Orientation::Reversed] {
                let m = curated(card(name), o).unwrap_or_else(|| panic!("{name} {o}"));
                assert!(!m.core.is_empty());
                assert!(!m.detailed.is_empty());
                assert_ne!(m.core, FALLBACK_CORE_MEANING);
            }
        }
    }

    #[test]
    fn orientations_differ() {
        let up = meaning(card("Death"), Orientation::Upright);
        let down = meaning(card("Death"), Orientation::Reversed);
        assert_ne!(up, down);
    }

    #[test]
    fn uncurated_cards_fall_back() {
        for name in ["The Tower", "Three of Swords", "King of Pentacles"] {
            let m = meaning(card(name), Orientation::Upright);
            assert_eq!(m.core, FALLBACK_CORE_MEANING);
            assert_eq!(m.detailed, FALLBACK_DETAILED_ANALYSIS);
        }
        assert_eq!(
            meaning(card("The Tower"), Orientation::Reversed).core,
            "this card offers guidance — interpret it against your situation"
        );
    }

    #[test]
    fn topic_insight_by_category() {
        let fool = card("The Fool");
        assert!(
            topic_insight(fool, TopicCategory::Love)
                .unwrap()
                .starts_with("In love")
        );
        assert!(
            topic_insight(fool, TopicCategory::Career)
                .unwrap()
                .starts_with("In your career")
        );
        assert_eq!(
            topic_insight(fool, TopicCategory::Health),
            topic_insight(fool, TopicCategory::General)
        );
        assert!(topic_insight(card("The Tower"), TopicCategory::Love).is_none());
    }

    #[test]
    fn every_major_has_keywords_and_hint() {
        for c in deck::all().iter().filter(|c| c.is_major()) {
            assert!(keywords(c).is_some(), "{}", c.name);
            assert!(clarify_hint(c).is_some(), "{}", c.name);
        }
        assert!(keywords(card("Ace of Cups")).is_none());
        assert!(clarify_hint(card("Ace of Cups")).is_none());
    }

    #[test]
    fn comprehensive_positions_use_fallback_guidance() {
        assert_eq!(guidance(Position::Challenge), FALLBACK_GUIDANCE);
        assert_eq!(guidance(Position::HopesFears), FALLBACK_GUIDANCE);
        assert_ne!(guidance(Position::NearTerm), FALLBACK_GUIDANCE);
        assert_ne!(guidance(Position::PastOrigin), FALLBACK_GUIDANCE);
    }
}
