//! The card catalog.
//!
//! A fixed 78-card deck: the 22 major arcana in traditional order followed by
//! the four minor suits (Wands, Cups, Swords, Pentacles), each running
//! Ace through Ten and then Page, Knight, Queen, King. The catalog is static
//! data; cards are referenced as `&'static Card` everywhere else.

use serde::Serialize;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 78;

/// Minimum Jaro-Winkler similarity for a name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A minor arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    /// Fire: drive, passion, creativity.
    Wands,
    /// Water: feeling, relationships, intuition.
    Cups,
    /// Air: thought, decisions, conflict.
    Swords,
    /// Earth: material life, money, health.
    Pentacles,
}

impl Suit {
    /// Shared glyph for every card of the suit.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wands => "🪄",
            Self::Cups => "🏺",
            Self::Swords => "⚔️",
            Self::Pentacles => "🪙",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wands => write!(f, "Wands"),
            Self::Cups => write!(f, "Cups"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// Which half of the deck a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arcana {
    /// Trump card with its traditional number (0-21).
    Major(u8),
    /// Suit card.
    Minor(Suit),
}

/// A single card of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    /// Unique display name.
    pub name: &'static str,
    /// Symbol shown next to the name.
    pub glyph: &'static str,
    /// Major trump or minor suit.
    pub arcana: Arcana,
}

impl Card {
    const fn major(number: u8, name: &'static str, glyph: &'static str) -> Self {
        Self {
            name,
            glyph,
            arcana: Arcana::Major(number),
        }
    }

    const fn minor(suit: Suit, name: &'static str) -> Self {
        Self {
            name,
            glyph: suit.glyph(),
            arcana: Arcana::Minor(suit),
        }
    }

    /// Whether this is one of the 22 trumps.
    pub fn is_major(&self) -> bool {
        matches!(self.arcana, Arcana::Major(_))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph, self.name)
    }
}

static DECK: [Card; DECK_SIZE] = [
    Card::major(0, "The Fool", "🃏"),
    Card::major(1, "The Magician", "🎩"),
    Card::major(2, "The High Priestess", "🌙"),
    Card::major(3, "The Empress", "👑"),
    Card::major(4, "The Emperor", "👨‍💼"),
    Card::major(5, "The Hierophant", "⛪"),
    Card::major(6, "The Lovers", "💕"),
    Card::major(7, "The Chariot", "🏛️"),
    Card::major(8, "Strength", "💪"),
    Card::major(9, "The Hermit", "🔦"),
    Card::major(10, "Wheel of Fortune", "🎡"),
    Card::major(11, "Justice", "⚖️"),
    Card::major(12, "The Hanged Man", "🙃"),
    Card::major(13, "Death", "💀"),
    Card::major(14, "Temperance", "🍷"),
    Card::major(15, "The Devil", "😈"),
    Card::major(16, "The Tower", "🗼"),
    Card::major(17, "The Star", "⭐"),
    Card::major(18, "The Moon", "🌙"),
    Card::major(19, "The Sun", "☀️"),
    Card::major(20, "Judgement", "📯"),
    Card::major(21, "The World", "🌍"),
    Card::minor(Suit::Wands, "Ace of Wands"),
    Card::minor(Suit::Wands, "Two of Wands"),
    Card::minor(Suit::Wands, "Three of Wands"),
    Card::minor(Suit::Wands, "Four of Wands"),
    Card::minor(Suit::Wands, "Five of Wands"),
    Card::minor(Suit::Wands, "Six of Wands"),
    Card::minor(Suit::Wands, "Seven of Wands"),
    Card::minor(Suit::Wands, "Eight of Wands"),
    Card::minor(Suit::Wands, "Nine of Wands"),
    Card::minor(Suit::Wands, "Ten of Wands"),
    Card::minor(Suit::Wands, "Page of Wands"),
    Card::minor(Suit::Wands, "Knight of Wands"),
    Card::minor(Suit::Wands, "Queen of Wands"),
    Card::minor(Suit::Wands, "King of Wands"),
    Card::minor(Suit::Cups, "Ace of Cups"),
    Card::minor(Suit::Cups, "Two of Cups"),
    Card::minor(Suit::Cups, "Three of Cups"),
    Card::minor(Suit::Cups, "Four of Cups"),
    Card::minor(Suit::Cups, "Five of Cups"),
    Card::minor(Suit::Cups, "Six of Cups"),
    Card::minor(Suit::Cups, "Seven of Cups"),
    Card::minor(Suit::Cups, "Eight of Cups"),
    Card::minor(Suit::Cups, "Nine of Cups"),
    Card::minor(Suit::Cups, "Ten of Cups"),
    Card::minor(Suit::Cups, "Page of Cups"),
    Card::minor(Suit::Cups, "Knight of Cups"),
    Card::minor(Suit::Cups, "Queen of Cups"),
    Card::minor(Suit::Cups, "King of Cups"),
    Card::minor(Suit::Swords, "Ace of Swords"),
    Card::minor(Suit::Swords, "Two of Swords"),
    Card::minor(Suit::Swords, "Three of Swords"),
    Card::minor(Suit::Swords, "Four of Swords"),
    Card::minor(Suit::Swords, "Five of Swords"),
    Card::minor(Suit::Swords, "Six of Swords"),
    Card::minor(Suit::Swords, "Seven of Swords"),
    Card::minor(Suit::Swords, "Eight of Swords"),
    Card::minor(Suit::Swords, "Nine of Swords"),
    Card::minor(Suit::Swords, "Ten of Swords"),
    Card::minor(Suit::Swords, "Page of Swords"),
    Card::minor(Suit::Swords, "Knight of Swords"),
    Card::minor(Suit::Swords, "Queen of Swords"),
    Card::minor(Suit::Swords, "King of Swords"),
    Card::minor(Suit::Pentacles, "Ace of Pentacles"),
    Card::minor(Suit::Pentacles, "Two of Pentacles"),
    Card::minor(Suit::Pentacles, "Three of Pentacles"),
    Card::minor(Suit::Pentacles, "Four of Pentacles"),
    Card::minor(Suit::Pentacles, "Five of Pentacles"),
    Card::minor(Suit::Pentacles, "Six of Pentacles"),
    Card::minor(Suit::Pentacles, "Seven of Pentacles"),
    Card::minor(Suit::Pentacles, "Eight of Pentacles"),
    Card::minor(Suit::Pentacles, "Nine of Pentacles"),
    Card::minor(Suit::Pentacles, "Ten of Pentacles"),
    Card::minor(Suit::Pentacles, "Page of Pentacles"),
    Card::minor(Suit::Pentacles, "Knight of Pentacles"),
    Card::minor(Suit::Pentacles, "Queen of Pentacles"),
    Card::minor(Suit::Pentacles, "King of Pentacles"),
];

/// All cards in catalog order.
pub fn all() -> &'static [Card] {
    &DECK
}

/// Card at a catalog index.
pub fn get(index: usize) -> Option<&'static Card> {
    DECK.get(index)
}

/// Look up a card by name (case-insensitive, leading "the" optional).
pub fn find(name: &str) -> Option<&'static Card> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }
    DECK.iter().find(|card| normalize(card.name) == wanted)
}

/// The closest card name to a misspelled one, if any is close enough.
pub fn suggest(name: &str) -> Option<&'static Card> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }
    DECK.iter()
        .map(|card| (card, strsim::jaro_winkler(&wanted, &normalize(card.name))))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(card, _)| card)
}

fn normalize(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let lower = lower.split_whitespace().collect::<Vec<_>>().join(" ");
    match lower.strip_prefix("the ") {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}
