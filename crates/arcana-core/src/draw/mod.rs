//! Card resolution: turning a spread into concrete picks.
//!
//! Cards are drawn without replacement, so a reading never shows the same
//! card twice. Orientation is an independent coin flip per pick in both the
//! random and the manual path.

pub mod random;
pub mod selection;

use serde::{Deserialize, Serialize};

use crate::deck::{self, Card, DECK_SIZE};
use crate::error::{ArcanaError, ArcanaResult};
use crate::spread::{Position, Spread};

pub use random::RandomSource;
pub use selection::{Progress, Selection};

/// Which way up a card lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Read as printed.
    Upright,
    /// Upside down; the meaning turns inward or is blocked.
    Reversed,
}

impl Orientation {
    fn from_flip(reversed: bool) -> Self {
        if reversed {
            Self::Reversed
        } else {
            Self::Upright
        }
    }

    /// Whether the card is reversed.
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// A card placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pick {
    /// The card drawn.
    pub card: &'static Card,
    /// Where it lies in the spread.
    pub position: Position,
    /// Which way up.
    pub orientation: Orientation,
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.position, self.card, self.orientation)
    }
}

/// Draw a card for every position of the spread, without replacement.
pub fn resolve_random<R: RandomSource + ?Sized>(
    spread: &Spread,
    rng: &mut R,
) -> ArcanaResult<Vec<Pick>> {
    let count = spread.card_count();
    if count > DECK_SIZE {
        return Err(ArcanaError::DeckExhausted {
            requested: count,
            available: DECK_SIZE,
        });
    }
    let mut pool: Vec<&'static Card> = deck::all().iter().collect();
    let picks: Vec<Pick> = spread
        .positions()
        .iter()
        .map(|&position| {
            let card = pool.remove(rng.next_index(pool.len()));
            Pick {
                card,
                position,
                orientation: Orientation::from_flip(rng.next_bool()),
            }
        })
        .collect();
    tracing::debug!(
        cards = ?picks.iter().map(|p| p.card.name).collect::<Vec<_>>(),
        "drew random cards"
    );
    Ok(picks)
}

/// Place externally chosen cards on the spread in arrival order.
///
/// Uniqueness is the caller's responsibility (see [`Selection`]); names are
/// only looked up here.
pub fn resolve_from_selection<R: RandomSource + ?Sized>(
    names: &[&str],
    spread: &Spread,
    rng: &mut R,
) -> ArcanaResult<Vec<Pick>> {
    if names.len() != spread.card_count() {
        return Err(ArcanaError::PositionMismatch {
            positions: spread.card_count(),
            cards: names.len(),
        });
    }
    names
        .iter()
        .zip(spread.positions())
        .map(|(name, &position)| {
            let card = deck::find(name).ok_or_else(|| ArcanaError::UnknownCard {
                name: name.trim().to_string(),
                suggestion: deck::suggest(name).map(|c| c.name),
            })?;
            Ok(Pick {
                card,
                position,
                orientation: Orientation::from_flip(rng.next_bool()),
            })
        })
        .collect()
}
