//! Manual card selection, one name at a time.
//!
//! A [`Selection`] collects exactly as many unique card names as the spread
//! has positions. Unknown and repeated names are rejected without changing
//! the selection, so the caller can simply prompt again.

use crate::deck::{self, Card};
use crate::error::{ArcanaError, ArcanaResult};
use crate::spread::Spread;

/// Progress after an accepted card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// The card just accepted.
    pub card: &'static Card,
    /// Cards chosen so far, including this one.
    pub chosen: usize,
    /// Cards the spread needs.
    pub needed: usize,
}

impl Progress {
    /// Whether the last position has just been filled.
    pub fn is_complete(&self) -> bool {
        self.chosen == self.needed
    }
}

/// An in-progress manual selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    spread: Spread,
    chosen: Vec<&'static Card>,
}

impl Selection {
    /// Start selecting cards for a spread.
    pub fn begin(spread: Spread) -> Self {
        let chosen = Vec::with_capacity(spread.card_count());
        Self { spread, chosen }
    }

    /// The spread being filled.
    pub fn spread(&self) -> &Spread {
        &self.spread
    }

    /// Cards chosen so far, in arrival order.
    pub fn chosen(&self) -> &[&'static Card] {
        &self.chosen
    }

    /// Cards still to choose.
    pub fn remaining(&self) -> usize {
        self.spread.card_count() - self.chosen.len()
    }

    /// Whether every position has a card.
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Label of the position the next card will fill.
    pub fn next_position(&self) -> Option<&'static str> {
        self.spread
            .positions()
            .get(self.chosen.len())
            .map(|p| p.label())
    }

    /// Accept a card by name.
    pub fn accept(&mut self, name: &str) -> ArcanaResult<Progress> {
        if self.is_complete() {
            return Err(ArcanaError::SelectionComplete(self.spread.card_count()));
        }
        let card = deck::find(name).ok_or_else(|| ArcanaError::UnknownCard {
            name: name.trim().to_string(),
            suggestion: deck::suggest(name).map(|c| c.name),
        })?;
        if self.chosen.contains(&card) {
            return Err(ArcanaError::DuplicateCard(card.name));
        }
        self.chosen.push(card);
        tracing::debug!(card = card.name, chosen = self.chosen.len(), "card selected");
        Ok(Progress {
            card,
            chosen: self.chosen.len(),
            needed: self.spread.card_count(),
        })
    }

    /// Finish the selection, yielding the spread and the chosen names.
    pub fn finish(self) -> ArcanaResult<(Spread, Vec<&'static str>)> {
        if !self.is_complete() {
            return Err(ArcanaError::SelectionIncomplete {
                chosen: self.chosen.len(),
                needed: self.spread.card_count(),
            });
        }
        let names = self.chosen.iter().map(|c| c.name).collect();
        Ok((self.spread, names))
    }
}
