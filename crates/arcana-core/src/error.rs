//! Error types for the divination engine.

use thiserror::Error;

/// Result type for engine operations.
pub type ArcanaResult<T> = Result<T, ArcanaError>;

/// Errors that can occur while planning, drawing or running a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArcanaError {
    /// More cards requested than the deck holds.
    #[error("cannot draw {requested} cards from a deck of {available}")]
    DeckExhausted {
        /// Cards requested.
        requested: usize,
        /// Cards in the deck.
        available: usize,
    },

    /// A spread without positions.
    #[error("a spread needs at least one position")]
    EmptySpread,

    /// Number of chosen cards differs from the number of positions.
    #[error("spread has {positions} positions but {cards} cards were given")]
    PositionMismatch {
        /// Positions in the spread.
        positions: usize,
        /// Cards supplied.
        cards: usize,
    },

    /// Card name not in the deck.
    #[error("unknown card: {name}{}", did_you_mean(.suggestion))]
    UnknownCard {
        /// The name as given.
        name: String,
        /// Closest known card name, if any.
        suggestion: Option<&'static str>,
    },

    /// Card already chosen for this reading.
    #[error("{0} has already been chosen")]
    DuplicateCard(&'static str),

    /// Every position already has a card.
    #[error("all {0} cards have already been chosen")]
    SelectionComplete(usize),

    /// Not every position has a card yet.
    #[error("{chosen} of {needed} cards chosen")]
    SelectionIncomplete {
        /// Cards chosen so far.
        chosen: usize,
        /// Cards required.
        needed: usize,
    },

    /// Question below the minimum length for a reading.
    #[error("question is too short: at least {min} characters needed")]
    QuestionTooShort {
        /// Minimum number of characters.
        min: usize,
    },

    /// An operation needs a question first.
    #[error("no question asked yet")]
    NoQuestion,

    /// An operation needs a completed reading first.
    #[error("no reading yet")]
    NoReading,

    /// Topic name not recognized.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown console command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    suggestion
        .map(|s| format!(" (did you mean {s}?)"))
        .unwrap_or_default()
}
