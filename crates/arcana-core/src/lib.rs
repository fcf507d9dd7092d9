//! Tarot divination engine.
//!
//! Classifies a free-text question, plans a spread for it, draws cards
//! without replacement (randomly or from a manual selection) and composes a
//! structured reading from static interpretation tables. Follow-up single
//! card readings can be appended to a session.

pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod intent;
pub mod reading;
pub mod session;
pub mod spread;
pub mod topic;

pub use config::SessionConfig;
pub use deck::{Arcana, Card, Suit};
pub use draw::{Orientation, Pick, RandomSource, Selection};
pub use error::{ArcanaError, ArcanaResult};
pub use intent::Intent;
pub use reading::{CardInterpretation, Reading, ReadingKind, SupplementKind, compose};
pub use session::{Question, Session};
pub use spread::{Position, Spread};
pub use topic::TopicCategory;
