use serde::{Deserialize, Serialize};

use crate::common::CardId;

/// A unit of work belonging to exactly one column of one board.
///
/// `index` mirrors the card's position within its owning column. The column's
/// sequence order is authoritative; `Column` renumbers `index` on every
/// mutation so the two never drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub index: u32,
    pub title: String,
    pub description: String,
}

impl Card {
    /// Creates a card with a fresh identifier. The ordinal is assigned when
    /// the card is placed into a column.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            index: 0,
            title: title.into(),
            description: description.into(),
        }
    }
}
