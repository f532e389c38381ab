//! Ordered card storage and the column transfer protocol.
//!
//! A `Column` is an ordered sequence of cards; sequence position is the
//! authoritative order. Moves are remove-then-insert: the target position is
//! always interpreted against the list state *after* removal, which is what
//! makes same-column reorders land correctly (the list is one element shorter
//! by the time the insertion point is clamped).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::common::CardId;
use crate::domains::boards::error::BoardError;

/// Identifies one of the three fixed columns of a board.
///
/// The wire protocol uses "1"/"2"/"3"; parsing happens once at the HTTP
/// boundary so an invalid column is not representable past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    /// Parses the external column number ("1"/"2"/"3").
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        match s {
            "1" => Ok(ColumnId::Todo),
            "2" => Ok(ColumnId::InProgress),
            "3" => Ok(ColumnId::Done),
            other => Err(BoardError::InvalidColumn(other.to_string())),
        }
    }

    /// The external column number this id maps to.
    pub fn as_wire(self) -> &'static str {
        match self {
            ColumnId::Todo => "1",
            ColumnId::InProgress => "2",
            ColumnId::Done => "3",
        }
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// One column's ordered list of cards.
///
/// Serialized transparently as a JSON array, which is exactly the shape
/// stored in the board document's JSONB columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    cards: Vec<Card>,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == id)
    }

    /// Appends a card at the end of the column, assigning its ordinal.
    pub fn push_card(&mut self, mut card: Card) -> &Card {
        card.index = self.cards.len() as u32;
        self.cards.push(card);
        self.cards.last().unwrap()
    }

    /// Inserts a card at `at`, clamped to `[0, len]`. Positions past the end
    /// append. Renumbers the column afterwards.
    pub fn insert_card(&mut self, at: usize, card: Card) -> &Card {
        let at = at.min(self.cards.len());
        self.cards.insert(at, card);
        self.reindex();
        &self.cards[at]
    }

    /// Removes a card by id. `None` signals the card was not present (a
    /// second removal of the same id finds nothing), distinct from successful
    /// removal so callers can report a not-found condition.
    pub fn remove_card(&mut self, id: &CardId) -> Option<Card> {
        let at = self.cards.iter().position(|c| &c.id == id)?;
        let card = self.cards.remove(at);
        self.reindex();
        Some(card)
    }

    /// Moves a card within this column to `to_index`.
    ///
    /// The card is removed first, then `to_index` is clamped against the
    /// shortened list. A position referring to the end of the post-removal
    /// list therefore lands the card last, not one short of it.
    pub fn reorder(&mut self, id: &CardId, to_index: usize) -> Option<&Card> {
        let card = self.remove_card(id)?;
        Some(self.insert_card(to_index, card))
    }

    /// Moves a card out of this column into `dest` at `to_index` (clamped to
    /// the destination's length). Returns `None` without mutating either
    /// column when the card is absent.
    pub fn transfer_to<'a>(
        &mut self,
        dest: &'a mut Column,
        id: &CardId,
        to_index: usize,
    ) -> Option<&'a Card> {
        let card = self.remove_card(id)?;
        Some(dest.insert_card(to_index, card))
    }

    fn reindex(&mut self) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.index = i as u32;
        }
    }
}
