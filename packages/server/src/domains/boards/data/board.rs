//! Wire DTOs for the board API.
//!
//! The response shape keeps the document conventions the browser client was
//! written against: `_id` identifiers, camelCase `inProgress`, and `index`
//! as a string-encoded integer.

use serde::{Deserialize, Serialize};

use crate::domains::boards::models::{Board, Card, Column};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardData {
    #[serde(rename = "_id")]
    pub id: String,
    pub index: String,
    pub title: String,
    pub description: String,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.to_string(),
            index: card.index.to_string(),
            title: card.title.clone(),
            description: card.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub todo: Vec<CardData>,
    #[serde(rename = "inProgress")]
    pub in_progress: Vec<CardData>,
    pub done: Vec<CardData>,
}

fn cards_of(column: &Column) -> Vec<CardData> {
    column.cards().iter().map(CardData::from).collect()
}

impl From<&Board> for BoardData {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id.to_string(),
            name: board.name.clone(),
            todo: cards_of(&board.todo),
            in_progress: cards_of(&board.in_progress),
            done: cards_of(&board.done),
        }
    }
}

impl From<Board> for BoardData {
    fn from(board: Board) -> Self {
        Self::from(&board)
    }
}
