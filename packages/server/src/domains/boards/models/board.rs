use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;

use super::card::Card;
use super::column::{Column, ColumnId};
use crate::common::{BoardId, CardId};
use crate::domains::boards::error::BoardError;

/// Aggregate root: a named board owning exactly three ordered columns.
///
/// The board is the unit of persistence. Every card mutation is applied
/// in memory and then saved by rewriting the whole board row, mirroring a
/// whole-document store. Card ids are generated here (uuid v4) so they are
/// unique across all three columns by construction; a card lives in exactly
/// one column at a time because the only cross-column operation is the
/// atomic remove-then-insert in `move_card`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[sqlx(json)]
    pub todo: Column,
    #[sqlx(json)]
    pub in_progress: Column,
    #[sqlx(json)]
    pub done: Column,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// An empty board, not yet persisted.
    pub fn new(id: BoardId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            todo: Column::new(),
            in_progress: Column::new(),
            done: Column::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Done => &self.done,
        }
    }

    pub fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Appends a new card at the end of the given column.
    pub fn add_card(&mut self, column: ColumnId, title: &str, description: &str) -> &Card {
        self.column_mut(column).push_card(Card::new(title, description))
    }

    /// Overwrites a card's title and description in place, preserving its
    /// identifier and position.
    pub fn edit_card(
        &mut self,
        column: ColumnId,
        card_id: &CardId,
        title: &str,
        description: &str,
    ) -> Result<&Card, BoardError> {
        let card = self
            .column_mut(column)
            .card_mut(card_id)
            .ok_or(BoardError::CardNotFound)?;
        card.title = title.to_string();
        card.description = description.to_string();
        Ok(card)
    }

    /// Removes a card from the given column.
    pub fn delete_card(&mut self, column: ColumnId, card_id: &CardId) -> Result<Card, BoardError> {
        self.column_mut(column)
            .remove_card(card_id)
            .ok_or(BoardError::CardNotFound)
    }

    /// Moves a card from one column to another (or within one column) at
    /// `to_index`, clamped against the destination after removal. Fails with
    /// `CardNotFound` before any mutation when the card is absent from the
    /// source column.
    pub fn move_card(
        &mut self,
        from: ColumnId,
        to: ColumnId,
        card_id: &CardId,
        to_index: usize,
    ) -> Result<Card, BoardError> {
        let moved = if from == to {
            self.column_mut(from).reorder(card_id, to_index)
        } else {
            let (source, dest) = self.split_mut(from, to);
            source.transfer_to(dest, card_id, to_index)
        };
        moved.cloned().ok_or(BoardError::CardNotFound)
    }

    /// Mutable references to two distinct columns. The same-column case is
    /// handled by `Column::reorder`; callers ensure `from != to`.
    fn split_mut(&mut self, from: ColumnId, to: ColumnId) -> (&mut Column, &mut Column) {
        use ColumnId::*;
        match (from, to) {
            (Todo, InProgress) => (&mut self.todo, &mut self.in_progress),
            (Todo, Done) => (&mut self.todo, &mut self.done),
            (InProgress, Todo) => (&mut self.in_progress, &mut self.todo),
            (InProgress, Done) => (&mut self.in_progress, &mut self.done),
            (Done, Todo) => (&mut self.done, &mut self.todo),
            (Done, InProgress) => (&mut self.done, &mut self.in_progress),
            (Todo, Todo) | (InProgress, InProgress) | (Done, Done) => {
                unreachable!("split_mut requires distinct columns")
            }
        }
    }
}

// =============================================================================
// Board Persistence
// =============================================================================

impl Board {
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, BoardError> {
        sqlx::query_as::<_, Self>("SELECT * FROM boards ORDER BY created_at")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(id: BoardId, pool: &PgPool) -> Result<Option<Self>, BoardError> {
        sqlx::query_as::<_, Self>("SELECT * FROM boards WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Creates an empty board under the externally supplied id.
    pub async fn create(id: BoardId, name: &str, pool: &PgPool) -> Result<Self, BoardError> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO boards (id, name, todo, in_progress, done)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(Json(Column::new()))
        .bind(Json(Column::new()))
        .bind(Json(Column::new()))
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Inserts a fully populated board. Used by seeding; regular creation
    /// goes through `create`.
    pub async fn insert(&self, pool: &PgPool) -> Result<(), BoardError> {
        sqlx::query(
            r#"
            INSERT INTO boards (id, name, todo, in_progress, done)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(Json(&self.todo))
        .bind(Json(&self.in_progress))
        .bind(Json(&self.done))
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Rewrites the whole board row (name plus all three column documents).
    ///
    /// Load-modify-save is not isolated against concurrent writers on the
    /// same board: the later save wins. An error here means the in-memory
    /// mutation was not made durable.
    pub async fn save(&self, pool: &PgPool) -> Result<(), BoardError> {
        let result = sqlx::query(
            r#"
            UPDATE boards
            SET name = $2, todo = $3, in_progress = $4, done = $5, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(Json(&self.todo))
        .bind(Json(&self.in_progress))
        .bind(Json(&self.done))
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            // board was deleted out from under us
            return Err(BoardError::BoardNotFound);
        }
        Ok(())
    }

    /// Deletes a board. Returns `false` when no board had the given id.
    pub async fn delete(id: BoardId, pool: &PgPool) -> Result<bool, BoardError> {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, BoardError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM boards")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
