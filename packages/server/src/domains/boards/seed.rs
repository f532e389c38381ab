//! Demo data seeding.
//!
//! Runs once at startup, after migrations. Guarded by an existence check so
//! restarts never duplicate the demo boards.

use sqlx::PgPool;

use super::error::BoardError;
use super::models::{Board, ColumnId};
use crate::common::BoardId;

/// Inserts the demo boards when the database holds none.
pub async fn seed_if_empty(pool: &PgPool) -> Result<(), BoardError> {
    if Board::count(pool).await? > 0 {
        tracing::info!("Database already contains boards, skipping seed");
        return Ok(());
    }

    let mut board1 = Board::new(BoardId::new(), "Board 1");
    board1.add_card(ColumnId::Todo, "Task 1", "Description for Task 1");
    board1.add_card(ColumnId::Todo, "Task 2", "Description for Task 2");
    board1.add_card(ColumnId::InProgress, "Task 3", "Description for Task 3");
    board1.add_card(ColumnId::Done, "Task 4", "Description for Task 4");
    board1.insert(pool).await?;

    Board::new(BoardId::new(), "Board 2").insert(pool).await?;

    tracing::info!("Database seeded with initial boards");
    Ok(())
}
