use thiserror::Error;

/// Failures surfaced by board and card operations.
///
/// Lookup failures (`BoardNotFound`, `CardNotFound`) and column resolution
/// failures (`InvalidColumn`) occur before any mutation: an operation that
/// returns one of these has not touched the board.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Board not found")]
    BoardNotFound,

    #[error("Card not found in the specified column")]
    CardNotFound,

    #[error("Invalid column number: {0}")]
    InvalidColumn(String),

    #[error("{0}")]
    Validation(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
