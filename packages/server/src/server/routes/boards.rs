//! REST handlers for boards and cards.
//!
//! Every mutation follows the same load-modify-save shape: resolve the
//! column identifier first (fail fast, nothing mutated), load the board
//! document, apply the in-memory operation, then rewrite the whole document.
//! A failed save means the mutation was not made durable.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::PgPool;

use crate::common::{BoardId, CardId};
use crate::domains::boards::{Board, BoardData, BoardError, CardData, ColumnId};
use crate::server::app::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

type ErrorResponse = (StatusCode, Json<ErrorBody>);

fn error_response(err: BoardError) -> ErrorResponse {
    let status = match &err {
        BoardError::BoardNotFound | BoardError::CardNotFound => StatusCode::NOT_FOUND,
        BoardError::InvalidColumn(_) | BoardError::Validation(_) => StatusCode::BAD_REQUEST,
        BoardError::Database(e) => {
            tracing::error!(error = %e, "Database error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorBody {
            message: err.to_string(),
        }),
    )
}

async fn load_board(pool: &PgPool, id: BoardId) -> Result<Board, BoardError> {
    Board::find_by_id(id, pool)
        .await?
        .ok_or(BoardError::BoardNotFound)
}

// =============================================================================
// Boards
// =============================================================================

/// GET /api/boards
pub async fn list_boards_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<BoardData>>, ErrorResponse> {
    let boards = Board::list(&state.db_pool).await.map_err(error_response)?;
    Ok(Json(boards.iter().map(BoardData::from).collect()))
}

#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    /// Board ids are supplied by the client (any well-formed UUID).
    #[serde(rename = "_id")]
    pub id: BoardId,
    pub name: String,
}

/// POST /api/boards
pub async fn create_board_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<BoardData>), ErrorResponse> {
    if body.name.trim().is_empty() {
        return Err(error_response(BoardError::Validation("name is required")));
    }

    let board = Board::create(body.id, body.name.trim(), &state.db_pool)
        .await
        .map_err(|err| match err {
            BoardError::Database(e)
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation()) =>
            {
                error_response(BoardError::Validation("board id already exists"))
            }
            other => error_response(other),
        })?;

    Ok((StatusCode::CREATED, Json(BoardData::from(board))))
}

/// DELETE /api/boards/:board_id
pub async fn delete_board_handler(
    Extension(state): Extension<AppState>,
    Path(board_id): Path<BoardId>,
) -> Result<StatusCode, ErrorResponse> {
    let deleted = Board::delete(board_id, &state.db_pool)
        .await
        .map_err(error_response)?;
    if !deleted {
        return Err(error_response(BoardError::BoardNotFound));
    }
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Cards
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AddCardRequest {
    pub title: String,
    pub description: String,
    /// Creation-time position hint sent by the client. The authoritative
    /// ordinal is assigned on append, so this is accepted but not used.
    #[allow(dead_code)]
    pub index: Option<String>,
}

/// POST /api/boards/:board_id/columns/:column/cards
pub async fn add_card_handler(
    Extension(state): Extension<AppState>,
    Path((board_id, column)): Path<(BoardId, String)>,
    Json(body): Json<AddCardRequest>,
) -> Result<(StatusCode, Json<CardData>), ErrorResponse> {
    let column = ColumnId::parse(&column).map_err(error_response)?;

    let mut board = load_board(&state.db_pool, board_id)
        .await
        .map_err(error_response)?;
    let card = CardData::from(board.add_card(column, &body.title, &body.description));
    board.save(&state.db_pool).await.map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(card)))
}

#[derive(Debug, Deserialize)]
pub struct EditCardRequest {
    pub title: String,
    pub description: String,
}

/// PUT /api/boards/:board_id/columns/:column/cards/:card_id
pub async fn edit_card_handler(
    Extension(state): Extension<AppState>,
    Path((board_id, column, card_id)): Path<(BoardId, String, CardId)>,
    Json(body): Json<EditCardRequest>,
) -> Result<Json<CardData>, ErrorResponse> {
    let column = ColumnId::parse(&column).map_err(error_response)?;

    let mut board = load_board(&state.db_pool, board_id)
        .await
        .map_err(error_response)?;
    let card = board
        .edit_card(column, &card_id, &body.title, &body.description)
        .map(CardData::from)
        .map_err(error_response)?;
    board.save(&state.db_pool).await.map_err(error_response)?;

    Ok(Json(card))
}

/// DELETE /api/boards/:board_id/columns/:column/cards/:card_id
pub async fn delete_card_handler(
    Extension(state): Extension<AppState>,
    Path((board_id, column, card_id)): Path<(BoardId, String, CardId)>,
) -> Result<StatusCode, ErrorResponse> {
    let column = ColumnId::parse(&column).map_err(error_response)?;

    let mut board = load_board(&state.db_pool, board_id)
        .await
        .map_err(error_response)?;
    board
        .delete_card(column, &card_id)
        .map_err(error_response)?;
    board.save(&state.db_pool).await.map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    pub from_column: String,
    pub to_column: String,
    /// Zero-based insertion offset in the destination, interpreted after the
    /// card is removed from the source. Absent or unparseable values append
    /// at the end (the drag client sends the column length as a string).
    #[serde(default, deserialize_with = "de_target_index")]
    pub to_index: Option<usize>,
}

/// Accepts `toIndex` as either a JSON number or a string-encoded integer.
/// Negative positions clamp to the front of the column.
fn de_target_index<'de, D: Deserializer<'de>>(de: D) -> Result<Option<usize>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }

    let clamp = |n: i64| Some(n.max(0) as usize);
    Ok(match Option::<Raw>::deserialize(de)? {
        None => None,
        Some(Raw::Num(n)) => clamp(n),
        Some(Raw::Str(s)) => s.trim().parse().ok().and_then(clamp),
    })
}

/// PUT /api/boards/:board_id/cards/:card_id/move
pub async fn move_card_handler(
    Extension(state): Extension<AppState>,
    Path((board_id, card_id)): Path<(BoardId, CardId)>,
    Json(body): Json<MoveCardRequest>,
) -> Result<Json<CardData>, ErrorResponse> {
    let from = ColumnId::parse(&body.from_column).map_err(error_response)?;
    let to = ColumnId::parse(&body.to_column).map_err(error_response)?;

    let mut board = load_board(&state.db_pool, board_id)
        .await
        .map_err(error_response)?;
    // usize::MAX clamps to the destination length, i.e. append
    let to_index = body.to_index.unwrap_or(usize::MAX);
    let moved = board
        .move_card(from, to, &card_id, to_index)
        .map_err(error_response)?;
    board.save(&state.db_pool).await.map_err(error_response)?;

    Ok(Json(CardData::from(&moved)))
}
