//! Board fixtures built through the public API.

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use super::ApiClient;

/// Creates an empty board with a random id; returns the board id.
pub async fn create_board(api: &ApiClient, name: &str) -> String {
    let id = Uuid::new_v4().to_string();
    let (status, _) = api
        .post("/api/boards", json!({ "_id": id, "name": name }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    id
}

/// Adds a card to a column; returns the card id.
pub async fn add_card(api: &ApiClient, board_id: &str, column: &str, title: &str) -> String {
    let (status, card) = api
        .post(
            &format!("/api/boards/{board_id}/columns/{column}/cards"),
            json!({ "title": title, "description": format!("Description for {title}") }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    card["_id"].as_str().expect("card has an id").to_string()
}

/// Fetches one board's current document from the list endpoint.
pub async fn fetch_board(api: &ApiClient, board_id: &str) -> Value {
    let (status, boards) = api.request(Method::GET, "/api/boards", None).await;
    assert_eq!(status, StatusCode::OK);
    boards
        .as_array()
        .expect("board list")
        .iter()
        .find(|b| b["_id"] == board_id)
        .cloned()
        .unwrap_or(Value::Null)
}

/// The titles of a board's column, in stored order.
pub fn column_titles(board: &Value, column: &str) -> Vec<String> {
    board[column]
        .as_array()
        .expect("column array")
        .iter()
        .map(|c| c["title"].as_str().unwrap().to_string())
        .collect()
}
