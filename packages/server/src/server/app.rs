//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    add_card_handler, create_board_handler, delete_board_handler, delete_card_handler,
    edit_card_handler, health_handler, list_boards_handler, move_card_handler,
};
use crate::server::static_files::serve_client;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router.
///
/// Every mutating route loads the board document, applies the mutation in
/// memory and saves the whole document back; there is no per-board locking
/// between concurrent requests (last save wins).
pub fn build_app(pool: PgPool) -> Router {
    let app_state = AppState { db_pool: pool };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Board collection
        .route(
            "/api/boards",
            get(list_boards_handler).post(create_board_handler),
        )
        .route("/api/boards/:board_id", delete(delete_board_handler))
        // Cards within a column ("1"/"2"/"3" parsed at the boundary)
        .route(
            "/api/boards/:board_id/columns/:column/cards",
            post(add_card_handler),
        )
        .route(
            "/api/boards/:board_id/columns/:column/cards/:card_id",
            put(edit_card_handler).delete(delete_card_handler),
        )
        // Cross-column (or in-column) move
        .route(
            "/api/boards/:board_id/cards/:card_id/move",
            put(move_card_handler),
        )
        // Health check
        .route("/health", get(health_handler))
        // Embedded browser client
        .fallback(serve_client)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
