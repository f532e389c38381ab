// Kanban Task Board - API Core
//
// This crate provides the backend API for a Kanban-style task board: boards
// with three fixed columns (To Do / In Progress / Done) holding ordered cards.
// Architecture follows domain-driven design; boards are persisted as whole
// documents in Postgres (JSONB columns per board row).

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
