pub mod data;
pub mod error;
pub mod models;
pub mod seed;

pub use data::{BoardData, CardData};
pub use error::BoardError;
pub use models::{Board, Card, Column, ColumnId};
