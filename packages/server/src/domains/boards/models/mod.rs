pub mod board;
pub mod card;
pub mod column;

pub use board::Board;
pub use card::Card;
pub use column::{Column, ColumnId};
