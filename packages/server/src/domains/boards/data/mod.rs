pub mod board;

pub use board::{BoardData, CardData};
