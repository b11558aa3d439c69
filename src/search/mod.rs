pub mod eval;
pub mod minimax;
pub mod select;

pub use select::{select_move, Difficulty};
