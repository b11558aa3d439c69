// Rules core for a casual chess game: the UI layer owns the authoritative
// board and turn state; everything here is a pure function over board values.
pub mod board;
pub mod movegen;
pub mod perft;
pub mod record;
pub mod rules;
pub mod search;
