use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::search::Difficulty;

/// A finished game, ready to be dumped as JSON.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in coordinate notation ("e2e4"), in play order.
    pub moves: Vec<String>,
    /// Winning side, or None when the game was abandoned or capped.
    pub winner: Option<Side>,
    /// Tier the engine played at; None for a two-human game.
    pub difficulty: Option<Difficulty>,
}

impl GameRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: impl ToString) {
        self.moves.push(mv.to_string());
    }
}
