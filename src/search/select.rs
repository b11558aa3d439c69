use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Side};
use crate::movegen::legal_moves;
use crate::search::eval::piece_value;
use crate::search::minimax::minimax;

/// Plies searched beyond the candidate move at the hard tier: the candidate
/// plus one opposing reply.
const REPLY_PLIES: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Pick a move for `side`, or None when it has no legal moves (the caller
/// decides what that means for the game).
///
/// The RNG is caller-supplied so the randomized tiers can be pinned in
/// tests; the hard tier never consults it.
pub fn select_move(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut SmallRng,
) -> Option<Move> {
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return None;
    }
    debug!("{difficulty:?}: {} candidate moves for {side}", moves.len());

    match difficulty {
        Difficulty::Easy => Some(moves[rng.gen_range(0..moves.len())]),
        Difficulty::Medium => Some(best_capture(board, &moves, rng)),
        Difficulty::Hard => Some(best_by_search(board, side, &moves)),
    }
}

/// Greedy capture: score each move by the value of whatever sits on its
/// destination square, then pick uniformly among the top scorers. With no
/// captures available every move scores 0 and the choice is uniform.
fn best_capture(board: &Board, moves: &[Move], rng: &mut SmallRng) -> Move {
    let mut best_score = i32::MIN;
    let mut best: Vec<Move> = Vec::new();
    for &mv in moves {
        let score = board
            .piece_at(mv.to_row as usize, mv.to_col as usize)
            .map_or(0, |p| piece_value(p.kind));
        if score > best_score {
            best_score = score;
            best.clear();
            best.push(mv);
        } else if score == best_score {
            best.push(mv);
        }
    }
    debug!("medium: best capture score {best_score}, {} tied", best.len());
    best[rng.gen_range(0..best.len())]
}

/// Two-ply lookahead: play each candidate, let the opponent answer via
/// `minimax`, keep the candidate whose outcome reads best for `side` under
/// the Black-positive evaluator. Ties go to the first candidate in
/// enumeration order.
fn best_by_search(board: &Board, side: Side, moves: &[Move]) -> Move {
    let maximizing = side == Side::Black;
    let mut best_mv = moves[0];
    let mut best_value = i32::MIN;
    for &mv in moves {
        let child = board.apply_move(mv);
        // The candidate consumed this side's ply, so the reply ply belongs
        // to the opponent.
        let raw = minimax(&child, REPLY_PLIES, !maximizing);
        let value = if maximizing { raw } else { -raw };
        if value > best_value {
            best_value = value;
            best_mv = mv;
        }
    }
    debug!("hard: best line value {best_value} for {side}");
    best_mv
}
