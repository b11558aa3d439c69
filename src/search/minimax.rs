use crate::board::{Board, Side};
use crate::movegen::legal_moves;
use crate::search::eval::{evaluate, INF};

/// Plain fixed-depth minimax over full-board copies. `maximizing` picks the
/// side to move: Black maximizes the evaluator, White minimizes it.
///
/// A position where the side to move has no legal moves scores as maximally
/// bad for that side (±INF); with check detection out of scope this stands
/// in for a terminal position.
pub fn minimax(board: &Board, plies: u32, maximizing: bool) -> i32 {
    if plies == 0 {
        return evaluate(board);
    }
    let side = if maximizing { Side::Black } else { Side::White };
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return if maximizing { -INF } else { INF };
    }
    let mut best = if maximizing { -INF } else { INF };
    for mv in moves {
        let score = minimax(&board.apply_move(mv), plies - 1, !maximizing);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}
