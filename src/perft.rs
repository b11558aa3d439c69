use crate::board::{Board, Side};
use crate::movegen::legal_moves;

/// Count the move sequences of `depth` plies starting with `side`, cloning
/// a board per ply. Cross-checks the enumerator against known counts.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for mv in legal_moves(board, side) {
        nodes += perft(&board.apply_move(mv), side.opponent(), depth - 1);
    }
    nodes
}
