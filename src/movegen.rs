use crate::board::{Board, Move, Side, BOARD_SIZE};
use crate::rules::is_legal;

const N: i32 = BOARD_SIZE as i32;

fn moves_from_square(board: &Board, from_row: i32, from_col: i32, out: &mut Vec<Move>) {
    for to_row in 0..N {
        for to_col in 0..N {
            if is_legal(board, from_row, from_col, to_row, to_col) {
                out.push(Move::new(
                    from_row as u8,
                    from_col as u8,
                    to_row as u8,
                    to_col as u8,
                ));
            }
        }
    }
}

/// Every legal move for `side`, in ascending (from_row, from_col, to_row,
/// to_col) order. The full 64x64 cross product filtered through `is_legal`;
/// the fixed order makes enumeration (and the hard tier's tie-breaking)
/// reproducible.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for from_row in 0..N {
        for from_col in 0..N {
            match board.piece_at(from_row as usize, from_col as usize) {
                Some(p) if p.side == side => {}
                _ => continue,
            }
            moves_from_square(board, from_row, from_col, &mut moves);
        }
    }
    moves
}

/// Legal moves for the one piece of `side` at (row, col); empty when the
/// square is empty, out of range, or holds the other side's piece. Agrees
/// with filtering `legal_moves` down to that source square.
pub fn legal_moves_from(board: &Board, side: Side, row: i32, col: i32) -> Vec<Move> {
    let mut moves = Vec::new();
    if !(0..N).contains(&row) || !(0..N).contains(&col) {
        return moves;
    }
    match board.piece_at(row as usize, col as usize) {
        Some(p) if p.side == side => {}
        _ => return moves,
    }
    moves_from_square(board, row, col, &mut moves);
    moves
}
