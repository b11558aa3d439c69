use crate::board::{Board, PieceKind, Side, BOARD_SIZE};

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Every square strictly between source and destination must be empty.
/// Only called for straight or diagonal lines, so stepping by the sign of
/// each delta lands exactly on the destination (at most 7 steps).
fn path_clear(board: &Board, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
    let row_step = (to_row - from_row).signum();
    let col_step = (to_col - from_col).signum();
    let mut row = from_row + row_step;
    let mut col = from_col + col_step;
    while (row, col) != (to_row, to_col) {
        if board.piece_at(row as usize, col as usize).is_some() {
            return false;
        }
        row += row_step;
        col += col_step;
    }
    true
}

/// Movement legality for the piece at the source square. Total over all
/// integer coordinates: out-of-range squares, an empty source, and a
/// same-side destination all evaluate to false rather than erroring.
///
/// This is movement legality only. Whether the move exposes the mover's own
/// king is deliberately not checked.
pub fn is_legal(board: &Board, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
    if !in_bounds(from_row, from_col) || !in_bounds(to_row, to_col) {
        return false;
    }
    let piece = match board.piece_at(from_row as usize, from_col as usize) {
        Some(p) => p,
        None => return false,
    };
    let target = board.piece_at(to_row as usize, to_col as usize);
    if target.is_some_and(|t| t.side == piece.side) {
        return false;
    }

    let row_diff = (to_row - from_row).abs();
    let col_diff = (to_col - from_col).abs();

    match piece.kind {
        PieceKind::Pawn => {
            let dir: i32 = if piece.side == Side::White { -1 } else { 1 };
            let home_row: i32 = if piece.side == Side::White { 6 } else { 1 };

            // Forward moves never capture.
            if from_col == to_col && target.is_none() {
                if to_row == from_row + dir {
                    return true;
                }
                // Double step from the home row needs the skipped square
                // empty as well.
                if from_row == home_row && to_row == from_row + 2 * dir {
                    return board
                        .piece_at((from_row + dir) as usize, from_col as usize)
                        .is_none();
                }
                return false;
            }
            // Diagonal step is capture-only; a same-side target was already
            // rejected above.
            col_diff == 1 && to_row == from_row + dir && target.is_some()
        }
        PieceKind::Knight => {
            (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
        }
        PieceKind::King => row_diff <= 1 && col_diff <= 1,
        PieceKind::Bishop => {
            row_diff == col_diff && path_clear(board, from_row, from_col, to_row, to_col)
        }
        PieceKind::Rook => {
            (row_diff == 0) != (col_diff == 0)
                && path_clear(board, from_row, from_col, to_row, to_col)
        }
        PieceKind::Queen => {
            (row_diff == 0 || col_diff == 0 || row_diff == col_diff)
                && path_clear(board, from_row, from_col, to_row, to_col)
        }
    }
}
