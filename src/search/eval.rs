use crate::board::{Board, PieceKind, Side};

const PAWN: i32 = 1;
const KNIGHT: i32 = 3;
const BISHOP: i32 = 3;
const ROOK: i32 = 5;
const QUEEN: i32 = 9;
const KING: i32 = 1000;

/// Sentinel standing in for infinity; strictly dominates any reachable
/// material score.
pub const INF: i32 = 1_000_000;

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN,
        PieceKind::Knight => KNIGHT,
        PieceKind::Bishop => BISHOP,
        PieceKind::Rook => ROOK,
        PieceKind::Queen => QUEEN,
        PieceKind::King => KING,
    }
}

/// Material balance, positive for Black. The search maximizes for Black and
/// minimizes for White; that sign convention lives here, not in the caller.
pub fn evaluate(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, _, p)| {
            let value = piece_value(p.kind);
            match p.side {
                Side::Black => value,
                Side::White => -value,
            }
        })
        .sum()
}
