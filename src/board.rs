use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() { Side::White } else { Side::Black };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Self { kind, side })
    }
}

/// Parse a square like "e2" into (row, col). Row 0 is rank 8.
pub fn parse_square(s: &str) -> Option<(u8, u8)> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some((7 - (rank - b'1'), file - b'a'))
}

pub fn square_name(row: u8, col: u8) -> String {
    format!("{}{}", (b'a' + col) as char, (b'1' + (7 - row)) as char)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

impl Move {
    pub fn new(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Self {
        Self { from_row, from_col, to_row, to_col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_name(self.from_row, self.from_col),
            square_name(self.to_row, self.to_col)
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("move must be 4 characters like 'e2e4'")]
    Length,
    #[error("bad square '{0}'")]
    Square(String),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseMoveError::Length);
        }
        let from = parse_square(&s[..2]).ok_or_else(|| ParseMoveError::Square(s[..2].to_string()))?;
        let to = parse_square(&s[2..]).ok_or_else(|| ParseMoveError::Square(s[2..].to_string()))?;
        Ok(Move::new(from.0, from.1, to.0, to.1))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("unexpected character '{0}' in piece placement")]
    BadChar(char),
    #[error("rank {0} does not span 8 files")]
    BadRankWidth(usize),
    #[error("expected 8 ranks, found {0}")]
    BadRankCount(usize),
}

/// An 8x8 grid of optional pieces. Value type: `apply_move` returns a new
/// board and never mutates in place, so the search needs no undo logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self { squares: [[None; BOARD_SIZE]; BOARD_SIZE] }
    }

    /// Standard starting position: Black on rows 0-1, White on rows 6-7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for col in 0..BOARD_SIZE {
            board.squares[0][col] = Some(Piece::new(BACK_RANK[col], Side::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Side::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Side::White));
            board.squares[7][col] = Some(Piece::new(BACK_RANK[col], Side::White));
        }
        board
    }

    /// Parse the piece-placement field of a FEN string. A full FEN line is
    /// accepted; everything after the first space is ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(FenError::BadRankCount(ranks.len()));
        }
        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else if let Some(piece) = Piece::from_char(c) {
                    if col >= BOARD_SIZE {
                        return Err(FenError::BadRankWidth(row));
                    }
                    board.squares[row][col] = Some(piece);
                    col += 1;
                } else {
                    return Err(FenError::BadChar(c));
                }
            }
            if col != BOARD_SIZE {
                return Err(FenError::BadRankWidth(row));
            }
        }
        Ok(board)
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.squares[row][col]
    }

    /// Copy of this board with `piece` placed at (row, col). Position setup
    /// helper; play goes through `apply_move`.
    pub fn with_piece(mut self, row: usize, col: usize, piece: Piece) -> Self {
        self.squares[row][col] = Some(piece);
        self
    }

    /// New board with the move played: source emptied, destination
    /// overwritten (a capture is a plain overwrite).
    pub fn apply_move(&self, mv: Move) -> Self {
        let mut next = *self;
        next.squares[mv.to_row as usize][mv.to_col as usize] =
            next.squares[mv.from_row as usize][mv.from_col as usize];
        next.squares[mv.from_row as usize][mv.from_col as usize] = None;
        next
    }

    /// All occupied squares as (row, col, piece), row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| self.squares[row][col].map(|p| (row, col, p)))
        })
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn has_king(&self, side: Side) -> bool {
        self.pieces().any(|(_, _, p)| p.kind == PieceKind::King && p.side == side)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", 8 - row)?;
            for col in 0..BOARD_SIZE {
                match self.squares[row][col] {
                    Some(p) => write!(f, " {}", p.to_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
