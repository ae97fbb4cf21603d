//! # Chess Engine Core Types - Colors, Squares & the Piece Model
//!
//! ## Overview
//!
//! This module defines the value types every other module speaks in:
//!
//! 1. **[`Color`]** - the two sides, with their forward direction and promotion rank
//! 2. **[`Square`]** - a `(file, rank)` coordinate, rank 0 being White's back rank
//! 3. **[`PieceKind`]** - the six piece kinds as a plain tagged enum
//! 4. **[`Piece`]** - kind, color and move counter of one piece instance
//! 5. **[`PieceId`]** - stable handle of a piece instance inside the board's arena
//!
//! ## Piece Identity
//!
//! Two white knights are equal as values but are different pieces. The board keeps every piece
//! it ever created in an arena and hands out [`PieceId`]s; the active-piece index is keyed by
//! those handles, never by piece values. A promoted pawn is not mutated into a queen, a fresh
//! queen with a fresh id takes its place.
//!
//! ## Movement Templates
//!
//! Movement is a pure function of the piece state:
//!
//! | Kind   | Directions              | Max steps                 |
//! |--------|-------------------------|---------------------------|
//! | Pawn   | one forward step        | 2 before first move, else 1 |
//! | Knight | 8 jumps                 | 1                         |
//! | Bishop | 4 diagonals             | 8                         |
//! | Rook   | 4 orthogonals           | 8                         |
//! | Queen  | orthogonals + diagonals | 8                         |
//! | King   | orthogonals + diagonals | 1                         |

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use super::constants::*;
use super::error::ChessEngineError;

/// The two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Index for per-color arrays: White = 0, Black = 1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => BLACK_BACK_RANK,
            Color::Black => WHITE_BACK_RANK,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => WHITE_BACK_RANK,
            Color::Black => BLACK_BACK_RANK,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => WHITE_PAWN_RANK,
            Color::Black => BLACK_PAWN_RANK,
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "WHITE"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

/// A board coordinate. `file` 0..=7 maps to A..H, `rank` 0..=7 counts from White's back rank.
///
/// The textual form is the file letter followed by the rank index: `E0` is where the White king
/// starts, `E7` is where the Black king starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square, `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    pub fn file_name(self) -> char {
        FILE_NAMES[self.file as usize]
    }

    /// The square one `direction` step away, `None` when that leaves the board.
    #[inline]
    pub fn offset(self, (file_delta, rank_delta): Direction) -> Option<Square> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if file < 0 || rank < 0 {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }

    /// Parity used to pick the empty-square glyph.
    #[inline]
    pub const fn is_even(self) -> bool {
        (self.file + self.rank) % 2 == 0
    }

    /// All 64 squares, file-major: A0, A1, .., A7, B0, ..
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|file| (0..BOARD_SIZE).map(move |rank| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_name(), self.rank)
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidSquare {
            input: s.to_string(),
        };

        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = FILE_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(&file))
            .ok_or_else(invalid)?;
        let rank = rank.to_digit(10).ok_or_else(invalid)?;

        Square::new(file as u8, rank as u8).ok_or_else(invalid)
    }
}

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// White (upper-case) identity letter.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Inverse of [`Piece::symbol`]: the case of the letter decides the color.
    pub fn from_symbol(symbol: char) -> Option<(PieceKind, Color)> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let upper = symbol.to_ascii_uppercase();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == upper)
            .map(|kind| (kind, color))
    }

    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Handle of a piece instance in the board arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One piece instance: what it is, whose it is and how often it moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    no_of_moves: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            no_of_moves: 0,
        }
    }

    /// Direction template for this piece.
    pub fn directions(&self) -> &'static [Direction] {
        match (self.kind, self.color) {
            (PieceKind::Pawn, Color::White) => &WHITE_PAWN_DIRS,
            (PieceKind::Pawn, Color::Black) => &BLACK_PAWN_DIRS,
            (PieceKind::Knight, _) => &KNIGHT_DIRS,
            (PieceKind::Bishop, _) => &DIAGONAL_DIRS,
            (PieceKind::Rook, _) => &STRAIGHT_DIRS,
            (PieceKind::Queen, _) | (PieceKind::King, _) => &ROYAL_DIRS,
        }
    }

    /// How far the piece may travel along one direction in its current state.
    pub fn get_max_no_of_steps(&self) -> u8 {
        match self.kind {
            PieceKind::Pawn if self.has_moved() => SINGLE_STEP,
            PieceKind::Pawn => PAWN_FIRST_MOVE_STEPS,
            kind if kind.is_sliding() => SLIDING_MAX_STEPS,
            _ => SINGLE_STEP,
        }
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.no_of_moves > 0
    }

    #[inline]
    pub fn no_of_moves(&self) -> u32 {
        self.no_of_moves
    }

    pub fn update_after_move(&mut self) {
        self.no_of_moves += 1;
    }

    /// Rewinds the counter to a value recorded before a probe.
    pub(crate) fn restore_moves(&mut self, no_of_moves: u32) {
        self.no_of_moves = no_of_moves;
    }

    /// Identity letter, upper-case for White and lower-case for Black.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Unicode glyph; White uses the filled set, Black the outline set.
    pub fn glyph(&self) -> &'static str {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => "♚",
            (Color::White, PieceKind::Queen) => "♛",
            (Color::White, PieceKind::Rook) => "♜",
            (Color::White, PieceKind::Bishop) => "♝",
            (Color::White, PieceKind::Knight) => "♞",
            (Color::White, PieceKind::Pawn) => "♟\u{fe0e}",
            (Color::Black, PieceKind::King) => "♔",
            (Color::Black, PieceKind::Queen) => "♕",
            (Color::Black, PieceKind::Rook) => "♖",
            (Color::Black, PieceKind::Bishop) => "♗",
            (Color::Black, PieceKind::Knight) => "♘",
            (Color::Black, PieceKind::Pawn) => "♙",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
