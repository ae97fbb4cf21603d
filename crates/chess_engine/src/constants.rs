//! # Chess Engine Constants - Direction Templates & Board Geometry
//!
//! ## Overview
//!
//! Every piece in this engine moves by repeating a unit step along one of a fixed set of
//! direction vectors. A vector is a `(file_delta, rank_delta)` pair, so `(0, 1)` walks one
//! rank towards Black's back rank and `(1, 0)` walks one file towards the H file.
//!
//! ## Direction Templates
//!
//! Three templates cover the whole board:
//! - **Straight**: the four orthogonal unit steps (rooks)
//! - **Diagonal**: the four diagonal unit steps (bishops)
//! - **Knight**: the eight `(±1, ±2)` / `(±2, ±1)` jumps
//!
//! Queens and kings share the union of the straight and diagonal templates ([`ROYAL_DIRS`]);
//! what separates them is the step cap, not the direction set. Pawns carry a single forward
//! vector that depends on their color.
//!
//! ## Rank Orientation
//!
//! Rank 0 is White's back rank and rank 7 is Black's. White pawns walk `+rank` and promote on
//! rank 7, Black pawns walk `-rank` and promote on rank 0.

use crate::types::PieceKind;

/// A `(file_delta, rank_delta)` step.
pub type Direction = (i8, i8);

/// Number of files and ranks.
pub const BOARD_SIZE: u8 = 8;

/// File letters in index order.
pub const FILE_NAMES: [char; BOARD_SIZE as usize] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

pub const STRAIGHT_DIRS: [Direction; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const DIAGONAL_DIRS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_DIRS: [Direction; 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Straight followed by diagonal steps, shared by queens and kings.
pub const ROYAL_DIRS: [Direction; 8] = [
    STRAIGHT_DIRS[0],
    STRAIGHT_DIRS[1],
    STRAIGHT_DIRS[2],
    STRAIGHT_DIRS[3],
    DIAGONAL_DIRS[0],
    DIAGONAL_DIRS[1],
    DIAGONAL_DIRS[2],
    DIAGONAL_DIRS[3],
];

pub const WHITE_PAWN_DIRS: [Direction; 1] = [(0, 1)];
pub const BLACK_PAWN_DIRS: [Direction; 1] = [(0, -1)];

/// Step cap for bishops, rooks and queens; enough to cross the whole board.
pub const SLIDING_MAX_STEPS: u8 = BOARD_SIZE;

/// Step cap for a pawn that has not moved yet.
pub const PAWN_FIRST_MOVE_STEPS: u8 = 2;

/// Step cap for knights, kings and pawns that already moved.
pub const SINGLE_STEP: u8 = 1;

pub const WHITE_BACK_RANK: u8 = 0;
pub const WHITE_PAWN_RANK: u8 = 1;
pub const BLACK_PAWN_RANK: u8 = 6;
pub const BLACK_BACK_RANK: u8 = 7;

/// Back rank pieces from the A file to the H file.
pub const BACK_RANK_ORDER: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Empty square glyph when `file + rank` is even.
pub const EVEN_SQUARE_GLYPH: char = '◻';

/// Empty square glyph when `file + rank` is odd.
pub const ODD_SQUARE_GLYPH: char = '◼';

/// Empty square in layout text.
pub const EMPTY_SYMBOL: char = '.';

/// Separator between file columns in layout text.
pub const LAYOUT_SEPARATOR: char = '/';
