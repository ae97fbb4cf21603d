//! Board state: occupancy grid, piece arena and the active-piece index
//!
//! The board stores the same information twice:
//! - `grid` answers "what stands on this square"
//! - `active` answers "where does this piece stand", per color
//!
//! Both are updated together by every mutation (`place`, `execute_move` and
//! the private undo), and [`Board::validate`] checks that they describe the
//! same position. Pieces live in an append-only `arena`; a [`PieceId`] is an
//! index into it, which gives every piece instance a stable identity.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::constants::*;
use super::error::{ChessEngineError, ChessEngineResult};
use super::make_unmake::MoveRecord;
use super::types::*;

/// Starting position in layout text: one column per file A..H, ranks 0..7 top to bottom.
pub const STANDARD_LAYOUT: &str =
    "RP....pr/NP....pn/BP....pb/QP....pq/KP....pk/BP....pb/NP....pn/RP....pr";

type Grid = [[Option<PieceId>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Indexed `[file][rank]`.
    pub(crate) grid: Grid,
    pub(crate) arena: Vec<Piece>,
    pub(crate) active: [BTreeMap<PieceId, Square>; 2],
    pub(crate) kings: [Option<PieceId>; 2],
    pub(crate) last_move: Option<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Standard starting position, 16 pieces per side.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for square in Square::all() {
            let back_rank_kind = BACK_RANK_ORDER[square.file() as usize];
            let piece = Color::ALL.into_iter().find_map(|color| {
                if square.rank() == color.back_rank() {
                    Some(Piece::new(back_rank_kind, color))
                } else if square.rank() == color.pawn_rank() {
                    Some(Piece::new(PieceKind::Pawn, color))
                } else {
                    None
                }
            });
            if let Some(piece) = piece {
                board.put(piece, square);
            }
        }
        board
    }

    /// A board without pieces, for building custom positions with [`Board::place`].
    pub fn empty() -> Self {
        Board {
            grid: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            arena: Vec::with_capacity(32),
            active: [BTreeMap::new(), BTreeMap::new()],
            kings: [None, None],
            last_move: None,
        }
    }

    /// Put a new piece on an empty square.
    ///
    /// Kings register as their color's king; a second king of the same color is rejected.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> ChessEngineResult<PieceId> {
        if self.piece_at(square).is_some() {
            return Err(ChessEngineError::SquareOccupied { square });
        }
        if kind == PieceKind::King && self.kings[color.index()].is_some() {
            return Err(ChessEngineError::DuplicateKing { color });
        }
        Ok(self.put(Piece::new(kind, color), square))
    }

    /// Unchecked placement used by `new` and `place`.
    fn put(&mut self, piece: Piece, square: Square) -> PieceId {
        let id = self.spawn(piece);
        if piece.kind == PieceKind::King && self.kings[piece.color.index()].is_none() {
            self.kings[piece.color.index()] = Some(id);
        }
        self.set_square(square, Some(id));
        self.active[piece.color.index()].insert(id, square);
        id
    }

    /// Append a piece to the arena. The piece is not on the board yet.
    pub(crate) fn spawn(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.arena.len() as u16);
        self.arena.push(piece);
        id
    }

    #[inline]
    pub(crate) fn set_square(&mut self, square: Square, occupant: Option<PieceId>) {
        self.grid[square.file() as usize][square.rank() as usize] = occupant;
    }

    /// Piece data for a handle, including pieces that were captured or promoted away.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.arena.get(id.index())
    }

    /// Handle of the piece standing on `square`.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.grid[square.file() as usize][square.rank() as usize]
    }

    /// Piece data of the piece standing on `square`.
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.piece_at(square).and_then(|id| self.piece(id))
    }

    /// Current square of an active piece; `None` once it left the board.
    pub fn position_of(&self, id: PieceId) -> Option<Square> {
        let piece = self.piece(id)?;
        self.active[piece.color.index()].get(&id).copied()
    }

    pub fn is_active(&self, id: PieceId) -> bool {
        self.position_of(id).is_some()
    }

    /// Active pieces of a color in handle order.
    pub fn active_pieces(&self, color: Color) -> impl Iterator<Item = (PieceId, Square)> + '_ {
        self.active[color.index()].iter().map(|(&id, &square)| (id, square))
    }

    pub fn active_count(&self, color: Color) -> usize {
        self.active[color.index()].len()
    }

    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.kings[color.index()]
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king(color).and_then(|king| self.position_of(king))
    }

    /// Record of the last committed `execute_move`.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Check that grid, arena and active-piece index describe the same position.
    pub fn validate(&self) -> ChessEngineResult<()> {
        let inconsistent = |message: String| Err(ChessEngineError::Inconsistent { message });

        for color in Color::ALL {
            for (&id, &square) in &self.active[color.index()] {
                let Some(piece) = self.piece(id) else {
                    return inconsistent(format!("{id} is indexed but missing from the arena"));
                };
                if piece.color != color {
                    return inconsistent(format!("{id} is indexed under {color} but is {}", piece.color));
                }
                if self.piece_at(square) != Some(id) {
                    return inconsistent(format!("{id} is indexed at {square} but the grid disagrees"));
                }
            }
        }

        for square in Square::all() {
            let Some(id) = self.piece_at(square) else {
                continue;
            };
            if self.position_of(id) != Some(square) {
                return inconsistent(format!("{square} holds {id} which is not indexed there"));
            }
        }

        for color in Color::ALL {
            if let Some(king) = self.king(color) {
                if self.piece(king).map(|piece| piece.kind) != Some(PieceKind::King) {
                    return inconsistent(format!("{color} king handle {king} is not a king"));
                }
            }
        }

        Ok(())
    }

    /// Layout text of the current position; the inverse of `FromStr`.
    pub fn to_layout(&self) -> String {
        let columns: Vec<String> = (0..BOARD_SIZE)
            .map(|file| {
                (0..BOARD_SIZE)
                    .map(|rank| {
                        Square::new(file, rank)
                            .and_then(|square| self.occupant(square))
                            .map_or(EMPTY_SYMBOL, Piece::symbol)
                    })
                    .collect()
            })
            .collect();
        columns.join(LAYOUT_SEPARATOR.encode_utf8(&mut [0; 4]))
    }
}

impl FromStr for Board {
    type Err = ChessEngineError;

    /// Parse layout text: eight `/`-separated file columns, each listing ranks 0..7 with
    /// piece symbols (`PNBRQK` White, `pnbrqk` Black) or `.` for an empty square.
    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let invalid = |message: String| ChessEngineError::InvalidLayout { message };

        let columns: Vec<&str> = layout.trim().split(LAYOUT_SEPARATOR).collect();
        if columns.len() != BOARD_SIZE as usize {
            return Err(invalid(format!("expected {BOARD_SIZE} columns, found {}", columns.len())));
        }

        let mut board = Board::empty();
        for (file, column) in columns.iter().enumerate() {
            let symbols: Vec<char> = column.chars().collect();
            if symbols.len() != BOARD_SIZE as usize {
                return Err(invalid(format!(
                    "column {} has {} squares, expected {BOARD_SIZE}",
                    FILE_NAMES[file],
                    symbols.len()
                )));
            }
            for (rank, &symbol) in symbols.iter().enumerate() {
                if symbol == EMPTY_SYMBOL {
                    continue;
                }
                let (kind, color) = PieceKind::from_symbol(symbol)
                    .ok_or_else(|| invalid(format!("unknown piece symbol {symbol:?}")))?;
                let square = Square::new(file as u8, rank as u8)
                    .ok_or_else(|| invalid(format!("square {file}/{rank} is off the board")))?;
                board.place(kind, color, square)?;
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Rank 7 on top, each square as a piece glyph or a parity-colored empty glyph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{rank} ")?;
            for file in 0..BOARD_SIZE {
                if file > 0 {
                    f.write_str(" ")?;
                }
                let Some(square) = Square::new(file, rank) else {
                    continue;
                };
                match self.occupant(square) {
                    Some(piece) => write!(f, "{piece}")?,
                    None if square.is_even() => write!(f, "{EVEN_SQUARE_GLYPH}")?,
                    None => write!(f, "{ODD_SQUARE_GLYPH}")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for name in FILE_NAMES {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}
