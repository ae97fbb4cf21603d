//! Error types for chess engine
//!
//! Covers board setup, layout parsing and lookups of pieces that are no longer
//! on the board. Chess legality is not an error here: `execute_move`
//! trusts its caller to pass a target produced by move generation.

use thiserror::Error;

use crate::types::{Color, PieceId, Square};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Piece handle is unknown or the piece was captured/promoted
    #[error("Piece {piece} is not active on the board")]
    PieceNotActive { piece: PieceId },

    /// Setup tried to put a second piece on a square
    #[error("Square {square} is already occupied")]
    SquareOccupied { square: Square },

    /// Setup tried to give a color a second king
    #[error("{color} already has a king")]
    DuplicateKing { color: Color },

    /// Square text could not be parsed
    #[error("Invalid square: {input:?} (expected a file A-H followed by a rank 0-7)")]
    InvalidSquare { input: String },

    /// Layout text could not be parsed
    #[error("Invalid layout: {message}")]
    InvalidLayout { message: String },

    /// Grid and active-piece index disagree
    #[error("Board state is inconsistent: {message}")]
    Inconsistent { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
