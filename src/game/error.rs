//! Error types for game module
//!
//! Provides custom error types for the game driver: engine failures, moves a
//! player proposes that move generation never produced, bad starting layouts
//! and failures while rendering the board.

use chess_engine::{ChessEngineError, Color, PieceId, Square};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Engine rejected an operation
    #[error("Engine error: {0}")]
    Engine(#[from] ChessEngineError),

    /// Player proposed a move outside the piece's legal moves
    #[error("Invalid move by {color}: {piece} to {target}")]
    InvalidMove {
        color: Color,
        piece: PieceId,
        target: Square,
    },

    /// Starting layout is unusable for a game
    #[error("Invalid starting position: {message}")]
    InvalidPosition { message: String },

    /// Writing the board rendering failed
    #[error("Failed to render board: {0}")]
    Render(#[from] std::io::Error),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
