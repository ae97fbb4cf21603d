//! # Chess Engine - Board, Move Generation & Check Detection
//!
//! ## Overview
//!
//! A small, rule-focused chess engine: it knows where every piece is, which squares each
//! piece can reach, and whether a king is in check or mated. It does not pick moves; players
//! built on top of it consume [`Board::get_possible_moves`] / [`Board::legal_moves`] and hand
//! their choice back to [`Board::execute_move`].
//!
//! ## Module Organization
//!
//! ### Core Data
//! - **[`constants`]** - direction templates, step caps, rank numbering, glyphs
//! - **[`types`]** - `Color`, `Square`, `PieceKind`, `Piece`, `PieceId`
//! - **[`error`]** - `ChessEngineError` and `ChessEngineResult`
//!
//! ### Board Logic
//! - **[`board`]** - grid, piece arena, active-piece index, layout text, rendering
//! - **[`make_unmake`]** - `execute_move`, `try_move` and the private undo
//! - **[`move_gen`]** - ray casting, legality filter, check and checkmate
//!
//! ## Rules Covered
//!
//! - Every piece moves along its direction template up to its step cap; pawns move and
//!   capture straight ahead only, two squares before their first move.
//! - Pawns reaching the far rank (rank 7 for White, rank 0 for Black) become queens.
//! - Castling and en passant do not exist in this engine.
//! - Checkmate only looks at the king's own escapes (see [`Board::is_check_mate`]).
//!
//! ## Usage
//!
//! ```rust
//! use chess_engine::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let (piece, target) = moves[0];
//! let record = board.execute_move(piece, target).unwrap();
//! assert_eq!(board.position_of(record.piece()), Some(target));
//! assert!(!board.is_check_mate(Color::Black));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod make_unmake;
pub mod move_gen;
pub mod types;


pub use board::{Board, STANDARD_LAYOUT};
pub use error::{ChessEngineError, ChessEngineResult};
pub use make_unmake::MoveRecord;
pub use types::{Color, Piece, PieceId, PieceKind, Square};
