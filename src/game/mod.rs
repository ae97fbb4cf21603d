//! Game module - players and the turn loop around the chess engine
//!
//! The engine in `chess_engine` knows the rules; this module decides who moves
//! and when the game is over.
//!
//! # Module Organization
//!
//! - `player` - the `Player` trait and the built-in strategies
//! - `driver` - `ChessGame`, the turn loop and `GameOutcome`
//! - `config` - `GameConfig`, filled in by the CLI
//! - `error` - `GameError` and `GameResult`

pub mod config;
pub mod driver;
pub mod error;
pub mod player;

pub use config::{GameConfig, PlayerKind};
pub use driver::{ChessGame, GameOutcome, GameSummary};
pub use error::{GameError, GameResult};
pub use player::{FirstMovePlayer, PlannedMove, Player, RandomPlayer, ScriptedPlayer};
