//! Game configuration
//!
//! Everything needed to set up one game: who plays each side, the starting
//! position, the random seed and when to stop. The CLI fills this in from its
//! arguments; tests build it directly.

use chess_engine::{Board, Color};
use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::player::{FirstMovePlayer, Player, RandomPlayer};

/// Built-in player strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    /// Random piece, random move
    #[default]
    Random,
    /// First legal move in piece order
    First,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Seed for random players; Black uses `seed + 1` so both sides differ.
    pub seed: Option<u64>,
    /// Stop after this many plies even without a result.
    pub max_plies: Option<u32>,
    /// Layout text of the starting position; the standard position when absent.
    pub layout: Option<String>,
    /// Write the board after every ply.
    pub render: bool,
}

impl GameConfig {
    /// Starting board, checked to have one king per side.
    ///
    /// White acts first, so a layout where Black is already in check is rejected:
    /// White could otherwise capture the Black king.
    pub fn initial_board(&self) -> GameResult<Board> {
        let board = match &self.layout {
            Some(layout) => layout.parse::<Board>()?,
            None => Board::new(),
        };
        for color in Color::ALL {
            if board.king(color).is_none() {
                return Err(GameError::InvalidPosition {
                    message: format!("{color} has no king"),
                });
            }
        }
        if board.is_in_check(Color::Black) {
            return Err(GameError::InvalidPosition {
                message: format!("{} is in check before {} moves", Color::Black, Color::White),
            });
        }
        board.validate()?;
        Ok(board)
    }

    pub fn kind_for(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn build_player(&self, color: Color) -> Box<dyn Player> {
        let name = format!("{:?} ({color})", self.kind_for(color));
        match self.kind_for(color) {
            PlayerKind::Random => match self.seed {
                Some(seed) => Box::new(RandomPlayer::seeded(
                    name,
                    seed.wrapping_add(color.index() as u64),
                )),
                None => Box::new(RandomPlayer::new(name)),
            },
            PlayerKind::First => Box::new(FirstMovePlayer::new(name)),
        }
    }
}
