//! Game driver - alternates players until the game ends
//!
//! Each iteration of [`ChessGame::run`]:
//! 1. stops with [`GameOutcome::Checkmate`] if the side to act is mated
//! 2. stops with [`GameOutcome::PlyLimit`] once the configured limit is reached
//! 3. asks that side's [`Player`] for a move; `None` ends with [`GameOutcome::NoLegalMove`]
//! 4. checks the move against the engine's legal moves and executes it
//! 5. hands the turn to the other side and renders the board
//! 6. stops with [`GameOutcome::Draw`] once both sides are down to a lone king

use std::fmt;
use std::io::Write;

use chess_engine::{Board, Color, MoveRecord};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::config::GameConfig;
use super::error::{GameError, GameResult};
use super::player::{PlannedMove, Player};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameOutcome {
    Checkmate { loser: Color },
    NoLegalMove { color: Color },
    Draw,
    PlyLimit { plies: u32 },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { loser } => Some(loser.opponent()),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { loser } => {
                write!(f, "Checkmate! {} wins", loser.opponent())
            }
            GameOutcome::NoLegalMove { color } => {
                write!(f, "{color} could not find any more moves!")
            }
            GameOutcome::Draw => write!(f, "Draw!"),
            GameOutcome::PlyLimit { plies } => write!(f, "Stopped after {plies} plies"),
        }
    }
}

/// Machine-readable report of a finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub winner: Option<Color>,
    pub plies: u32,
    pub white_pieces: usize,
    pub black_pieces: usize,
    pub final_layout: String,
}

pub struct ChessGame {
    board: Board,
    players: [Box<dyn Player>; 2],
    player_to_act: Color,
    plies: u32,
    max_plies: Option<u32>,
    render: bool,
}

impl ChessGame {
    /// A game on `board` with White to act first, no ply limit and no rendering.
    pub fn new(board: Board, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            board,
            players: [white, black],
            player_to_act: Color::White,
            plies: 0,
            max_plies: None,
            render: false,
        }
    }

    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        let board = config.initial_board()?;
        let game = Self::new(
            board,
            config.build_player(Color::White),
            config.build_player(Color::Black),
        )
        .with_max_plies(config.max_plies)
        .with_render(config.render);
        Ok(game)
    }

    pub fn with_max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_to_act(&self) -> Color {
        self.player_to_act
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn switch_player(&mut self) {
        self.player_to_act = self.player_to_act.opponent();
    }

    /// Both sides are reduced to a lone king.
    pub fn is_draw(&self) -> bool {
        self.board.active_count(Color::White) <= 1 && self.board.active_count(Color::Black) <= 1
    }

    /// Play until checkmate, a draw, a side without moves or the ply limit.
    ///
    /// Fails with [`GameError::InvalidPosition`] when the side waiting for its turn is
    /// already in check, since its king could be captured.
    pub fn run<W: Write>(&mut self, out: &mut W) -> GameResult<GameOutcome> {
        info!(
            "[GAME] Starting: {} vs {}",
            self.players[Color::White.index()].name(),
            self.players[Color::Black.index()].name()
        );
        let waiting = self.player_to_act.opponent();
        if self.board.is_in_check(waiting) {
            return Err(GameError::InvalidPosition {
                message: format!("{waiting} is in check before {} moves", self.player_to_act),
            });
        }
        self.render_board(out)?;

        let outcome = loop {
            let color = self.player_to_act;

            if self.board.is_check_mate(color) {
                break GameOutcome::Checkmate { loser: color };
            }
            if self.max_plies.is_some_and(|limit| self.plies >= limit) {
                break GameOutcome::PlyLimit { plies: self.plies };
            }

            debug!("[GAME] {color} is next to act...");
            let player = &mut self.players[color.index()];
            let Some(planned) = player.get_next_move(&mut self.board, color) else {
                warn!("[GAME] {} could not find a move", player.name());
                break GameOutcome::NoLegalMove { color };
            };

            self.apply(color, planned)?;
            self.switch_player();
            self.plies += 1;
            self.render_board(out)?;

            if self.is_draw() {
                break GameOutcome::Draw;
            }
        };

        info!("[GAME] {outcome} (plies: {})", self.plies);
        if self.render {
            writeln!(out, "{outcome}")?;
        }
        Ok(outcome)
    }

    /// Execute a player's move after checking it is one of the piece's legal moves.
    fn apply(&mut self, color: Color, planned: PlannedMove) -> GameResult<MoveRecord> {
        let invalid = GameError::InvalidMove {
            color,
            piece: planned.piece,
            target: planned.target,
        };

        if self.board.piece(planned.piece).map(|piece| piece.color) != Some(color) {
            return Err(invalid);
        }
        if !self
            .board
            .get_possible_moves(planned.piece, true)
            .contains(&planned.target)
        {
            return Err(invalid);
        }

        let record = self.board.execute_move(planned.piece, planned.target)?;
        debug!(
            "[GAME] {color}: {} -> {}{}{}",
            record.from(),
            record.to(),
            if record.is_capture() { " (capture)" } else { "" },
            if record.is_promotion() { " (promotion)" } else { "" }
        );
        Ok(record)
    }

    fn render_board<W: Write>(&self, out: &mut W) -> GameResult<()> {
        if self.render {
            writeln!(out, "{}", self.board)?;
            writeln!(out, "iterations: {}", self.plies)?;
        }
        Ok(())
    }

    pub fn summary(&self, outcome: GameOutcome) -> GameSummary {
        GameSummary {
            outcome,
            winner: outcome.winner(),
            plies: self.plies,
            white_pieces: self.board.active_count(Color::White),
            black_pieces: self.board.active_count(Color::Black),
            final_layout: self.board.to_layout(),
        }
    }
}
