//! Player strategies
//!
//! A player looks at the board and proposes a move for its color. It only ever
//! proposes targets produced by [`Board::get_possible_moves`] with the legality
//! filter on; returning `None` tells the driver that no move is available.
//!
//! - [`RandomPlayer`] - uniformly random piece, then a random move of that piece
//! - [`FirstMovePlayer`] - the first legal move in piece-handle order
//! - [`ScriptedPlayer`] - replays a fixed list of `(from, to)` squares

use std::collections::VecDeque;

use chess_engine::{Board, Color, PieceId, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// A move chosen by a player, not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMove {
    pub piece: PieceId,
    pub target: Square,
}

impl PlannedMove {
    pub fn new(piece: PieceId, target: Square) -> Self {
        Self { piece, target }
    }
}

/// Anything that can pick a move for one side.
pub trait Player {
    fn name(&self) -> &str;

    /// Pick a move for `color`, or `None` when no legal move is available.
    ///
    /// The board is borrowed mutably because legality filtering probes moves; it is
    /// returned unchanged.
    fn get_next_move(&mut self, board: &mut Board, color: Color) -> Option<PlannedMove>;
}

/// Picks a random piece with at least one legal move, then a random move of it.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Random player seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible random player.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_next_move(&mut self, board: &mut Board, color: Color) -> Option<PlannedMove> {
        let mut pieces: Vec<PieceId> = board.active_pieces(color).map(|(id, _)| id).collect();
        pieces.shuffle(&mut self.rng);

        for piece in pieces {
            let moves = board.get_possible_moves(piece, true);
            if moves.is_empty() {
                continue;
            }
            let target = moves[self.rng.random_range(0..moves.len())];
            return Some(PlannedMove::new(piece, target));
        }

        debug!("[PLAYER] {} found no move for {}", self.name, color);
        None
    }
}

/// Always plays the first legal move, which makes games fully deterministic.
pub struct FirstMovePlayer {
    name: String,
}

impl FirstMovePlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for FirstMovePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_next_move(&mut self, board: &mut Board, color: Color) -> Option<PlannedMove> {
        board
            .legal_moves(color)
            .first()
            .map(|&(piece, target)| PlannedMove::new(piece, target))
    }
}

/// Replays moves given as `(from, to)` squares and runs dry when the script ends.
pub struct ScriptedPlayer {
    name: String,
    script: VecDeque<(Square, Square)>,
}

impl ScriptedPlayer {
    pub fn new(name: impl Into<String>, script: impl IntoIterator<Item = (Square, Square)>) -> Self {
        Self {
            name: name.into(),
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_next_move(&mut self, board: &mut Board, _color: Color) -> Option<PlannedMove> {
        let (from, to) = self.script.pop_front()?;
        let piece = board.piece_at(from)?;
        Some(PlannedMove::new(piece, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_player_picks_legal_moves() {
        let mut board = Board::new();
        let mut player = RandomPlayer::seeded("random", 7);

        for _ in 0..10 {
            let planned = player.get_next_move(&mut board, Color::White).unwrap();
            assert!(board
                .get_possible_moves(planned.piece, true)
                .contains(&planned.target));
        }
        assert_eq!(board, Board::new(), "choosing a move does not change the board");
    }

    #[test]
    fn test_random_player_is_reproducible() {
        let mut board = Board::new();
        let mut first = RandomPlayer::seeded("a", 42);
        let mut second = RandomPlayer::seeded("b", 42);

        for _ in 0..5 {
            assert_eq!(
                first.get_next_move(&mut board, Color::Black),
                second.get_next_move(&mut board, Color::Black)
            );
        }
    }

    #[test]
    fn test_random_player_without_moves() {
        let mut board: Board = "K......./......../......../......../......../......../......../.......k"
            .parse()
            .unwrap();
        let mut player = RandomPlayer::seeded("random", 1);

        // A lone king always has a step somewhere; a color without pieces has none.
        assert!(player.get_next_move(&mut board, Color::White).is_some());
        let mut empty = Board::empty();
        assert_eq!(player.get_next_move(&mut empty, Color::White), None);
    }

    #[test]
    fn test_first_move_player() {
        let mut board = Board::new();
        let mut player = FirstMovePlayer::new("first");

        let planned = player.get_next_move(&mut board, Color::White).unwrap();
        let expected = board.legal_moves(Color::White)[0];
        assert_eq!((planned.piece, planned.target), expected);
    }

    #[test]
    fn test_scripted_player_runs_dry() {
        let mut board = Board::new();
        let e1: Square = "E1".parse().unwrap();
        let e3: Square = "E3".parse().unwrap();
        let mut player = ScriptedPlayer::new("script", [(e1, e3)]);

        let planned = player.get_next_move(&mut board, Color::White).unwrap();
        assert_eq!(Some(planned.piece), board.piece_at(e1));
        assert_eq!(planned.target, e3);
        assert_eq!(player.remaining(), 0);
        assert_eq!(player.get_next_move(&mut board, Color::White), None);
    }
}
