//! Move generation, check and checkmate detection
//!
//! All pieces share one generator: walk each direction of the piece's template up to its
//! step cap, stopping on the board edge or a friendly piece and stopping after an enemy
//! piece (the capture ends the ray).
//!
//! ## Legality Filter
//!
//! With `filter_self_check` set, every candidate square is probed with
//! [`Board::is_in_check_after_move`] and the ray stops at the first square that would leave
//! the mover's king attacked. Probes only call the unfiltered generator through
//! [`Board::is_in_check`], so the recursion is one level deep.

use crate::board::Board;
use crate::constants::Direction;
use crate::types::*;

impl Board {
    /// Squares reached along one ray from `from`, capture square included.
    fn ray(&self, from: Square, direction: Direction, max_steps: u8, color: Color) -> Vec<Square> {
        let mut squares = Vec::with_capacity(max_steps as usize);
        let mut current = from;

        for _ in 0..max_steps {
            let Some(next) = current.offset(direction) else {
                break;
            };
            match self.occupant(next) {
                Some(blocker) if blocker.color == color => break,
                Some(_) => {
                    squares.push(next);
                    break;
                }
                None => squares.push(next),
            }
            current = next;
        }

        squares
    }

    /// Moves ignoring whether the mover's own king ends up attacked.
    pub fn pseudo_legal_moves(&self, piece: PieceId) -> Vec<Square> {
        let Some(from) = self.position_of(piece) else {
            return Vec::new();
        };
        let mover = self.arena[piece.index()];

        mover
            .directions()
            .iter()
            .flat_map(|&direction| self.ray(from, direction, mover.get_max_no_of_steps(), mover.color))
            .collect()
    }

    /// Target squares for `piece`. Pieces that are not on the board have no moves.
    ///
    /// With `filter_self_check`, a ray is cut at the first square that leaves the mover's
    /// king in check, so a pinned slider keeps only the squares before that point.
    pub fn get_possible_moves(&mut self, piece: PieceId, filter_self_check: bool) -> Vec<Square> {
        if !filter_self_check {
            return self.pseudo_legal_moves(piece);
        }
        let Some(from) = self.position_of(piece) else {
            return Vec::new();
        };
        let mover = self.arena[piece.index()];

        let mut moves = Vec::new();
        for &direction in mover.directions() {
            for target in self.ray(from, direction, mover.get_max_no_of_steps(), mover.color) {
                if self.leaves_king_in_check(piece, from, target) {
                    break;
                }
                moves.push(target);
            }
        }
        moves
    }

    /// Every filtered move of every active piece of `color`, in handle order.
    pub fn legal_moves(&mut self, color: Color) -> Vec<(PieceId, Square)> {
        let pieces: Vec<PieceId> = self.active_pieces(color).map(|(id, _)| id).collect();
        pieces
            .into_iter()
            .flat_map(|id| {
                self.get_possible_moves(id, true)
                    .into_iter()
                    .map(move |target| (id, target))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// True when an opposing piece's unfiltered moves reach `color`'s king.
    ///
    /// A color without a king on the board is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_square) = self.king_square(color) else {
            return false;
        };
        self.active_pieces(color.opponent())
            .any(|(attacker, _)| self.pseudo_legal_moves(attacker).contains(&king_square))
    }

    /// Probe `piece` to `target` and report whether its own king is attacked afterwards.
    /// A piece that is not on the board reports `false`.
    pub fn is_in_check_after_move(&mut self, piece: PieceId, target: Square) -> bool {
        match self.position_of(piece) {
            Some(from) => self.leaves_king_in_check(piece, from, target),
            None => false,
        }
    }

    fn leaves_king_in_check(&mut self, piece: PieceId, from: Square, target: Square) -> bool {
        let color = self.arena[piece.index()].color;
        self.probe(piece, from, target, |board| board.is_in_check(color))
    }

    /// Checkmate as far as the king itself can tell: in check, and none of the king's own
    /// moves escapes.
    ///
    /// Moves of other pieces that would block the attack or capture the attacker are not
    /// considered, so such positions are reported as checkmate as well.
    pub fn is_check_mate(&mut self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }
        let Some(king) = self.king(color) else {
            return false;
        };

        let king_moves = self.get_possible_moves(king, true);
        !king_moves
            .iter()
            .any(|&target| !self.is_in_check_after_move(king, target))
    }
}
