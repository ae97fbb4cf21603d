//! Move making and unmaking
//!
//! [`Board::execute_move`] applies a move permanently and reports what happened in a
//! [`MoveRecord`]. Undoing is only possible through [`Board::try_move`], which makes a
//! move, lets the caller inspect the resulting position through a shared borrow and then
//! restores the board exactly. Because the undo information never leaves this module, an
//! undo without a matching make cannot be written, and because the inspection only gets
//! `&Board`, a second probe cannot start while one is in flight.
//!
//! ## Promotion
//!
//! A pawn reaching its promotion rank leaves the active index and a new Queen with a new
//! [`PieceId`] takes the target square. The record reports both handles, so callers never
//! keep using the pawn's stale handle. Unmaking a promotion drops that queen from the arena
//! again; probes are strictly nested, so it is always the newest arena entry.

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// Outcome of one executed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    piece: PieceId,
    from: Square,
    to: Square,
    captured: Option<PieceId>,
    promoted_from: Option<PieceId>,
    previous_no_of_moves: u32,
}

impl MoveRecord {
    /// Handle of the piece now standing on `to`; the new queen after a promotion.
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    pub fn captured(&self) -> Option<PieceId> {
        self.captured
    }

    /// The pawn that was replaced, if the move promoted.
    pub fn promoted_from(&self) -> Option<PieceId> {
        self.promoted_from
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.promoted_from.is_some()
    }
}

/// Information needed to undo a move
struct UndoInfo {
    record: MoveRecord,
    previous_last_move: Option<MoveRecord>,
}

impl Board {
    /// Apply a move without any legality checks.
    ///
    /// The caller must take `target` from [`Board::get_possible_moves`]; an illegal target is
    /// applied as given. Debug builds assert that the target does not hold a friendly piece.
    /// Fails only when `piece` is not on the board.
    pub fn execute_move(&mut self, piece: PieceId, target: Square) -> ChessEngineResult<MoveRecord> {
        let from = self
            .position_of(piece)
            .ok_or(ChessEngineError::PieceNotActive { piece })?;
        debug_assert!(
            self.occupant(target).map(|p| p.color) != Some(self.arena[piece.index()].color),
            "execute_move onto a friendly piece at {target}"
        );
        Ok(self.make_move(piece, from, target).record)
    }

    /// Make `piece`'s move to `target`, run `inspect` on the resulting position, then restore
    /// the board exactly as it was.
    pub fn try_move<R>(
        &mut self,
        piece: PieceId,
        target: Square,
        inspect: impl FnOnce(&Board) -> R,
    ) -> ChessEngineResult<R> {
        let from = self
            .position_of(piece)
            .ok_or(ChessEngineError::PieceNotActive { piece })?;
        Ok(self.probe(piece, from, target, inspect))
    }

    /// `try_move` for callers that already resolved the piece's square.
    pub(crate) fn probe<R>(
        &mut self,
        piece: PieceId,
        from: Square,
        target: Square,
        inspect: impl FnOnce(&Board) -> R,
    ) -> R {
        let undo = self.make_move(piece, from, target);
        let result = inspect(self);
        self.unmake_move(undo);
        result
    }

    fn make_move(&mut self, piece: PieceId, from: Square, to: Square) -> UndoInfo {
        let captured = self.piece_at(to);
        if let Some(victim) = captured {
            let victim_color = self.arena[victim.index()].color;
            self.active[victim_color.index()].remove(&victim);
        }

        self.set_square(from, None);

        let mover = &mut self.arena[piece.index()];
        let previous_no_of_moves = mover.no_of_moves();
        mover.update_after_move();
        let (kind, color) = (mover.kind, mover.color);

        let mut placed = piece;
        let mut promoted_from = None;
        if kind == PieceKind::Pawn && to.rank() == color.promotion_rank() {
            self.active[color.index()].remove(&piece);
            promoted_from = Some(piece);
            placed = self.spawn(Piece::new(PieceKind::Queen, color));
        }

        self.set_square(to, Some(placed));
        self.active[color.index()].insert(placed, to);

        let record = MoveRecord {
            piece: placed,
            from,
            to,
            captured,
            promoted_from,
            previous_no_of_moves,
        };
        let previous_last_move = self.last_move.replace(record);

        UndoInfo {
            record,
            previous_last_move,
        }
    }

    fn unmake_move(&mut self, undo: UndoInfo) {
        let record = undo.record;
        let color = self.arena[record.piece.index()].color;

        match record.captured {
            Some(victim) => {
                let victim_color = self.arena[victim.index()].color;
                self.set_square(record.to, Some(victim));
                self.active[victim_color.index()].insert(victim, record.to);
            }
            None => self.set_square(record.to, None),
        }

        let original = match record.promoted_from {
            Some(pawn) => {
                self.active[color.index()].remove(&record.piece);
                debug_assert_eq!(record.piece.index() + 1, self.arena.len());
                if record.piece.index() + 1 == self.arena.len() {
                    self.arena.pop();
                }
                pawn
            }
            None => record.piece,
        };

        self.set_square(record.from, Some(original));
        self.active[color.index()].insert(original, record.from);
        self.arena[original.index()].restore_moves(record.previous_no_of_moves);
        self.last_move = undo.previous_last_move;
    }
}
