//! Legality filter and move commit
//!
//! A candidate from [`candidate_moves`] is legal when applying it leaves the
//! mover's own king off every square the enemy attacks. Each candidate is
//! checked by applying it inside a [`Transaction`](crate::Transaction) and
//! letting the guard roll back, so the board is unchanged afterwards whatever
//! the verdict.

use crate::board::Board;
use crate::error::ChessRulesResult;
use crate::move_gen::candidate_moves;
use crate::moves::Move;
use crate::square::Square;
use crate::tile::Occupied;
use crate::types::Color;
use tracing::{debug, trace};

impl Board {
    /// Legal moves of the piece on `from`, empty if the square is empty
    ///
    /// # Errors
    ///
    /// Only fatal consistency errors from trial application; an illegal
    /// candidate is simply left out.
    pub fn legal_moves_from(&mut self, from: Square) -> ChessRulesResult<Vec<Move>> {
        let Some(piece) = self.occupant(from).copied() else {
            return Ok(Vec::new());
        };

        let mut legal = Vec::new();
        for mv in candidate_moves(&*self, &piece) {
            if self.leaves_king_safe(mv, piece.color)? {
                legal.push(mv);
            } else {
                trace!("[MOVE] {} rejected: king left attacked", mv);
            }
        }
        Ok(legal)
    }

    /// Every legal move for `color`, grouped by piece in roster order
    pub fn legal_moves(&mut self, color: Color) -> ChessRulesResult<Vec<Move>> {
        let squares: Vec<Square> = self.pieces_of(color).map(|piece| piece.square).collect();
        let mut moves = Vec::new();
        for square in squares {
            moves.extend(self.legal_moves_from(square)?);
        }
        Ok(moves)
    }

    /// Whether `mv` is one of the legal moves of the piece it starts from
    ///
    /// `mv.kind` has to match too: a quiet move onto an occupied square, or a
    /// pawn reaching the last row without a promotion, is not legal.
    pub fn is_legal_move(&mut self, mv: Move) -> ChessRulesResult<bool> {
        let Some(piece) = self.occupant(mv.from).copied() else {
            return Ok(false);
        };
        if !candidate_moves(&*self, &piece).contains(&mv) {
            return Ok(false);
        }
        self.leaves_king_safe(mv, piece.color)
    }

    /// Commit `mv` if it is legal
    ///
    /// Returns `Ok(false)` and leaves the board untouched for an illegal move.
    pub fn play(&mut self, mv: Move) -> ChessRulesResult<bool> {
        if !self.is_legal_move(mv)? {
            debug!("[MOVE] refused illegal move {}", mv);
            return Ok(false);
        }
        self.apply(mv)?.commit();
        Ok(true)
    }

    /// Trial-apply `mv` and report whether `color`'s king ends up safe
    pub(crate) fn leaves_king_safe(&mut self, mv: Move, color: Color) -> ChessRulesResult<bool> {
        let trial = self.apply(mv)?;
        let safe = !trial.is_king_attacked(color);
        Ok(safe)
    }
}

