//! Move making and unmaking as a scoped transaction
//!
//! [`Board::apply`] performs a move and hands back a [`Transaction`] guard
//! holding everything needed to undo it. Dropping the guard restores the
//! exact prior state (tiles, roster order, move counters, double-jump flags
//! and the attack cache). Calling [`Transaction::commit`] keeps the move.
//!
//! ```rust
//! use chess_rules::{Board, Color, Move, Square};
//!
//! let mut board = Board::starting_position();
//! let before = board.clone();
//! {
//!     let trial = board.apply(Move::quiet(Square::new(1, 4), Square::new(3, 4)))?;
//!     assert!(!trial.is_king_attacked(Color::White));
//! } // dropped: rolled back
//! assert_eq!(board, before);
//! # Ok::<(), chess_rules::ChessRulesError>(())
//! ```
//!
//! Legality probing, terminal-state detection, commits and perft all go
//! through this one primitive, so no call site restores state by hand and
//! an early return (including `?`) still rolls back.
//!
//! ## What a move does
//!
//! 1. Remove the mover from its source tile.
//! 2. Remove the captured piece (if any) from its tile and from the roster.
//!    For en passant that tile is beside the mover, not the destination.
//! 3. Place the mover on the destination with its move counter bumped; a
//!    pawn becomes the promoted piece, or gets its double-jump flag after a
//!    two-square advance.
//! 4. For castling, relocate the rook as part of the same step.
//! 5. Clear any other double-jump flag on the board: a window closes as
//!    soon as the next move is made, whichever side makes it.
//! 6. Recompute the attack cache from scratch.

use crate::board::Board;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::move_gen::castling::CastleSide;
use crate::moves::{Move, MoveKind};
use crate::square::Square;
use crate::tile::Occupied;
use crate::types::{Piece, PieceKind};
use std::ops::{Deref, DerefMut};
use tracing::{error, trace};

/// Information needed to undo a move
#[derive(Clone, Debug)]
pub(crate) struct UndoInfo {
    mv: Move,
    /// Mover as it was before the move
    moved: Piece,
    mover_slot: usize,
    /// Roster index and piece removed by the capture
    captured: Option<(usize, Piece)>,
    /// Roster index and rook as it was before castling
    rook: Option<(usize, Piece, Square)>,
    /// Pawn other than the mover whose double-jump flag this move cleared
    cleared_double_jump: Option<Square>,
}

/// A move applied to a board, undone when dropped unless committed
///
/// Dereferences to the [`Board`], so nested moves can be applied on top:
/// each nested guard borrows the outer one and must be dropped first.
#[must_use = "dropping a Transaction immediately undoes the move"]
pub struct Transaction<'a> {
    board: &'a mut Board,
    undo: Option<UndoInfo>,
}

impl<'a> Transaction<'a> {
    pub fn mv(&self) -> Option<Move> {
        self.undo.as_ref().map(|undo| undo.mv)
    }

    /// Keep the move
    pub fn commit(mut self) {
        if let Some(undo) = self.undo.take() {
            trace!("[MOVE] committed {}", undo.mv);
        }
    }

    /// Undo the move now (same as dropping the guard)
    pub fn rollback(self) {}
}

impl Deref for Transaction<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Transaction<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.unmake(undo);
        }
    }
}

impl Board {
    /// Apply `mv` and return the guard that undoes it
    ///
    /// Validates the candidate against the board (mover present, capture
    /// target present and hostile, destination free where required) but not
    /// against king safety. On error the board is untouched.
    pub fn apply(&mut self, mv: Move) -> ChessRulesResult<Transaction<'_>> {
        let undo = self.make(mv)?;
        Ok(Transaction {
            board: self,
            undo: Some(undo),
        })
    }

    fn make(&mut self, mv: Move) -> ChessRulesResult<UndoInfo> {
        let moved = *self
            .occupant(mv.from)
            .ok_or(ChessRulesError::NoPieceAtSquare { square: mv.from })?;
        let color = moved.color;
        let invalid = |reason| ChessRulesError::InvalidMove {
            from: mv.from,
            to: mv.to,
            reason,
        };

        let capture_square = mv.capture_square();
        let target = self.occupant(capture_square).copied();
        if let Some(target) = target {
            if target.color == color {
                return Err(invalid("destination holds an allied piece"));
            }
        }
        if mv.is_capture() != target.is_some() {
            return Err(invalid(if mv.is_capture() {
                "capture onto an empty square"
            } else {
                "quiet move onto an occupied square"
            }));
        }

        let castle = CastleSide::of(mv.kind);
        let promotion_row = color.promotion_row();
        match mv.kind {
            MoveKind::CastleLeft | MoveKind::CastleRight if !moved.is_king() => {
                return Err(invalid("only a king can castle"))
            }
            MoveKind::EnPassantLeft | MoveKind::EnPassantRight | MoveKind::Promotion { .. }
                if !moved.kind.is_pawn() =>
            {
                return Err(invalid("only a pawn can capture en passant or promote"))
            }
            MoveKind::EnPassantLeft | MoveKind::EnPassantRight => {
                let victim_is_pawn = target.is_some_and(|victim| victim.kind.is_pawn());
                if !victim_is_pawn || !self.is_empty(mv.to) {
                    return Err(invalid("en passant needs an enemy pawn beside an empty square"));
                }
            }
            MoveKind::Promotion { .. } if mv.to.row() != promotion_row => {
                return Err(invalid("promotion short of the farthest row"))
            }
            MoveKind::Quiet | MoveKind::Capture
                if moved.kind.is_pawn() && mv.to.row() == promotion_row =>
            {
                return Err(invalid("a pawn reaching the farthest row must promote"))
            }
            _ => {}
        }

        let rook = match castle {
            Some(side) => {
                if (mv.from, mv.to) != side.king_squares(color) {
                    return Err(invalid("king is not castling from and to its castling squares"));
                }
                let (rook_from, rook_to) = side.rook_squares(color);
                let rook = self
                    .occupant(rook_from)
                    .copied()
                    .filter(|rook| rook.kind == PieceKind::Rook && rook.color == color)
                    .ok_or_else(|| invalid("no castling rook on its home square"))?;
                if !self.is_empty(rook_to) {
                    return Err(invalid("rook destination is occupied"));
                }
                Some((self.slot_of(rook_from)?, rook, rook_to))
            }
            None => None,
        };

        // Any open double-jump window closes once this move completes
        let flagged: Vec<&Piece> = self
            .pieces()
            .filter(|piece| piece.just_double_jumped())
            .collect();
        if flagged.len() > 1 {
            error!(
                "[MOVE] {} pawns flagged with a double jump before {}",
                flagged.len(),
                mv
            );
            return Err(ChessRulesError::MultipleDoubleJumps {
                color: flagged[0].color,
                count: flagged.len(),
            });
        }
        let flagged = flagged.first().map(|piece| piece.square);

        let mover_slot = self.slot_of(mv.from)?;
        let captured = match target {
            Some(piece) => Some((self.slot_of(capture_square)?, piece)),
            None => None,
        };

        // Nothing below can fail
        self.tiles.take(mv.from);
        if let Some((slot, piece)) = captured {
            self.tiles.take(piece.square);
            self.roster[mover_slot] = mv.to;
            self.roster.remove(slot);
        } else {
            self.roster[mover_slot] = mv.to;
        }

        let mut placed = moved;
        placed.square = mv.to;
        placed.move_count += 1;
        match mv.kind {
            MoveKind::Promotion { piece, .. } => placed.kind = piece.kind(),
            _ if moved.kind.is_pawn() => {
                let jumped = (mv.to.row() as i8 - mv.from.row() as i8).abs() == 2;
                placed.set_double_jump(jumped);
            }
            _ => {}
        }
        self.tiles.put(placed);

        if let Some((slot, mut rook_piece, rook_to)) = rook {
            self.tiles.take(rook_piece.square);
            rook_piece.square = rook_to;
            rook_piece.move_count += 1;
            self.tiles.put(rook_piece);
            self.roster[slot] = rook_to;
        }

        // The mover's own flag was rewritten when it was placed
        let cleared_double_jump = flagged.filter(|&square| {
            square != mv.from && captured.map_or(true, |(_, piece)| piece.square != square)
        });
        if let Some(square) = cleared_double_jump {
            if let Some(pawn) = self.tiles.occupant_mut(square) {
                pawn.set_double_jump(false);
            }
        }

        self.recompute_attacks();
        trace!("[MOVE] applied {}", mv);

        Ok(UndoInfo {
            mv,
            moved,
            mover_slot,
            captured,
            rook,
            cleared_double_jump,
        })
    }

    /// Reverse a move made by `make`, in exactly the opposite order
    fn unmake(&mut self, undo: UndoInfo) {
        let UndoInfo {
            mv,
            moved,
            mover_slot,
            captured,
            rook,
            cleared_double_jump,
        } = undo;

        if let Some(square) = cleared_double_jump {
            if let Some(pawn) = self.tiles.occupant_mut(square) {
                pawn.set_double_jump(true);
            }
        }

        if let Some((slot, rook_piece, rook_to)) = rook {
            self.tiles.take(rook_to);
            self.tiles.put(rook_piece);
            self.roster[slot] = rook_piece.square;
        }

        self.tiles.take(mv.to);
        self.tiles.put(moved);
        if let Some((slot, piece)) = captured {
            self.tiles.put(piece);
            self.roster.insert(slot, piece.square);
        }
        self.roster[mover_slot] = mv.from;

        self.recompute_attacks();
        trace!("[MOVE] rolled back {}", mv);
    }

    fn slot_of(&self, square: Square) -> ChessRulesResult<usize> {
        self.roster
            .iter()
            .position(|&entry| entry == square)
            .ok_or_else(|| {
                error!("[MOVE] occupied square {} missing from roster", square);
                ChessRulesError::TileDesync {
                    square,
                    reason: "occupied tile missing from roster",
                }
            })
    }
}
