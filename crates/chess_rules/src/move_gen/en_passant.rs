//! En-passant eligibility
//!
//! A pawn standing on its color's en-passant row may capture an adjacent
//! enemy pawn whose double-jump flag is set, landing on the empty square
//! diagonally behind it. The captured pawn is removed from its own square,
//! not from the destination; [`Move::capture_square`] carries that
//! asymmetry into apply and rollback.

use crate::moves::{Move, MoveKind};
use crate::tile::Occupied;
use crate::types::{Piece, PieceKind};

/// En-passant captures available to `pawn`
pub fn en_passant_moves<B: Occupied + ?Sized>(board: &B, pawn: &Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    if !pawn.kind.is_pawn() || pawn.square.row() != pawn.color.en_passant_row() {
        return moves;
    }

    let forward = pawn.color.forward();
    for (d_column, kind) in [(-1, MoveKind::EnPassantLeft), (1, MoveKind::EnPassantRight)] {
        let Some(beside) = pawn.square.offset(0, d_column) else {
            continue;
        };
        let victim_flagged = board.enemy_at(beside, pawn.color).is_some_and(|victim| {
            matches!(victim.kind, PieceKind::Pawn { double_jump: true })
        });
        if !victim_flagged {
            continue;
        }
        if let Some(to) = pawn.square.offset(forward, d_column) {
            if board.is_empty(to) {
                moves.push(Move::new(pawn.square, to, kind));
            }
        }
    }

    moves
}
