//! Pseudo-legal move generation
//!
//! Every piece kind offers the same four capabilities:
//!
//! | Capability | Meaning |
//! |------------|---------|
//! | [`quiet_tiles`] | Empty destinations reachable without capturing |
//! | [`attack_tiles`] | Enemy-occupied destinations this piece could capture |
//! | [`protected_tiles`] | Full footprint for the attack cache, allies and x-ray included |
//! | [`attack::mark_protected_tiles`] | Same traversal, written straight into the cache |
//!
//! Dispatch is a `match` on [`PieceKind`]. Knights, bishops, rooks, queens
//! and kings share one direction walker ([`sliding::Walker`]); pawns have
//! their own file because nothing about them is symmetric.
//!
//! [`candidate_moves`] turns tile sets into [`Move`]s and adds the special
//! classes: castling, en passant, and the four-way promotion split. None of
//! this checks king safety; that is the legality filter's job
//! ([`crate::api::moves`]).

pub mod attack;
pub mod castling;
pub mod en_passant;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;

use crate::moves::{Move, MoveKind};
use crate::square::Square;
use crate::tile::{BoardView, Occupied};
use crate::types::{Piece, PieceKind, PromotionPiece};
use sliding::{Walker, BISHOP_WALKER, KING_WALKER, KNIGHT_WALKER, QUEEN_WALKER, ROOK_WALKER};

/// Walker for a piece kind, `None` for pawns
pub(crate) fn walker_for(kind: PieceKind) -> Option<Walker> {
    match kind {
        PieceKind::Pawn { .. } => None,
        PieceKind::Knight => Some(KNIGHT_WALKER),
        PieceKind::Bishop => Some(BISHOP_WALKER),
        PieceKind::Rook => Some(ROOK_WALKER),
        PieceKind::Queen => Some(QUEEN_WALKER),
        PieceKind::King => Some(KING_WALKER),
    }
}

/// Destinations reachable on quiet (non-capturing) moves
pub fn quiet_tiles<B: BoardView + ?Sized>(board: &B, piece: &Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn { .. } => pawn::quiet_tiles(board, piece),
        PieceKind::Knight => knight::quiet_tiles(board, piece),
        PieceKind::King => king::quiet_tiles(board, piece),
        PieceKind::Bishop => BISHOP_WALKER.quiet_tiles(board, piece.square),
        PieceKind::Rook => ROOK_WALKER.quiet_tiles(board, piece.square),
        PieceKind::Queen => QUEEN_WALKER.quiet_tiles(board, piece.square),
    }
}

/// Enemy-occupied destinations this piece could capture
pub fn attack_tiles<B: BoardView + ?Sized>(board: &B, piece: &Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn { .. } => pawn::attack_tiles(board, piece),
        PieceKind::Knight => knight::attack_tiles(board, piece),
        PieceKind::King => king::attack_tiles(board, piece),
        PieceKind::Bishop => BISHOP_WALKER.attack_tiles(board, piece.square, piece.color),
        PieceKind::Rook => ROOK_WALKER.attack_tiles(board, piece.square, piece.color),
        PieceKind::Queen => QUEEN_WALKER.attack_tiles(board, piece.square, piece.color),
    }
}

/// Squares this piece attacks or defends, including one x-ray square
/// behind an enemy king for sliders
pub fn protected_tiles<B: Occupied + ?Sized>(board: &B, piece: &Piece) -> Vec<Square> {
    match walker_for(piece.kind) {
        Some(walker) => walker.protected_tiles(board, piece.square, piece.color),
        None => pawn::protected_tiles(piece),
    }
}

/// All pseudo-legal moves of `piece`, special moves included
///
/// Pawn moves that land on the farthest row come out as four promotion
/// moves each; an unpromoted pawn move onto that row is never produced.
pub fn candidate_moves<B: BoardView + ?Sized>(board: &B, piece: &Piece) -> Vec<Move> {
    let from = piece.square;
    let mut moves = Vec::new();

    if piece.kind.is_pawn() {
        let promotion_row = piece.color.promotion_row();
        let targets = quiet_tiles(board, piece)
            .into_iter()
            .map(|to| (to, false))
            .chain(attack_tiles(board, piece).into_iter().map(|to| (to, true)));
        for (to, capture) in targets {
            if to.row() == promotion_row {
                moves.extend(PromotionPiece::ALL.into_iter().map(|promoted| {
                    Move::new(
                        from,
                        to,
                        MoveKind::Promotion {
                            piece: promoted,
                            capture,
                        },
                    )
                }));
            } else if capture {
                moves.push(Move::capture(from, to));
            } else {
                moves.push(Move::quiet(from, to));
            }
        }
        moves.extend(en_passant::en_passant_moves(board, piece));
        return moves;
    }

    moves.extend(
        quiet_tiles(board, piece)
            .into_iter()
            .map(|to| Move::quiet(from, to)),
    );
    moves.extend(
        attack_tiles(board, piece)
            .into_iter()
            .map(|to| Move::capture(from, to)),
    );
    if piece.is_king() {
        moves.extend(castling::castle_moves(board, piece));
    }
    moves
}
