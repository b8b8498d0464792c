//! King move generation
//!
//! Kings step one square in any direction. Unlike every other piece, the
//! king's own generation consults the attack cache: a quiet step onto a
//! square the enemy attacks, or a capture of an enemy piece the enemy
//! protects, is never offered. The x-ray squares in the cache make this
//! filter hold for squares on the far side of the king from a checking
//! slider.
//!
//! Castling is generated separately in [`super::castling`].

use super::sliding::KING_WALKER;
use crate::square::Square;
use crate::tile::BoardView;
use crate::types::Piece;

/// Adjacent empty squares the enemy does not attack
pub fn quiet_tiles<B: BoardView + ?Sized>(board: &B, king: &Piece) -> Vec<Square> {
    let enemy = king.color.opponent();
    KING_WALKER
        .quiet_tiles(board, king.square)
        .into_iter()
        .filter(|&square| !board.is_attacked_by(square, enemy))
        .collect()
}

/// Adjacent enemy pieces that no other enemy piece protects
pub fn attack_tiles<B: BoardView + ?Sized>(board: &B, king: &Piece) -> Vec<Square> {
    let enemy = king.color.opponent();
    KING_WALKER
        .attack_tiles(board, king.square, king.color)
        .into_iter()
        .filter(|&square| !board.is_attacked_by(square, enemy))
        .collect()
}
