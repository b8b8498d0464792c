//! Knight move generation
//!
//! Knights jump in an L-shape (2+1 or 1+2 squares) and are never blocked.
//! A quiet move needs an empty *destination*; the knight's own square plays
//! no part in it.

use super::sliding::KNIGHT_WALKER;
use crate::square::Square;
use crate::tile::Occupied;
use crate::types::Piece;

pub fn quiet_tiles<B: Occupied + ?Sized>(board: &B, knight: &Piece) -> Vec<Square> {
    KNIGHT_WALKER.quiet_tiles(board, knight.square)
}

pub fn attack_tiles<B: Occupied + ?Sized>(board: &B, knight: &Piece) -> Vec<Square> {
    KNIGHT_WALKER.attack_tiles(board, knight.square, knight.color)
}
