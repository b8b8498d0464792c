//! Pawn move generation
//!
//! Handles the regular pawn patterns:
//! - Single forward push onto an empty square
//! - Double push if the pawn has never moved and both squares are empty
//! - Diagonal captures onto enemy-occupied squares
//!
//! En passant lives in [`super::en_passant`]; promotion expansion happens
//! when candidates are turned into [`Move`](crate::Move)s in
//! [`super::candidate_moves`].
//!
//! ## Pawn Protection
//!
//! A pawn protects both forward diagonals whatever stands on them, so the
//! attack cache sees an enemy king as unable to step there even though the
//! pawn cannot move there right now.

use crate::square::Square;
use crate::tile::Occupied;
use crate::types::Piece;

/// Forward pushes onto empty squares
pub fn quiet_tiles<B: Occupied + ?Sized>(board: &B, pawn: &Piece) -> Vec<Square> {
    let mut tiles = Vec::new();
    let forward = pawn.color.forward();

    if let Some(one) = pawn.square.offset(forward, 0) {
        if board.is_empty(one) {
            tiles.push(one);
            if !pawn.has_moved() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        tiles.push(two);
                    }
                }
            }
        }
    }

    tiles
}

/// Forward diagonals holding an enemy piece
pub fn attack_tiles<B: Occupied + ?Sized>(board: &B, pawn: &Piece) -> Vec<Square> {
    diagonals(pawn)
        .filter(|&square| board.enemy_at(square, pawn.color).is_some())
        .collect()
}

pub fn for_each_protected(pawn: &Piece, mut mark: impl FnMut(Square)) {
    diagonals(pawn).for_each(|square| mark(square));
}

pub fn protected_tiles(pawn: &Piece) -> Vec<Square> {
    diagonals(pawn).collect()
}

fn diagonals(pawn: &Piece) -> impl Iterator<Item = Square> {
    let forward = pawn.color.forward();
    let square = pawn.square;
    [-1, 1]
        .into_iter()
        .filter_map(move |d_column| square.offset(forward, d_column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Occupants;
    use crate::types::{Color, PieceKind};

    fn pawn(color: Color, row: u8, column: u8) -> Piece {
        Piece::new(PieceKind::PAWN, color, Square::new(row, column))
    }

    fn board_with(pieces: &[Piece]) -> Occupants {
        let mut board: Occupants = [None; 64];
        for piece in pieces {
            board[piece.square.index()] = Some(*piece);
        }
        board
    }

    #[test]
    fn test_unmoved_pawn_may_double_push() {
        let white = pawn(Color::White, 1, 4);
        let board = board_with(&[white]);
        assert_eq!(
            quiet_tiles(&board, &white),
            vec![Square::new(2, 4), Square::new(3, 4)]
        );

        let black = pawn(Color::Black, 6, 4);
        let board = board_with(&[black]);
        assert_eq!(
            quiet_tiles(&board, &black),
            vec![Square::new(5, 4), Square::new(4, 4)]
        );
    }

    #[test]
    fn test_moved_pawn_single_push_only() {
        let white = pawn(Color::White, 2, 4).with_move_count(1);
        let board = board_with(&[white]);
        assert_eq!(quiet_tiles(&board, &white), vec![Square::new(3, 4)]);
    }

    #[test]
    fn test_blocked_pawn_has_no_pushes() {
        let white = pawn(Color::White, 1, 4);
        let blocker = pawn(Color::Black, 2, 4);
        let board = board_with(&[white, blocker]);
        assert!(quiet_tiles(&board, &white).is_empty());

        let far_blocker = pawn(Color::Black, 3, 4);
        let board = board_with(&[white, far_blocker]);
        assert_eq!(quiet_tiles(&board, &white), vec![Square::new(2, 4)]);
    }

    #[test]
    fn test_captures_only_enemies_on_diagonals() {
        let white = pawn(Color::White, 3, 3);
        let enemy = pawn(Color::Black, 4, 4);
        let ally = pawn(Color::White, 4, 2);
        let board = board_with(&[white, enemy, ally]);

        assert_eq!(attack_tiles(&board, &white), vec![Square::new(4, 4)]);
        assert_eq!(
            protected_tiles(&white),
            vec![Square::new(4, 2), Square::new(4, 4)],
            "Both diagonals are protected, ally or not"
        );
    }

    #[test]
    fn test_edge_pawn_protects_one_square() {
        let black = pawn(Color::Black, 6, 0);
        assert_eq!(protected_tiles(&black), vec![Square::new(5, 1)]);
    }
}
