//! Direction-vector walker shared by every non-pawn piece
//!
//! Bishops, rooks and queens repeat each step until blocked; knights and
//! kings take each step once. Both cases are one [`Walker`] parameterized by
//! a step table and a `sliding` flag.
//!
//! ## Three traversals
//!
//! - **Quiet tiles**: empty squares, stopping *before* the first blocker.
//! - **Attack tiles**: the first blocker along each step, if it is an enemy.
//! - **Protected tiles**: every square the piece bears on, blockers included
//!   whatever their color. For sliding walkers, when the first blocker is the
//!   enemy king, the square directly behind it on the same ray is protected
//!   too if it is empty (x-ray). A king stepping back along a checking ray is
//!   still in that ray, and the cache has to say so.

use crate::constants::*;
use crate::square::Square;
use crate::tile::Occupied;
use crate::types::Color;

/// A step table plus a sliding flag
#[derive(Copy, Clone, Debug)]
pub struct Walker {
    steps: &'static [(i8, i8)],
    sliding: bool,
}

pub const ROOK_WALKER: Walker = Walker::new(&ROOK_DIRS, true);
pub const BISHOP_WALKER: Walker = Walker::new(&BISHOP_DIRS, true);
pub const QUEEN_WALKER: Walker = Walker::new(&QUEEN_DIRS, true);
pub const KNIGHT_WALKER: Walker = Walker::new(&KNIGHT_DIRS, false);
pub const KING_WALKER: Walker = Walker::new(&KING_DIRS, false);

impl Walker {
    pub const fn new(steps: &'static [(i8, i8)], sliding: bool) -> Self {
        Walker { steps, sliding }
    }

    /// Visit squares along each step until `visit` returns `false` or the
    /// board edge is reached
    fn walk(&self, from: Square, mut visit: impl FnMut((i8, i8), Square) -> bool) {
        for &(d_row, d_column) in self.steps {
            let mut current = from;
            while let Some(next) = current.offset(d_row, d_column) {
                if !visit((d_row, d_column), next) || !self.sliding {
                    break;
                }
                current = next;
            }
        }
    }

    /// Empty squares reachable without capturing
    pub fn quiet_tiles<B: Occupied + ?Sized>(&self, board: &B, from: Square) -> Vec<Square> {
        let mut tiles = Vec::new();
        self.walk(from, |_, square| {
            let empty = board.is_empty(square);
            if empty {
                tiles.push(square);
            }
            empty
        });
        tiles
    }

    /// Enemy-occupied squares this piece could capture
    pub fn attack_tiles<B: Occupied + ?Sized>(
        &self,
        board: &B,
        from: Square,
        color: Color,
    ) -> Vec<Square> {
        let mut tiles = Vec::new();
        self.walk(from, |_, square| match board.occupant(square) {
            None => true,
            Some(piece) => {
                if piece.is_enemy_of(color) {
                    tiles.push(square);
                }
                false
            }
        });
        tiles
    }

    /// Call `mark` for every square this piece protects, x-ray included
    pub fn for_each_protected<B: Occupied + ?Sized>(
        &self,
        board: &B,
        from: Square,
        color: Color,
        mut mark: impl FnMut(Square),
    ) {
        let sliding = self.sliding;
        self.walk(from, |(d_row, d_column), square| {
            mark(square);
            match board.occupant(square) {
                None => true,
                Some(piece) => {
                    if sliding && piece.is_king() && piece.is_enemy_of(color) {
                        if let Some(behind) = square.offset(d_row, d_column) {
                            if board.is_empty(behind) {
                                mark(behind);
                            }
                        }
                    }
                    false
                }
            }
        });
    }

    pub fn protected_tiles<B: Occupied + ?Sized>(
        &self,
        board: &B,
        from: Square,
        color: Color,
    ) -> Vec<Square> {
        let mut tiles = Vec::new();
        self.for_each_protected(board, from, color, |square| tiles.push(square));
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Occupants;
    use crate::types::{Piece, PieceKind};

    fn occupants(pieces: &[(PieceKind, Color, (u8, u8))]) -> Occupants {
        let mut board: Occupants = [None; 64];
        for &(kind, color, (row, column)) in pieces {
            let square = Square::new(row, column);
            board[square.index()] = Some(Piece::new(kind, color, square));
        }
        board
    }

    #[test]
    fn test_rook_on_empty_board_reaches_fourteen_squares() {
        let board = occupants(&[]);
        let tiles = ROOK_WALKER.quiet_tiles(&board, Square::new(3, 3));
        assert_eq!(tiles.len(), 14);
    }

    #[test]
    fn test_blocker_stops_ray_before_for_quiet_and_on_it_for_attack() {
        let board = occupants(&[
            (PieceKind::Rook, Color::White, (0, 0)),
            (PieceKind::Pawn { double_jump: false }, Color::Black, (3, 0)),
            (PieceKind::Knight, Color::White, (0, 2)),
        ]);
        let a1 = Square::new(0, 0);

        let quiet = ROOK_WALKER.quiet_tiles(&board, a1);
        assert_eq!(quiet, vec![Square::new(1, 0), Square::new(2, 0), Square::new(0, 1)]);

        let attacks = ROOK_WALKER.attack_tiles(&board, a1, Color::White);
        assert_eq!(attacks, vec![Square::new(3, 0)], "Only the enemy pawn is capturable");
    }

    #[test]
    fn test_protected_includes_allies_but_not_beyond() {
        let board = occupants(&[
            (PieceKind::Bishop, Color::White, (0, 2)),
            (PieceKind::Knight, Color::White, (1, 3)),
        ]);
        let tiles = BISHOP_WALKER.protected_tiles(&board, Square::new(0, 2), Color::White);
        assert!(tiles.contains(&Square::new(1, 3)), "Ally square is defended");
        assert!(!tiles.contains(&Square::new(2, 4)), "Ray stops at the ally");
    }

    #[test]
    fn test_xray_through_enemy_king_marks_one_empty_square() {
        let board = occupants(&[
            (PieceKind::Rook, Color::White, (0, 4)),
            (PieceKind::King, Color::Black, (4, 4)),
        ]);
        let tiles = ROOK_WALKER.protected_tiles(&board, Square::new(0, 4), Color::White);
        assert!(tiles.contains(&Square::new(4, 4)), "Checked king square");
        assert!(tiles.contains(&Square::new(5, 4)), "Square behind the king");
        assert!(!tiles.contains(&Square::new(6, 4)), "Only one square of x-ray");
    }

    #[test]
    fn test_xray_stops_when_square_behind_king_is_occupied() {
        let board = occupants(&[
            (PieceKind::Queen, Color::Black, (7, 7)),
            (PieceKind::King, Color::White, (5, 5)),
            (PieceKind::Pawn { double_jump: false }, Color::White, (4, 4)),
        ]);
        let tiles = QUEEN_WALKER.protected_tiles(&board, Square::new(7, 7), Color::Black);
        assert!(tiles.contains(&Square::new(5, 5)));
        assert!(!tiles.contains(&Square::new(4, 4)));
    }

    #[test]
    fn test_no_xray_for_single_step_walkers() {
        let board = occupants(&[
            (PieceKind::King, Color::White, (3, 3)),
            (PieceKind::King, Color::Black, (4, 4)),
        ]);
        let tiles = KING_WALKER.protected_tiles(&board, Square::new(3, 3), Color::White);
        assert!(tiles.contains(&Square::new(4, 4)));
        assert!(!tiles.contains(&Square::new(5, 5)));
    }

    #[test]
    fn test_xray_does_not_pierce_friendly_king() {
        let board = occupants(&[
            (PieceKind::Rook, Color::White, (0, 0)),
            (PieceKind::King, Color::White, (0, 3)),
        ]);
        let tiles = ROOK_WALKER.protected_tiles(&board, Square::new(0, 0), Color::White);
        assert!(tiles.contains(&Square::new(0, 3)));
        assert!(!tiles.contains(&Square::new(0, 4)));
    }
}
