//! Castling rights and path safety
//!
//! Castling toward a side is offered only if all of these hold:
//! - the king has never moved, stands on its home square and is not in check
//! - the rook of that side has never moved and stands on its home square
//! - every square strictly between king and rook is empty
//! - no square the king passes through or lands on is attacked by the enemy
//!
//! Executing the move relocates king and rook together; see
//! [`crate::make_unmake`].

use crate::constants::*;
use crate::moves::{Move, MoveKind};
use crate::square::Square;
use crate::tile::BoardView;
use crate::types::{Color, Piece, PieceKind};

/// Which rook the king castles with
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CastleSide {
    /// Toward column 0
    Left,
    /// Toward column 7
    Right,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Left, CastleSide::Right];

    pub fn of(kind: MoveKind) -> Option<CastleSide> {
        match kind {
            MoveKind::CastleLeft => Some(CastleSide::Left),
            MoveKind::CastleRight => Some(CastleSide::Right),
            _ => None,
        }
    }

    pub fn move_kind(self) -> MoveKind {
        match self {
            CastleSide::Left => MoveKind::CastleLeft,
            CastleSide::Right => MoveKind::CastleRight,
        }
    }

    fn rook_column(self) -> u8 {
        match self {
            CastleSide::Left => LEFT_ROOK_COLUMN,
            CastleSide::Right => RIGHT_ROOK_COLUMN,
        }
    }

    fn gap(self) -> &'static [u8] {
        match self {
            CastleSide::Left => &LEFT_CASTLE_GAP,
            CastleSide::Right => &RIGHT_CASTLE_GAP,
        }
    }

    fn transit(self) -> &'static [u8] {
        match self {
            CastleSide::Left => &LEFT_CASTLE_TRANSIT,
            CastleSide::Right => &RIGHT_CASTLE_TRANSIT,
        }
    }

    /// King home square and destination
    pub fn king_squares(self, color: Color) -> (Square, Square) {
        let row = color.home_row();
        let to = match self {
            CastleSide::Left => LEFT_CASTLE_KING_TO,
            CastleSide::Right => RIGHT_CASTLE_KING_TO,
        };
        (Square::new(row, KING_COLUMN), Square::new(row, to))
    }

    /// Rook home square and destination
    pub fn rook_squares(self, color: Color) -> (Square, Square) {
        let row = color.home_row();
        let to = match self {
            CastleSide::Left => LEFT_CASTLE_ROOK_TO,
            CastleSide::Right => RIGHT_CASTLE_ROOK_TO,
        };
        (Square::new(row, self.rook_column()), Square::new(row, to))
    }
}

/// Castling moves currently available to `king`
pub fn castle_moves<B: BoardView + ?Sized>(board: &B, king: &Piece) -> Vec<Move> {
    CastleSide::BOTH
        .into_iter()
        .filter(|&side| can_castle(board, king, side))
        .map(|side| {
            let (from, to) = side.king_squares(king.color);
            Move::new(from, to, side.move_kind())
        })
        .collect()
}

/// Whether `king` may castle toward `side` right now
pub fn can_castle<B: BoardView + ?Sized>(board: &B, king: &Piece, side: CastleSide) -> bool {
    let color = king.color;
    let enemy = color.opponent();
    let (home, _) = side.king_squares(color);

    if !king.is_king() || king.has_moved() || king.square != home {
        return false;
    }
    if board.is_attacked_by(home, enemy) {
        return false;
    }

    let (rook_home, _) = side.rook_squares(color);
    let rook_ready = board.occupant(rook_home).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved()
    });
    if !rook_ready {
        return false;
    }

    let row = color.home_row();
    let gap_clear = side
        .gap()
        .iter()
        .all(|&column| board.is_empty(Square::new(row, column)));
    let transit_safe = side
        .transit()
        .iter()
        .all(|&column| !board.is_attacked_by(Square::new(row, column), enemy));

    gap_clear && transit_safe
}
