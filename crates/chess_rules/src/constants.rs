//! # Rules Constants - Geometry of the Board
//!
//! ## Direction Vectors
//!
//! Movement is encoded as `(Δrow, Δcolumn)` pairs instead of linear index
//! offsets, so leaving the board is a plain range check on each coordinate
//! and no wrap-around test between files is needed:
//!
//! - **North**: `(1, 0)` (toward Black's back rank)
//! - **South**: `(-1, 0)`
//! - **East**: `(0, 1)` (toward the h-file)
//! - **West**: `(0, -1)`
//! - **Diagonals**: combinations (NE, NW, SE, SW)
//!
//! The same tables drive every piece. Bishops, rooks and queens repeat a
//! step until blocked; knights and kings take it once.
//!
//! ## Rows
//!
//! Row 0 is White's back rank and row 7 is Black's. Each color has:
//! - a **home row** for king and rooks (castling precondition),
//! - a **pawn row** it starts on,
//! - an **en-passant row**: where a pawn must stand to capture an enemy
//!   pawn that has just jumped two squares past it,
//! - a **promotion row**: the farthest row, where a pawn must promote.
//!
//! ## Castling Columns
//!
//! Kings start on column 4. Castling "left" runs toward column 0 (the
//! a-file rook), castling "right" toward column 7.

use crate::types::PieceKind;

pub const N: (i8, i8) = (1, 0);
pub const S: (i8, i8) = (-1, 0);
pub const E: (i8, i8) = (0, 1);
pub const W: (i8, i8) = (0, -1);
pub const NE: (i8, i8) = (1, 1);
pub const NW: (i8, i8) = (1, -1);
pub const SE: (i8, i8) = (-1, 1);
pub const SW: (i8, i8) = (-1, -1);

pub const ROOK_DIRS: [(i8, i8); 4] = [N, E, S, W];
pub const BISHOP_DIRS: [(i8, i8); 4] = [NE, SE, NW, SW];
pub const QUEEN_DIRS: [(i8, i8); 8] = [N, E, S, W, NE, SE, NW, SW];
pub const KING_DIRS: [(i8, i8); 8] = QUEEN_DIRS;
pub const KNIGHT_DIRS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

pub const WHITE_HOME_ROW: u8 = 0;
pub const BLACK_HOME_ROW: u8 = 7;
pub const WHITE_PAWN_ROW: u8 = 1;
pub const BLACK_PAWN_ROW: u8 = 6;
pub const WHITE_EN_PASSANT_ROW: u8 = 4;
pub const BLACK_EN_PASSANT_ROW: u8 = 3;

pub const KING_COLUMN: u8 = 4;
pub const LEFT_ROOK_COLUMN: u8 = 0;
pub const RIGHT_ROOK_COLUMN: u8 = 7;

/// Columns that must be empty for castling left / right
pub const LEFT_CASTLE_GAP: [u8; 3] = [1, 2, 3];
pub const RIGHT_CASTLE_GAP: [u8; 2] = [5, 6];

/// Columns the king passes through or lands on (must not be attacked)
pub const LEFT_CASTLE_TRANSIT: [u8; 2] = [3, 2];
pub const RIGHT_CASTLE_TRANSIT: [u8; 2] = [5, 6];

/// King destination and rook destination columns
pub const LEFT_CASTLE_KING_TO: u8 = 2;
pub const LEFT_CASTLE_ROOK_TO: u8 = 3;
pub const RIGHT_CASTLE_KING_TO: u8 = 6;
pub const RIGHT_CASTLE_ROOK_TO: u8 = 5;

/// Back rank, column 0 through 7, identical for both colors
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Engine-exchange token order: `Row Column MoveCount Color Type [justMadeDoubleJump]`
pub const EXCHANGE_FIELDS: usize = 5;

/// Engine-exchange tokens are separated by exactly one space
pub const EXCHANGE_DELIMITER: char = ' ';

/// Piece-record field order: `[Type][Color][Selected][MoveCount][Row][Column][justMadeDoubleJump]`
pub const RECORD_FIELDS: usize = 6;

pub const NETWORK_DELIMITER: char = '|';
