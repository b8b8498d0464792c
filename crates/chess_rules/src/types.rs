//! # Core Types - Colors, Piece Kinds and Pieces
//!
//! ## Piece Representation
//!
//! A [`Piece`] is a small `Copy` value: kind, color, current square and how
//! many times it has moved. The kind is a sum type; the only kind-specific
//! state, the pawn's "just completed a two-square advance" flag, lives on the
//! `Pawn` variant itself, so no other kind can carry it:
//!
//! ```rust
//! use chess_rules::{Color, Piece, PieceKind, Square};
//!
//! let pawn = Piece::new(PieceKind::Pawn { double_jump: true }, Color::White, Square::new(3, 4));
//! assert!(pawn.just_double_jumped());
//!
//! let rook = Piece::new(PieceKind::Rook, Color::Black, Square::new(7, 0));
//! assert!(!rook.just_double_jumped());
//! ```
//!
//! ## Ownership
//!
//! The [`Board`](crate::Board) owns every live piece. A piece's `square`
//! field always equals the tile it sits on; the board enforces that on each
//! mutation and [`Board::check_consistency`](crate::Board::check_consistency)
//! audits it.

use crate::constants::*;
use crate::error::ChessRulesError;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side color
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index into per-color arrays (White = 0, Black = 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row delta of a pawn step
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn home_row(self) -> u8 {
        match self {
            Color::White => WHITE_HOME_ROW,
            Color::Black => BLACK_HOME_ROW,
        }
    }

    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => WHITE_PAWN_ROW,
            Color::Black => BLACK_PAWN_ROW,
        }
    }

    /// Row a pawn of this color must stand on to capture en passant
    pub fn en_passant_row(self) -> u8 {
        match self {
            Color::White => WHITE_EN_PASSANT_ROW,
            Color::Black => BLACK_EN_PASSANT_ROW,
        }
    }

    /// Farthest row, where a pawn of this color promotes
    pub fn promotion_row(self) -> u8 {
        self.opponent().home_row()
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ChessRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "White" => Ok(Color::White),
            "Black" => Ok(Color::Black),
            other => Err(ChessRulesError::MalformedRecord {
                record: other.to_string(),
                reason: "expected White or Black".to_string(),
            }),
        }
    }
}

/// Piece kind
///
/// `double_jump` is set right after a pawn's first move if it advanced two
/// squares, and cleared once the opponent has completed their next move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn { double_jump: bool },
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// An unflagged pawn
    pub const PAWN: PieceKind = PieceKind::Pawn { double_jump: false };

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn { .. } => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    #[inline]
    pub fn is_pawn(self) -> bool {
        matches!(self, PieceKind::Pawn { .. })
    }

    /// Bishop, rook and queen walk rays; everything else steps once
    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = ChessRulesError;

    /// Parses a type name; pawns come back unflagged
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pawn" => Ok(PieceKind::PAWN),
            "Knight" => Ok(PieceKind::Knight),
            "Bishop" => Ok(PieceKind::Bishop),
            "Rook" => Ok(PieceKind::Rook),
            "Queen" => Ok(PieceKind::Queen),
            "King" => Ok(PieceKind::King),
            other => Err(ChessRulesError::UnknownPieceType {
                name: other.to_string(),
            }),
        }
    }
}

/// Piece a pawn may promote to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PromotionPiece::Knight => 'N',
            PromotionPiece::Bishop => 'B',
            PromotionPiece::Rook => 'R',
            PromotionPiece::Queen => 'Q',
        }
    }

    pub fn from_letter(letter: char) -> Option<PromotionPiece> {
        PromotionPiece::ALL
            .into_iter()
            .find(|piece| piece.letter() == letter)
    }
}

/// A live piece on the board
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    /// Number of moves this piece has made
    pub move_count: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            move_count: 0,
        }
    }

    pub fn with_move_count(mut self, move_count: u32) -> Self {
        self.move_count = move_count;
        self
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    #[inline]
    pub fn is_enemy_of(&self, color: Color) -> bool {
        self.color != color
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    #[inline]
    pub fn just_double_jumped(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn { double_jump: true })
    }

    /// Set or clear the double-jump flag; no-op for anything but a pawn
    pub(crate) fn set_double_jump(&mut self, flag: bool) {
        if let PieceKind::Pawn { double_jump } = &mut self.kind {
            *double_jump = flag;
        }
    }
}
