//! Move candidates
//!
//! A [`Move`] is a value, not an entity: it is produced by move generation,
//! trial-applied by the legality filter, and either committed or discarded
//! within one call.

use crate::codec::malformed;
use crate::error::ChessRulesError;
use crate::square::Square;
use crate::types::PromotionPiece;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of move a candidate is
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Non-capturing move onto an empty square
    Quiet,
    /// Capture of the enemy piece on the destination square
    Capture,
    /// King moves two squares toward column 0, rook jumps over it
    CastleLeft,
    /// King moves two squares toward column 7, rook jumps over it
    CastleRight,
    /// Pawn captures the enemy pawn beside it, toward column 0
    EnPassantLeft,
    /// Pawn captures the enemy pawn beside it, toward column 7
    EnPassantRight,
    /// Pawn reaches the farthest row and is replaced by `piece`
    Promotion { piece: PromotionPiece, capture: bool },
}

/// A move candidate: source, destination and kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    pub fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Quiet)
    }

    pub fn capture(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Capture)
    }

    pub fn is_capture(&self) -> bool {
        match self.kind {
            MoveKind::Capture | MoveKind::EnPassantLeft | MoveKind::EnPassantRight => true,
            MoveKind::Promotion { capture, .. } => capture,
            _ => false,
        }
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::CastleLeft | MoveKind::CastleRight)
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassantLeft | MoveKind::EnPassantRight)
    }

    pub fn promotion(&self) -> Option<PromotionPiece> {
        match self.kind {
            MoveKind::Promotion { piece, .. } => Some(piece),
            _ => None,
        }
    }

    /// Square the captured piece stands on
    ///
    /// Differs from `to` only for en passant, where the victim sits beside
    /// the capturing pawn rather than on the (empty) destination square.
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant() {
            Square::new(self.from.row(), self.to.column())
        } else {
            self.to
        }
    }
}

impl fmt::Display for Move {
    /// Human-readable description, e.g. `e2-e4`, `e4xd5`, `e1-g1 O-O`, `e5xd6 e.p.`, `e7-e8=Q`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::CastleLeft => write!(f, "{}-{} O-O-O", self.from, self.to),
            MoveKind::CastleRight => write!(f, "{}-{} O-O", self.from, self.to),
            MoveKind::Quiet => write!(f, "{}-{}", self.from, self.to),
            MoveKind::Capture => write!(f, "{}x{}", self.from, self.to),
            MoveKind::EnPassantLeft | MoveKind::EnPassantRight => {
                write!(f, "{}x{} e.p.", self.from, self.to)
            }
            MoveKind::Promotion { piece, capture } => {
                let sep = if capture { 'x' } else { '-' };
                write!(f, "{}{}{}={}", self.from, sep, self.to, piece.letter())
            }
        }
    }
}

impl FromStr for Move {
    type Err = ChessRulesError;

    /// Reads back the [`Display`](fmt::Display) form
    ///
    /// Only the shape is checked. Whether the move fits a board is decided
    /// when it is applied.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, suffix) = match s.split_once(' ') {
            Some((body, suffix)) => (body, Some(suffix)),
            None => (s, None),
        };
        let (body, promotion) = match body.split_once('=') {
            Some((body, letter)) => {
                let mut letters = letter.chars();
                let piece = match (letters.next(), letters.next()) {
                    (Some(letter), None) => PromotionPiece::from_letter(letter),
                    _ => None,
                };
                let piece = piece
                    .ok_or_else(|| malformed(s, "promotion names no N, B, R or Q"))?;
                (body, Some(piece))
            }
            None => (body, None),
        };

        let (from, separator, to) = match (body.get(..2), body.get(2..3), body.get(3..)) {
            (Some(from), Some(separator), Some(to)) if body.len() == 5 => (from, separator, to),
            _ => return Err(malformed(s, "expected <from>-<to> or <from>x<to>")),
        };
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        let capture = match separator {
            "-" => false,
            "x" => true,
            _ => return Err(malformed(s, "separator must be '-' or 'x'")),
        };

        let kind = match (suffix, promotion, capture) {
            (None, None, false) => MoveKind::Quiet,
            (None, None, true) => MoveKind::Capture,
            (None, Some(piece), capture) => MoveKind::Promotion { piece, capture },
            (Some("O-O"), None, false) => MoveKind::CastleRight,
            (Some("O-O-O"), None, false) => MoveKind::CastleLeft,
            (Some("e.p."), None, true) if to.column() < from.column() => MoveKind::EnPassantLeft,
            (Some("e.p."), None, true) => MoveKind::EnPassantRight,
            _ => return Err(malformed(s, "unknown move suffix")),
        };
        Ok(Move::new(from, to, kind))
    }
}
