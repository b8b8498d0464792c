//! Square indexing and coordinate helpers
//!
//! Squares are numbered row-major, `index = row * 8 + column`:
//! - 0 = a1 (row 0, column 0)
//! - 7 = h1 (row 0, column 7)
//! - 56 = a8 (row 7, column 0)
//! - 63 = h8 (row 7, column 7)
//!
//! Row 0 is White's back rank. All conversions are pure arithmetic.

use crate::error::{ChessRulesError, ChessRulesResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 64 board squares
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Build a square from in-range coordinates
    ///
    /// Intended for constants and for coordinates already known to be on the
    /// board. Use [`Square::try_new`] for anything coming from outside.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Square {
        assert!(row < 8 && column < 8, "square coordinates out of range");
        Square(row * 8 + column)
    }

    /// Build a square from coordinates that may be off the board
    pub fn try_new(row: i32, column: i32) -> ChessRulesResult<Square> {
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Ok(Square((row * 8 + column) as u8))
        } else {
            Err(ChessRulesError::InvalidSquare { row, column })
        }
    }

    /// Square for a linear index, `None` outside 0-63
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        (index < 64).then_some(Square(index as u8))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// Step by a (row, column) delta, `None` if that leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let column = self.column() as i8 + d_column;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Square::new(row as u8, column as u8))
        } else {
            None
        }
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = ChessRulesError;

    fn try_from(index: u8) -> ChessRulesResult<Square> {
        Square::from_index(index as usize).ok_or(ChessRulesError::InvalidSquare {
            row: (index / 8) as i32,
            column: (index % 8) as i32,
        })
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column()) as char, self.row() + 1)
    }
}

impl FromStr for Square {
    type Err = ChessRulesError;

    /// Algebraic name, `a1` through `h8`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Square::new(rank - b'1', file - b'a')),
            _ => Err(crate::codec::malformed(s, "expected a square from a1 to h8")),
        }
    }
}
