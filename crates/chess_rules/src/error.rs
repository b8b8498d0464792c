//! Error types for the rules engine
//!
//! Expected outcomes such as "this move would leave the king in check" are
//! ordinary return values and never show up here. What remains falls into
//! two groups:
//!
//! - **Input errors** (`InvalidSquare`, `NoPieceAtSquare`, `InvalidMove`,
//!   `OccupiedSquare`, `MalformedRecord`, `UnknownPieceType`, `Settings`):
//!   the caller handed the engine something it cannot use. Nothing has been
//!   mutated when one of these is returned.
//! - **Consistency violations** (`MultipleDoubleJumps`, `TileDesync`,
//!   `ConsistencyViolation`): the board no longer satisfies its own
//!   invariants. These abort the current operation and must not be swallowed.

use crate::square::Square;
use crate::types::Color;
use thiserror::Error;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessRulesError {
    /// Square coordinates outside the 8x8 board
    #[error("Invalid square: row {row}, column {column} (must be 0-7)")]
    InvalidSquare { row: i32, column: i32 },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Move candidate does not fit the piece or the board
    #[error("Invalid move from {from} to {to}: {reason}")]
    InvalidMove {
        from: Square,
        to: Square,
        reason: &'static str,
    },

    /// Two pieces restored onto the same square
    #[error("Square {square} is already occupied")]
    OccupiedSquare { square: Square },

    /// Encoded record that does not have the expected shape
    #[error("Malformed record {record:?}: {reason}")]
    MalformedRecord { record: String, reason: String },

    /// Encoded piece type that names no known piece
    #[error("Unknown piece type {name:?}")]
    UnknownPieceType { name: String },

    /// More than one pawn carries the double-jump flag
    #[error("{count} {color} pawns flagged with a double jump (at most one allowed)")]
    MultipleDoubleJumps { color: Color, count: usize },

    /// Tile store and piece roster disagree
    #[error("Tile store and piece roster out of sync at {square}: {reason}")]
    TileDesync { square: Square, reason: &'static str },

    /// Board state breaks one of its invariants
    #[error("Board state inconsistent: {message}")]
    ConsistencyViolation { message: String },

    /// Perft requested deeper than the configured bound
    #[error("Perft depth {depth} exceeds configured limit {limit}")]
    DepthLimitExceeded { depth: u32, limit: u32 },

    /// Engine settings could not be parsed or serialized
    #[error("Engine settings error: {message}")]
    Settings { message: String },
}

impl ChessRulesError {
    /// Whether this error means the board can no longer be trusted
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ChessRulesError::MultipleDoubleJumps { .. }
                | ChessRulesError::TileDesync { .. }
                | ChessRulesError::ConsistencyViolation { .. }
        )
    }
}

/// Result type alias for rules engine operations
pub type ChessRulesResult<T> = Result<T, ChessRulesError>;
