//! Engine-exchange encoding for the AI boundary
//!
//! One piece per string, space-separated:
//!
//! ```text
//! Row Column MoveCount Color Type [justMadeDoubleJump]
//! 1 4 0 White Pawn false
//! 0 4 0 White King
//! ```
//!
//! A transmitted batch is a list of strings whose first entry is a
//! human-readable move description (the move that led here, or free text);
//! every following entry is one piece.

use super::{assemble_piece, double_jump_field, malformed};
use crate::board::Board;
use crate::constants::{EXCHANGE_DELIMITER, EXCHANGE_FIELDS};
use crate::error::ChessRulesResult;
use crate::types::Piece;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub fn encode_piece(piece: &Piece) -> String {
    let mut text = format!(
        "{} {} {} {} {}",
        piece.square.row(),
        piece.square.column(),
        piece.move_count,
        piece.color,
        piece.kind
    );
    if let Some(flag) = double_jump_field(piece) {
        text.push(' ');
        text.push_str(if flag { "true" } else { "false" });
    }
    text
}

pub fn decode_piece(text: &str) -> ChessRulesResult<Piece> {
    let tokens: Vec<&str> = text.split(EXCHANGE_DELIMITER).collect();
    if tokens.iter().any(|token| token.is_empty()) {
        return Err(malformed(text, "tokens must be separated by single spaces"));
    }
    let double_jump = match tokens.len() {
        EXCHANGE_FIELDS => None,
        n if n == EXCHANGE_FIELDS + 1 => Some(tokens[EXCHANGE_FIELDS]),
        n => {
            return Err(malformed(
                text,
                format!("expected {EXCHANGE_FIELDS} or {} tokens, found {n}", EXCHANGE_FIELDS + 1),
            ))
        }
    };
    assemble_piece(
        text,
        tokens[4],
        tokens[3],
        tokens[2],
        (tokens[0], tokens[1]),
        double_jump,
    )
}

/// A move description followed by the position it produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeBatch {
    pub description: String,
    pub pieces: Vec<Piece>,
}

impl ExchangeBatch {
    /// Capture `board` in roster order
    pub fn from_board(description: impl Into<String>, board: &Board) -> Self {
        ExchangeBatch {
            description: description.into(),
            pieces: board.pieces().copied().collect(),
        }
    }

    pub fn encode(&self) -> Vec<String> {
        std::iter::once(self.description.clone())
            .chain(self.pieces.iter().map(encode_piece))
            .collect()
    }

    /// Decode a batch; an empty list or any bad piece rejects it
    pub fn decode<S: AsRef<str>>(lines: &[S]) -> ChessRulesResult<Self> {
        let (description, rest) = lines
            .split_first()
            .ok_or_else(|| malformed("", "batch without a move description"))?;
        let pieces = rest
            .iter()
            .map(|line| decode_piece(line.as_ref()))
            .collect::<ChessRulesResult<Vec<Piece>>>()?;
        debug!(
            "[CODEC] Decoded exchange batch {:?} with {} pieces",
            description.as_ref(),
            pieces.len()
        );
        Ok(ExchangeBatch {
            description: description.as_ref().to_string(),
            pieces,
        })
    }

    /// Restore the position, failing closed on overlaps or broken invariants
    pub fn to_board(&self) -> ChessRulesResult<Board> {
        Board::from_pieces(self.pieces.iter().copied())
    }
}
