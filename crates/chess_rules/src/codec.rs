//! Textual encodings at the engine boundary
//!
//! Three formats, one per collaborator:
//!
//! - [`record`]: bracketed piece records for save files
//!   (`[Pawn][White][false][1][3][4][true]`)
//! - [`exchange`]: space-separated tokens for the AI process
//!   (`3 4 1 White Pawn true`), batched behind a move description
//! - [`network`]: a single `|`-joined snapshot line per turn
//!
//! All decoders fail closed: one bad field rejects the whole record, and one
//! bad record rejects the whole position. No partially decoded board is ever
//! returned. The engine does no I/O; callers move the strings around.

pub mod exchange;
pub mod network;
pub mod record;

use crate::error::{ChessRulesError, ChessRulesResult};
use crate::square::Square;
use crate::types::{Piece, PieceKind};
use std::str::FromStr;
use tracing::warn;

/// Build (and log) the error for a record that does not have the expected shape
pub(crate) fn malformed(record: &str, reason: impl Into<String>) -> ChessRulesError {
    let reason = reason.into();
    warn!("[CODEC] Rejected {:?}: {}", record, reason);
    ChessRulesError::MalformedRecord {
        record: record.to_string(),
        reason,
    }
}

/// Parse one numeric field, naming it in the error
pub(crate) fn parse_number<T: FromStr>(
    record: &str,
    field: &str,
    text: &str,
) -> ChessRulesResult<T> {
    text.parse()
        .map_err(|_| malformed(record, format!("{field} {text:?} is not a number")))
}

/// Parse `true` / `false` exactly
pub(crate) fn parse_flag(record: &str, field: &str, text: &str) -> ChessRulesResult<bool> {
    match text {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(malformed(record, format!("{field} {text:?} is not true or false"))),
    }
}

/// Assemble a piece from decoded fields, checking the pawn-only flag
///
/// `double_jump` must be present for pawns and absent for everything else.
pub(crate) fn assemble_piece(
    record: &str,
    kind: &str,
    color: &str,
    move_count: &str,
    (row, column): (&str, &str),
    double_jump: Option<&str>,
) -> ChessRulesResult<Piece> {
    let kind: PieceKind = kind.parse().map_err(|e| {
        warn!("[CODEC] Rejected {:?}: {}", record, e);
        e
    })?;
    let color = color
        .parse()
        .map_err(|_| malformed(record, format!("unknown color {color:?}")))?;
    let move_count = parse_number(record, "move count", move_count)?;
    let row: i32 = parse_number(record, "row", row)?;
    let column: i32 = parse_number(record, "column", column)?;
    let square = Square::try_new(row, column).map_err(|e| {
        warn!("[CODEC] Rejected {:?}: {}", record, e);
        e
    })?;

    let kind = match (kind, double_jump) {
        (PieceKind::Pawn { .. }, Some(flag)) => PieceKind::Pawn {
            double_jump: parse_flag(record, "double-jump flag", flag)?,
        },
        (PieceKind::Pawn { .. }, None) => {
            return Err(malformed(record, "pawn record without its double-jump flag"))
        }
        (_, Some(_)) => return Err(malformed(record, "double-jump flag on a non-pawn")),
        (kind, None) => kind,
    };

    Ok(Piece::new(kind, color, square).with_move_count(move_count))
}

/// The pawn-only trailing field, `None` for other pieces
pub(crate) fn double_jump_field(piece: &Piece) -> Option<bool> {
    match piece.kind {
        PieceKind::Pawn { double_jump } => Some(double_jump),
        _ => None,
    }
}
