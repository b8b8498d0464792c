//! Bracketed piece records
//!
//! `[Type][Color][Selected][MoveCount][Row][Column]`, with a seventh
//! `[justMadeDoubleJump]` field on pawn records only:
//!
//! ```text
//! [Rook][White][false][0][0][0]
//! [Pawn][Black][false][1][4][3][true]
//! ```
//!
//! `Selected` belongs to the host's UI and is carried through unchanged.

use super::{assemble_piece, double_jump_field, malformed, parse_flag};
use crate::board::Board;
use crate::constants::RECORD_FIELDS;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::types::Piece;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One piece plus the host's selection marker
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceRecord {
    pub piece: Piece,
    pub selected: bool,
}

impl PieceRecord {
    pub fn new(piece: Piece) -> Self {
        PieceRecord {
            piece,
            selected: false,
        }
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn decode(text: &str) -> ChessRulesResult<Self> {
        let inner = text
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| malformed(text, "record must be enclosed in brackets"))?;
        let fields: Vec<&str> = inner.split("][").collect();

        let double_jump = match fields.len() {
            RECORD_FIELDS => None,
            n if n == RECORD_FIELDS + 1 => Some(fields[RECORD_FIELDS]),
            n => {
                return Err(malformed(
                    text,
                    format!("expected {RECORD_FIELDS} or {} fields, found {n}", RECORD_FIELDS + 1),
                ))
            }
        };

        let selected = parse_flag(text, "selected", fields[2])?;
        let piece = assemble_piece(
            text,
            fields[0],
            fields[1],
            fields[3],
            (fields[4], fields[5]),
            double_jump,
        )?;
        Ok(PieceRecord { piece, selected })
    }
}

impl fmt::Display for PieceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece = &self.piece;
        write!(
            f,
            "[{}][{}][{}][{}][{}][{}]",
            piece.kind,
            piece.color,
            self.selected,
            piece.move_count,
            piece.square.row(),
            piece.square.column()
        )?;
        if let Some(flag) = double_jump_field(piece) {
            write!(f, "[{flag}]")?;
        }
        Ok(())
    }
}

impl FromStr for PieceRecord {
    type Err = ChessRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceRecord::decode(s)
    }
}

/// One record per live piece, in roster order, none selected
pub fn encode_board(board: &Board) -> Vec<String> {
    board
        .pieces()
        .map(|&piece| PieceRecord::new(piece).encode())
        .collect()
}

/// Rebuild a board from records, rejecting the whole set on any error
pub fn decode_board<I, S>(records: I) -> ChessRulesResult<Board>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pieces = records
        .into_iter()
        .map(|text| PieceRecord::decode(text.as_ref()).map(|record| record.piece))
        .collect::<ChessRulesResult<Vec<Piece>>>()?;
    debug!("[CODEC] Decoded {} piece records", pieces.len());
    Board::from_pieces(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_encode_pawn_and_rook() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Square::new(0, 0));
        assert_eq!(PieceRecord::new(rook).encode(), "[Rook][White][false][0][0][0]");

        let flagged = PieceKind::Pawn { double_jump: true };
        let pawn = Piece::new(flagged, Color::Black, Square::new(4, 3))
            .with_move_count(1);
        let record = PieceRecord {
            piece: pawn,
            selected: true,
        };
        assert_eq!(record.encode(), "[Pawn][Black][true][1][4][3][true]");
        assert_eq!(PieceRecord::decode(&record.encode()), Ok(record));
    }

    #[test]
    fn test_decode_rejects_bad_shapes() {
        for text in [
            "Rook][White][false][0][0][0]",
            "[Rook][White][false][0][0]",
            "[Pawn][White][false][0][1][0]",
            "[Rook][White][false][0][0][0][false]",
            "[Rook][White][maybe][0][0][0]",
            "[Rook][Green][false][0][0][0]",
            "[Rook][White][false][-1][0][0]",
        ] {
            assert!(
                matches!(
                    PieceRecord::decode(text),
                    Err(ChessRulesError::MalformedRecord { .. })
                ),
                "{text} should be malformed"
            );
        }
    }

    #[test]
    fn test_decode_rejects_unknown_type_and_square() {
        assert_eq!(
            PieceRecord::decode("[Archbishop][White][false][0][0][0]"),
            Err(ChessRulesError::UnknownPieceType {
                name: "Archbishop".to_string()
            })
        );
        assert_eq!(
            PieceRecord::decode("[King][White][false][0][8][4]"),
            Err(ChessRulesError::InvalidSquare { row: 8, column: 4 })
        );
    }

    #[test]
    fn test_board_round_trip_keeps_roster_order() {
        let board = Board::starting_position();
        let records = encode_board(&board);
        assert_eq!(records.len(), 32);
        assert_eq!(records[0], "[Rook][White][false][0][0][0]");
        assert_eq!(decode_board(&records), Ok(board));
    }

    #[test]
    fn test_decode_board_fails_closed() {
        let mut records = encode_board(&Board::starting_position());
        records[5] = "[Bishop][White][false][0][0][0]".to_string();
        assert_eq!(
            decode_board(&records),
            Err(ChessRulesError::OccupiedSquare {
                square: Square::new(0, 0)
            }),
            "Second piece on a1 rejects the whole board"
        );
    }
}
