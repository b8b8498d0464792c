//! Shared helpers for the integration tests

#![allow(dead_code)]

use chess_rules::{Board, Color, Piece, PieceKind, Square};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test writer; `RUST_LOG=chess_rules=debug` shows them
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a board from an 8-line diagram, rank 8 first
///
/// Uppercase is White, lowercase Black, `.` an empty square. Pawns off
/// their starting row count as having moved once; everything else is
/// unmoved, so kings and rooks on their home squares may castle.
pub fn board_from_diagram(diagram: [&str; 8]) -> Board {
    let mut pieces = Vec::new();
    for (line, text) in diagram.iter().enumerate() {
        let row = 7 - line as u8;
        for (column, symbol) in text.chars().enumerate() {
            if symbol == '.' {
                continue;
            }
            let color = if symbol.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match symbol.to_ascii_lowercase() {
                'p' => PieceKind::PAWN,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("Unknown diagram symbol {other:?}"),
            };
            let square = Square::new(row, column as u8);
            let mut piece = Piece::new(kind, color, square);
            if kind.is_pawn() && row != color.pawn_row() {
                piece = piece.with_move_count(1);
            }
            pieces.push(piece);
        }
    }
    Board::from_pieces(pieces).expect("Diagram describes a consistent position")
}
