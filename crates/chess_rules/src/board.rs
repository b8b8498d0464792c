//! Board: tile store plus the ordered roster of live pieces
//!
//! ## Invariants
//!
//! - At most one occupant per square, and the roster lists exactly the
//!   occupied squares (1:1, no duplicates).
//! - Every occupant's `square` field equals the tile it sits on.
//! - At most one pawn on the whole board carries the double-jump flag.
//! - The attack flags equal what a from-scratch recompute would produce.
//!   They are recomputed after every occupancy change, never patched.
//!
//! King safety is *not* an invariant here. Trial application deliberately
//! creates positions where the mover's king is attacked; the legality layer
//! ([`crate::api::moves`]) is what rejects them.
//!
//! ## Roster Order
//!
//! The roster keeps insertion order. Captures remove an entry and rollback
//! puts it back at the same index, so move generation order is stable
//! across apply/undo and structural comparison of two boards is exact.

use crate::constants::BACK_RANK;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::move_gen::attack;
use crate::square::Square;
use crate::tile::{BoardView, Occupied, Tile, TileStore};
use crate::types::{Color, Piece, PieceKind};
use std::fmt;
use tracing::{debug, error};

/// Position on the board: tiles, live pieces and the attack cache
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) tiles: TileStore,
    pub(crate) roster: Vec<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            tiles: TileStore::new(),
            roster: Vec::with_capacity(32),
        }
    }

    /// Standard initial position, White on rows 0-1
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for (column, kind) in BACK_RANK.into_iter().enumerate() {
                let square = Square::new(color.home_row(), column as u8);
                board.push_piece(Piece::new(kind, color, square));
            }
            for column in 0..8 {
                board.push_piece(Piece::new(
                    PieceKind::PAWN,
                    color,
                    Square::new(color.pawn_row(), column),
                ));
            }
        }
        board.recompute_attacks();
        board
    }

    /// Build a board from restored pieces, in the given roster order
    ///
    /// Fails closed: an overlap or an invariant violation rejects the whole
    /// set and no board is returned.
    pub fn from_pieces<I>(pieces: I) -> ChessRulesResult<Board>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Board::empty();
        for piece in pieces {
            board.tiles.place(piece)?;
            board.roster.push(piece.square);
        }
        board.recompute_attacks();
        board.check_consistency()?;
        debug!("[BOARD] restored {} pieces", board.roster.len());
        Ok(board)
    }

    /// Replace the whole position with the initial one
    pub fn reset(&mut self) {
        *self = Board::starting_position();
    }

    /// Remove every piece and flag
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.roster.clear();
    }

    /// Add one piece at the end of the roster
    pub fn add_piece(&mut self, piece: Piece) -> ChessRulesResult<()> {
        self.tiles.place(piece)?;
        self.roster.push(piece.square);
        self.recompute_attacks();
        Ok(())
    }

    fn push_piece(&mut self, piece: Piece) {
        self.tiles.put(piece);
        self.roster.push(piece.square);
    }

    pub fn tile(&self, square: Square) -> Tile {
        self.tiles.tile(square)
    }

    pub fn tiles(&self) -> &TileStore {
        &self.tiles
    }

    /// Occupied squares in roster order
    pub fn roster(&self) -> &[Square] {
        &self.roster
    }

    /// Live pieces in roster order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.roster
            .iter()
            .filter_map(move |&square| self.tiles.occupant(square))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.roster.len()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.is_king())
            .map(|piece| piece.square)
    }

    /// Whether `color`'s king stands on a square the enemy attacks
    ///
    /// A side without a king is never in check.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|square| self.is_attacked_by(square, color.opponent()))
    }

    /// Pawn currently flagged with a double jump, if any
    pub fn double_jumper(&self) -> Option<&Piece> {
        self.pieces().find(|piece| piece.just_double_jumped())
    }

    /// Clear all attack flags and re-mark them from every live piece
    pub fn recompute_attacks(&mut self) {
        attack::recompute(&mut self.tiles, &self.roster);
    }

    /// Compare the attack cache against each piece's `protected_tiles()`
    pub fn verify_attack_cache(&self) -> ChessRulesResult<()> {
        let expected = attack::attack_map_from_scratch(self.tiles.occupants(), &self.roster);
        for square in Square::all() {
            let cached = self.tiles.attack_flags(square);
            if cached != expected[square.index()] {
                error!("[BOARD] attack cache stale at {}", square);
                return Err(ChessRulesError::ConsistencyViolation {
                    message: format!(
                        "attack flags at {square} are {cached:?}, recompute gives {:?}",
                        expected[square.index()]
                    ),
                });
            }
        }
        Ok(())
    }

    /// Audit roster/tile correspondence and the double-jump rule
    pub fn check_consistency(&self) -> ChessRulesResult<()> {
        let mut seen = [false; 64];
        for &square in &self.roster {
            if std::mem::replace(&mut seen[square.index()], true) {
                return Err(desync(square, "square listed twice in roster"));
            }
            match self.tiles.occupant(square) {
                None => return Err(desync(square, "roster entry points at an empty tile")),
                Some(piece) if piece.square != square => {
                    return Err(desync(square, "occupant square differs from its tile"))
                }
                Some(_) => {}
            }
        }
        for square in Square::all() {
            if self.tiles.occupant(square).is_some() && !seen[square.index()] {
                return Err(desync(square, "occupied tile missing from roster"));
            }
        }

        let flagged: Vec<&Piece> = self
            .pieces()
            .filter(|piece| piece.just_double_jumped())
            .collect();
        if flagged.len() > 1 {
            error!("[BOARD] {} pawns flagged with a double jump", flagged.len());
            return Err(ChessRulesError::MultipleDoubleJumps {
                color: flagged[0].color,
                count: flagged.len(),
            });
        }
        Ok(())
    }
}

fn desync(square: Square, reason: &'static str) -> ChessRulesError {
    error!("[BOARD] tile/roster desync at {}: {}", square, reason);
    ChessRulesError::TileDesync { square, reason }
}

impl Occupied for Board {
    #[inline]
    fn occupant(&self, square: Square) -> Option<&Piece> {
        self.tiles.occupant(square)
    }
}

impl BoardView for Board {
    #[inline]
    fn is_attacked_by(&self, square: Square, color: Color) -> bool {
        self.tiles.is_attacked_by(square, color)
    }
}

impl fmt::Display for Board {
    /// Row 7 at the top; White uppercase, Black lowercase
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for column in 0..8 {
                let symbol = match self.tiles.occupant(Square::new(row, column)) {
                    None => '.',
                    Some(piece) => {
                        let letter = match piece.kind {
                            PieceKind::Pawn { .. } => 'p',
                            PieceKind::Knight => 'n',
                            PieceKind::Bishop => 'b',
                            PieceKind::Rook => 'r',
                            PieceKind::Queen => 'q',
                            PieceKind::King => 'k',
                        };
                        match piece.color {
                            Color::White => letter.to_ascii_uppercase(),
                            Color::Black => letter,
                        }
                    }
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
