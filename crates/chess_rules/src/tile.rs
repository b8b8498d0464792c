//! Tile store: 64 cells, each with an optional occupant and two attack flags
//!
//! The attack flags are a derived cache. They are never patched
//! incrementally; the board clears them all and re-marks them from every
//! live piece after any occupancy change (see
//! [`Board::recompute_attacks`](crate::Board::recompute_attacks)).
//!
//! Occupants and flags are kept in separate arrays so the marking pass can
//! read occupancy while writing flags.

use crate::error::{ChessRulesError, ChessRulesResult};
use crate::square::Square;
use crate::types::{Color, Piece};

/// Read access to square occupancy
pub trait Occupied {
    fn occupant(&self, square: Square) -> Option<&Piece>;

    #[inline]
    fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// Occupant of `square` if it belongs to `color`'s opponent
    #[inline]
    fn enemy_at(&self, square: Square, color: Color) -> Option<&Piece> {
        self.occupant(square).filter(|piece| piece.is_enemy_of(color))
    }
}

/// Board-like read interface used by move generation
pub trait BoardView: Occupied {
    /// Whether `square` is marked attacked by pieces of `color`
    fn is_attacked_by(&self, square: Square, color: Color) -> bool;
}

pub type Occupants = [Option<Piece>; 64];

impl Occupied for Occupants {
    #[inline]
    fn occupant(&self, square: Square) -> Option<&Piece> {
        self[square.index()].as_ref()
    }
}

/// "Attacked by White / attacked by Black" flags of one square
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttackFlags {
    by: [bool; 2],
}

impl AttackFlags {
    pub const NONE: AttackFlags = AttackFlags { by: [false; 2] };

    #[inline]
    pub fn by(self, color: Color) -> bool {
        self.by[color.index()]
    }

    #[inline]
    pub fn mark(&mut self, color: Color) {
        self.by[color.index()] = true;
    }
}

pub type AttackMap = [AttackFlags; 64];

/// Snapshot of one tile
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub square: Square,
    pub occupant: Option<Piece>,
    pub attacked: AttackFlags,
}

/// Fixed 64-cell store of occupants and attack flags
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileStore {
    occupants: Occupants,
    attacked: AttackMap,
}

impl Default for TileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TileStore {
    /// Empty board, no flags set
    pub fn new() -> Self {
        TileStore {
            occupants: [None; 64],
            attacked: [AttackFlags::NONE; 64],
        }
    }

    pub fn tile(&self, square: Square) -> Tile {
        Tile {
            square,
            occupant: self.occupants[square.index()],
            attacked: self.attacked[square.index()],
        }
    }

    pub fn occupants(&self) -> &Occupants {
        &self.occupants
    }

    /// Put a piece on its own square, refusing to overwrite an occupant
    pub fn place(&mut self, piece: Piece) -> ChessRulesResult<()> {
        let cell = &mut self.occupants[piece.square.index()];
        if cell.is_some() {
            return Err(ChessRulesError::OccupiedSquare {
                square: piece.square,
            });
        }
        *cell = Some(piece);
        Ok(())
    }

    /// Put a piece on its own square, replacing whatever was there
    #[inline]
    pub(crate) fn put(&mut self, piece: Piece) {
        self.occupants[piece.square.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.occupants[square.index()].take()
    }

    #[inline]
    pub(crate) fn occupant_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.occupants[square.index()].as_mut()
    }

    #[inline]
    pub fn attack_flags(&self, square: Square) -> AttackFlags {
        self.attacked[square.index()]
    }

    /// Occupants for reading, flags for writing
    pub(crate) fn split_for_marking(&mut self) -> (&Occupants, &mut AttackMap) {
        (&self.occupants, &mut self.attacked)
    }

    pub fn attack_map(&self) -> &AttackMap {
        &self.attacked
    }

    pub fn clear_attacks(&mut self) {
        self.attacked = [AttackFlags::NONE; 64];
    }

    /// Remove every occupant and flag
    pub fn clear(&mut self) {
        self.occupants = [None; 64];
        self.clear_attacks();
    }
}

impl Occupied for TileStore {
    #[inline]
    fn occupant(&self, square: Square) -> Option<&Piece> {
        self.occupants.occupant(square)
    }
}

impl BoardView for TileStore {
    #[inline]
    fn is_attacked_by(&self, square: Square, color: Color) -> bool {
        self.attacked[square.index()].by(color)
    }
}
