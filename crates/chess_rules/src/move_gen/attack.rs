//! Attack cache recomputation
//!
//! The per-square "attacked by White / Black" flags are rebuilt from scratch:
//! clear every flag, then let each live piece mark its protected squares.
//! There is no incremental update. [`attack_map_from_scratch`] builds the
//! same map from each piece's `protected_tiles()` and is what the cache is
//! audited against.

use super::protected_tiles;
use super::{pawn, walker_for};
use crate::square::Square;
use crate::tile::{AttackFlags, AttackMap, Occupants, Occupied, TileStore};
use crate::types::Piece;

/// Write `piece`'s protected squares straight into the flag cache
pub fn mark_protected_tiles(occupants: &Occupants, piece: &Piece, attacked: &mut AttackMap) {
    let color = piece.color;
    let mark = |square: Square| attacked[square.index()].mark(color);
    match walker_for(piece.kind) {
        Some(walker) => walker.for_each_protected(occupants, piece.square, color, mark),
        None => pawn::for_each_protected(piece, mark),
    }
}

/// Clear all flags and re-mark them from every piece on the roster
pub fn recompute(tiles: &mut TileStore, roster: &[Square]) {
    let (occupants, attacked) = tiles.split_for_marking();
    *attacked = [AttackFlags::NONE; 64];
    for &square in roster {
        if let Some(piece) = occupants.occupant(square) {
            mark_protected_tiles(occupants, piece, attacked);
        }
    }
}

/// Attack map built from each piece's `protected_tiles()` list
///
/// Independent of the marking pass above; used to audit the cache.
pub fn attack_map_from_scratch(occupants: &Occupants, roster: &[Square]) -> AttackMap {
    let mut map = [AttackFlags::NONE; 64];
    for &square in roster {
        if let Some(piece) = occupants.occupant(square) {
            for target in protected_tiles(occupants, piece) {
                map[target.index()].mark(piece.color);
            }
        }
    }
    map
}

