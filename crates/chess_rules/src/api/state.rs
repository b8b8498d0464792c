//! Check, checkmate and stalemate
//!
//! | checked | trapped | status |
//! |---------|---------|--------|
//! | no | no | [`GameStatus::Safe`] |
//! | yes | no | [`GameStatus::Checked`] |
//! | yes | yes | [`GameStatus::Checkmated`] |
//! | no | yes | [`GameStatus::Stalemated`] |
//!
//! "Trapped" means no piece of the side has a single legal move. The probe
//! goes through the same trial/rollback path as the legality filter and
//! stops at the first legal move it finds.

use crate::board::Board;
use crate::error::ChessRulesResult;
use crate::move_gen::candidate_moves;
use crate::square::Square;
use crate::tile::Occupied;
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Situation of one side
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Safe,
    Checked,
    Checkmated,
    Stalemated,
}

impl GameStatus {
    pub fn from_flags(checked: bool, trapped: bool) -> Self {
        match (checked, trapped) {
            (false, false) => GameStatus::Safe,
            (true, false) => GameStatus::Checked,
            (true, true) => GameStatus::Checkmated,
            (false, true) => GameStatus::Stalemated,
        }
    }

    /// Whether the game is over for this side
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmated | GameStatus::Stalemated)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Safe => "safe",
            GameStatus::Checked => "check",
            GameStatus::Checkmated => "checkmate",
            GameStatus::Stalemated => "stalemate",
        };
        f.write_str(text)
    }
}

impl Board {
    /// Whether `color`'s king is currently attacked
    pub fn is_checked(&self, color: Color) -> bool {
        self.is_king_attacked(color)
    }

    /// Whether `color` has no legal move anywhere on the board
    pub fn is_trapped(&mut self, color: Color) -> ChessRulesResult<bool> {
        let squares: Vec<Square> = self.pieces_of(color).map(|piece| piece.square).collect();
        for square in squares {
            let Some(piece) = self.occupant(square).copied() else {
                continue;
            };
            for mv in candidate_moves(&*self, &piece) {
                if self.leaves_king_safe(mv, color)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    pub fn game_status(&mut self, color: Color) -> ChessRulesResult<GameStatus> {
        let checked = self.is_checked(color);
        let trapped = self.is_trapped(color)?;
        let status = GameStatus::from_flags(checked, trapped);
        if status != GameStatus::Safe {
            debug!("[STATE] {} is in {}", color, status);
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        assert_eq!(GameStatus::from_flags(false, false), GameStatus::Safe);
        assert_eq!(GameStatus::from_flags(true, false), GameStatus::Checked);
        assert_eq!(GameStatus::from_flags(true, true), GameStatus::Checkmated);
        assert_eq!(GameStatus::from_flags(false, true), GameStatus::Stalemated);
        assert!(GameStatus::Stalemated.is_terminal());
        assert!(!GameStatus::Checked.is_terminal());
    }
}
