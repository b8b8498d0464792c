//! Network-line snapshot: one `|`-joined line per turn
//!
//! ```text
//! mode|access|turn|pieceCount|record...|moveCount|move...
//! NET|true|Black|32|[Rook][White][false][0][0][0]|...|1|e2-e4
//! ```
//!
//! - `mode`: [`GameMode`] tag (`LOCAL`, `AI`, `NET`)
//! - `access`: whether the receiving side may act on this snapshot
//! - `turn`: side to move
//! - piece records in [`super::record`] format, preceded by their count
//! - move history as human-readable strings, preceded by their count
//!
//! Counts must match exactly; nothing may follow the last move. History
//! strings are kept as sent by [`NetworkSnapshot::decode`] and only read
//! back into [`Move`]s by [`NetworkSnapshot::to_game`].

use super::malformed;
use super::record::PieceRecord;
use crate::api::Game;
use crate::board::Board;
use crate::constants::NETWORK_DELIMITER;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::moves::Move;
use crate::settings::EngineSettings;
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Who is playing the game a snapshot belongs to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two players at one board
    Local,
    /// Against the AI process
    Computer,
    /// Against a remote player
    Network,
}

impl GameMode {
    pub fn tag(self) -> &'static str {
        match self {
            GameMode::Local => "LOCAL",
            GameMode::Computer => "AI",
            GameMode::Network => "NET",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for GameMode {
    type Err = ChessRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCAL" => Ok(GameMode::Local),
            "AI" => Ok(GameMode::Computer),
            "NET" => Ok(GameMode::Network),
            other => Err(malformed(other, "unknown game mode tag")),
        }
    }
}

/// Position plus turn state, as exchanged once per turn
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub mode: GameMode,
    pub access: bool,
    pub turn: Color,
    pub records: Vec<PieceRecord>,
    pub history: Vec<String>,
}

impl NetworkSnapshot {
    pub fn from_game(game: &Game, mode: GameMode, access: bool) -> Self {
        NetworkSnapshot {
            mode,
            access,
            turn: game.side_to_move(),
            records: game
                .board()
                .pieces()
                .map(|&piece| PieceRecord::new(piece))
                .collect(),
            history: game
                .history()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    pub fn encode(&self) -> String {
        let mut fields = vec![
            self.mode.to_string(),
            self.access.to_string(),
            self.turn.to_string(),
            self.records.len().to_string(),
        ];
        fields.extend(self.records.iter().map(PieceRecord::encode));
        fields.push(self.history.len().to_string());
        fields.extend(self.history.iter().cloned());
        fields.join(&NETWORK_DELIMITER.to_string())
    }

    /// Decode one line, rejecting it entirely on any error
    pub fn decode(line: &str) -> ChessRulesResult<Self> {
        let mut fields = line.split(NETWORK_DELIMITER);
        let mut next = |name: &str| {
            fields
                .next()
                .ok_or_else(|| malformed(line, format!("line ends before the {name} field")))
        };

        let mode: GameMode = next("mode")?.parse()?;
        let access = super::parse_flag(line, "access", next("access")?)?;
        let turn: Color = next("turn")?
            .parse()
            .map_err(|_| malformed(line, "turn is not White or Black"))?;

        let piece_count: usize = super::parse_number(line, "piece count", next("piece count")?)?;
        let records = (0..piece_count)
            .map(|_| next("piece record").and_then(PieceRecord::decode))
            .collect::<ChessRulesResult<Vec<_>>>()?;

        let move_count: usize = super::parse_number(line, "move count", next("move count")?)?;
        let history = (0..move_count)
            .map(|_| next("move").map(str::to_string))
            .collect::<ChessRulesResult<Vec<_>>>()?;

        if fields.next().is_some() {
            return Err(malformed(line, "unexpected fields after the move history"));
        }

        debug!(
            "[CODEC] Decoded {} snapshot: {} pieces, {} moves",
            mode,
            records.len(),
            history.len()
        );
        Ok(NetworkSnapshot {
            mode,
            access,
            turn,
            records,
            history,
        })
    }

    /// Restore the position, failing closed on overlaps or broken invariants
    pub fn to_board(&self) -> ChessRulesResult<Board> {
        Board::from_pieces(self.records.iter().map(|record| record.piece))
    }

    /// Restore the whole game: position, side to move and move history
    pub fn to_game(&self, settings: EngineSettings) -> ChessRulesResult<Game> {
        let history = self
            .history
            .iter()
            .map(|text| text.parse())
            .collect::<ChessRulesResult<Vec<Move>>>()?;
        Game::restore(self.to_board()?, self.turn, history, settings)
    }
}
