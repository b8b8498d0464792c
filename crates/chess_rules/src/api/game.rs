//! Game lifecycle: a board plus whose turn it is and what has been played

use crate::board::Board;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::moves::Move;
use crate::settings::EngineSettings;
use crate::square::Square;
use crate::tile::Occupied;
use crate::types::Color;
use super::GameStatus;
use tracing::{debug, error, info};

/// A game in progress
///
/// Wraps a [`Board`] with turn order. [`Game::play`] refuses moves by the
/// side not on move as well as illegal ones; the board itself does not know
/// whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    settings: EngineSettings,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(EngineSettings::default())
    }
}

impl Game {
    /// Starting position, White to move
    pub fn new(settings: EngineSettings) -> Self {
        Game {
            board: Board::starting_position(),
            side_to_move: Color::White,
            history: Vec::new(),
            settings,
        }
    }

    /// Continue from a restored position
    ///
    /// Fails closed when the board breaks its invariants, or when the side to
    /// move owns the double-jump flag. Only the side that just moved can.
    pub fn restore(
        board: Board,
        side_to_move: Color,
        history: Vec<Move>,
        settings: EngineSettings,
    ) -> ChessRulesResult<Self> {
        board.check_consistency()?;
        if let Some(pawn) = board
            .double_jumper()
            .filter(|pawn| pawn.color == side_to_move)
        {
            error!(
                "[STATE] {} pawn on {} flagged with {} to move",
                pawn.color, pawn.square, side_to_move
            );
            return Err(ChessRulesError::ConsistencyViolation {
                message: format!(
                    "{} pawn on {} still flagged with a double jump while {} is to move",
                    pawn.color, pawn.square, side_to_move
                ),
            });
        }
        Ok(Game {
            board,
            side_to_move,
            history,
            settings,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Moves committed so far, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Legal moves for the side to move
    pub fn legal_moves(&mut self) -> ChessRulesResult<Vec<Move>> {
        self.board.legal_moves(self.side_to_move)
    }

    /// Play `mv` for the side to move
    ///
    /// Returns `Ok(false)` without changing anything if the piece on
    /// `mv.from` does not belong to the side to move or the move is illegal.
    pub fn play(&mut self, mv: Move) -> ChessRulesResult<bool> {
        let mover = self.board.occupant(mv.from).map(|piece| piece.color);
        if mover != Some(self.side_to_move) {
            debug!("[STATE] {} is not a move for {}", mv, self.side_to_move);
            return Ok(false);
        }
        if !self.board.play(mv)? {
            return Ok(false);
        }
        self.history.push(mv);
        self.side_to_move = self.side_to_move.opponent();
        Ok(true)
    }

    /// Play the legal move from `from` to `to`, if there is one
    ///
    /// A promotion uses the configured default piece. Returns the move that
    /// was played.
    pub fn play_squares(&mut self, from: Square, to: Square) -> ChessRulesResult<Option<Move>> {
        let promotion = self.settings.default_promotion;
        let chosen = self
            .board
            .legal_moves_from(from)?
            .into_iter()
            .filter(|mv| mv.to == to)
            .find(|mv| mv.promotion().map_or(true, |piece| piece == promotion));

        match chosen {
            Some(mv) if self.play(mv)? => Ok(Some(mv)),
            _ => Ok(None),
        }
    }

    /// Status of the side to move
    pub fn status(&mut self) -> ChessRulesResult<GameStatus> {
        self.board.game_status(self.side_to_move)
    }

    /// Back to the starting position with an empty history
    pub fn reset(&mut self) {
        self.board.reset();
        self.side_to_move = Color::White;
        self.history.clear();
    }
}

/// Create a new game with the initial position and default settings
pub fn new_game() -> Game {
    info!("[STATE] New game");
    Game::default()
}

/// Reset the game to the starting position, keeping its settings
pub fn reset_game(game: &mut Game) {
    info!("[STATE] Game reset after {} moves", game.history.len());
    game.reset();
}

/// Resolve a move by coordinates for a host that only tracks squares
pub fn parse_squares(from: (i32, i32), to: (i32, i32)) -> ChessRulesResult<(Square, Square)> {
    let from = Square::try_new(from.0, from.1)?;
    let to = Square::try_new(to.0, to.1)?;
    if from == to {
        return Err(ChessRulesError::InvalidMove {
            from,
            to,
            reason: "source and destination are the same square",
        });
    }
    Ok((from, to))
}
