//! Perft: count the leaf positions of the legal-move tree
//!
//! `perft(depth)` is the number of positions reachable in exactly `depth`
//! half-moves, every castle, en-passant capture and promotion branch
//! included. Reference values for the starting position:
//!
//! | depth | nodes |
//! |-------|-------|
//! | 1 | 20 |
//! | 2 | 400 |
//! | 3 | 8,902 |
//! | 4 | 197,281 |
//!
//! Every move is applied through a [`Transaction`](crate::Transaction) and
//! rolled back before the next one is tried. With
//! [`EngineSettings::verify_rollback`] set, the board is compared against a
//! snapshot taken on entry after every undo; a difference is a broken
//! apply/undo pair and aborts the count with
//! [`ChessRulesError::ConsistencyViolation`].

use crate::board::Board;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::moves::Move;
use crate::settings::EngineSettings;
use crate::square::Square;
use crate::types::Color;
use tracing::{debug, error};

/// Perft runner carrying its settings
#[derive(Clone, Copy, Debug, Default)]
pub struct Perft {
    settings: EngineSettings,
}

impl Perft {
    pub fn new(settings: EngineSettings) -> Self {
        Perft { settings }
    }

    /// Leaf count at `depth` half-moves with `side` to move
    pub fn count(&self, board: &mut Board, depth: u32, side: Color) -> ChessRulesResult<u64> {
        self.check_depth(depth)?;
        let nodes = self.walk(board, depth, side)?;
        debug!("[PERFT] depth {} for {}: {} nodes", depth, side, nodes);
        Ok(nodes)
    }

    /// Leaf count below each legal root move, in generation order
    ///
    /// The counts sum to [`Perft::count`] at the same depth. Comparing the
    /// per-move split against another engine narrows a wrong total down to
    /// one root move.
    pub fn divide(
        &self,
        board: &mut Board,
        depth: u32,
        side: Color,
    ) -> ChessRulesResult<Vec<(Move, u64)>> {
        self.check_depth(depth)?;
        if depth == 0 {
            return Ok(Vec::new());
        }

        let snapshot = self.snapshot(board);
        let mut split = Vec::new();
        for mv in board.legal_moves(side)? {
            let mut child = board.apply(mv)?;
            let nodes = self.walk(&mut child, depth - 1, side.opponent())?;
            child.rollback();
            self.verify(board, snapshot.as_ref(), mv)?;
            debug!("[PERFT] {}: {}", mv, nodes);
            split.push((mv, nodes));
        }
        Ok(split)
    }

    fn check_depth(&self, depth: u32) -> ChessRulesResult<()> {
        let limit = self.settings.max_perft_depth;
        if depth > limit {
            return Err(ChessRulesError::DepthLimitExceeded { depth, limit });
        }
        Ok(())
    }

    fn walk(&self, board: &mut Board, depth: u32, side: Color) -> ChessRulesResult<u64> {
        if depth == 0 {
            return Ok(1);
        }

        let snapshot = self.snapshot(board);
        let mut nodes = 0;
        for mv in board.legal_moves(side)? {
            let mut child = board.apply(mv)?;
            nodes += self.walk(&mut child, depth - 1, side.opponent())?;
            child.rollback();
            self.verify(board, snapshot.as_ref(), mv)?;
        }
        Ok(nodes)
    }

    fn snapshot(&self, board: &Board) -> Option<Board> {
        self.settings.verify_rollback.then(|| board.clone())
    }

    fn verify(&self, board: &Board, snapshot: Option<&Board>, mv: Move) -> ChessRulesResult<()> {
        match snapshot {
            Some(expected) if board != expected => {
                let message = format!("after undoing {mv}: {}", divergence(expected, board));
                error!("[PERFT] Rollback diverged {}", message);
                Err(ChessRulesError::ConsistencyViolation { message })
            }
            _ => Ok(()),
        }
    }
}

/// First difference between two boards, for the error message
fn divergence(expected: &Board, actual: &Board) -> String {
    if expected.roster() != actual.roster() {
        return format!(
            "roster {:?} became {:?}",
            expected.roster(),
            actual.roster()
        );
    }
    Square::all()
        .find(|&square| expected.tile(square) != actual.tile(square))
        .map(|square| {
            format!(
                "tile {square} was {:?}, now {:?}",
                expected.tile(square),
                actual.tile(square)
            )
        })
        .unwrap_or_else(|| "boards differ".to_string())
}

/// Leaf count with default settings
///
/// ```rust
/// use chess_rules::{perft, Board, Color};
///
/// let mut board = Board::starting_position();
/// assert_eq!(perft(&mut board, 2, Color::White)?, 400);
/// # Ok::<(), chess_rules::ChessRulesError>(())
/// ```
pub fn perft(board: &mut Board, depth: u32, side: Color) -> ChessRulesResult<u64> {
    Perft::default().count(board, depth, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_one_leaf() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 0, Color::White), Ok(1));
    }

    #[test]
    fn test_shallow_counts() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 1, Color::White), Ok(20));
        assert_eq!(perft(&mut board, 2, Color::White), Ok(400));
        assert_eq!(board, Board::starting_position(), "Perft leaves the board as it found it");
    }

    #[test]
    fn test_depth_limit() {
        let settings = EngineSettings {
            max_perft_depth: 2,
            ..EngineSettings::default()
        };
        let mut board = Board::starting_position();
        assert_eq!(
            Perft::new(settings).count(&mut board, 3, Color::White),
            Err(ChessRulesError::DepthLimitExceeded { depth: 3, limit: 2 })
        );
    }

    #[test]
    fn test_divide_sums_to_count() {
        let mut board = Board::starting_position();
        let perft = Perft::default();
        let split = perft
            .divide(&mut board, 2, Color::White)
            .expect("Divide succeeds");
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|&(_, nodes)| nodes == 20), "Every reply set has 20 moves");
        let total: u64 = split.iter().map(|&(_, nodes)| nodes).sum();
        assert_eq!(Ok(total), perft.count(&mut board, 2, Color::White));
    }

    #[test]
    fn test_divergence_names_the_tile() {
        let expected = Board::starting_position();
        let mut actual = expected.clone();
        actual.tiles.clear_attacks();
        let text = divergence(&expected, &actual);
        assert!(text.starts_with("tile "), "{text}");
    }
}
