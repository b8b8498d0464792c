//! Public API for the rules engine
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game, turn order, history)
//! - `moves` - Legality filter and commit (`Board::legal_moves`, `Board::play`)
//! - `state` - Check, checkmate and stalemate (`Board::game_status`)

mod game;
pub mod moves;
mod state;


pub use game::{new_game, parse_squares, reset_game, Game};
pub use state::GameStatus;
