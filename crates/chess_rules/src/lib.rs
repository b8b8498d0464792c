//! Chess rules and legality engine
//!
//! Generates pseudo-legal moves per piece, filters them down to legal moves
//! by trial application, classifies check, checkmate and stalemate, and
//! handles castling, en passant and promotion. [`perft`] walks the full
//! legal-move tree and doubles as the correctness check for all of it.
//!
//! ```rust
//! use chess_rules::{Board, Color, GameStatus};
//!
//! let mut board = Board::starting_position();
//! assert_eq!(board.legal_moves(Color::White)?.len(), 20);
//! assert_eq!(board.game_status(Color::Black)?, GameStatus::Safe);
//! # Ok::<(), chess_rules::ChessRulesError>(())
//! ```
//!
//! Row 0 is White's back rank and column 0 is the a-file.

pub mod api;
pub mod board;
pub mod codec;
pub mod constants;
pub mod error;
pub mod make_unmake;
pub mod move_gen;
pub mod moves;
pub mod perft;
pub mod settings;
pub mod square;
pub mod tile;
pub mod types;

pub use api::{new_game, reset_game, Game, GameStatus};
pub use board::Board;
pub use codec::exchange::ExchangeBatch;
pub use codec::network::{GameMode, NetworkSnapshot};
pub use codec::record::PieceRecord;
pub use error::{ChessRulesError, ChessRulesResult};
pub use make_unmake::Transaction;
pub use moves::{Move, MoveKind};
pub use perft::{perft, Perft};
pub use settings::EngineSettings;
pub use square::Square;
pub use tile::{BoardView, Occupied, Tile, TileStore};
pub use types::{Color, Piece, PieceKind, PromotionPiece};
