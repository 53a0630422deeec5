//! Rules engine and turn state machine for two-player local chess
//!
//! This crate knows nothing about screens, pixels or input devices. A caller
//! turns a user action into a `(row, column)` click, hands it to
//! [`GameState::click`], and reads back the board, highlight flags and
//! [`GameResult`] to draw.
//!
//! ## Architecture
//!
//! - [`Board`] owns two arenas (squares and pieces) linked by handles
//! - [`move_gen`] produces destinations per piece kind and filters them for
//!   legality by simulating each candidate on a board clone
//! - [`MoveValidator`] detects attacks by standing a [`Dummy`] probe on the
//!   target square
//! - [`Player`] caches legal moves, runs the click state machine and
//!   classifies positions
//! - [`GameState`] holds the turn token and the current result
//!
//! ## Example
//!
//! ```
//! use chess_rules::{GameResult, GameState};
//!
//! let mut game = GameState::new().unwrap();
//! for (row, column) in [(2, 6), (3, 6), (7, 5), (5, 5), (2, 7), (4, 7), (8, 4), (4, 8)] {
//!     game.click(row, column);
//! }
//! assert_eq!(game.result(), GameResult::Checkmate);
//! ```

pub mod board;
pub mod check;
pub mod error;
pub mod game_state;
mod make_move;
pub mod move_gen;
pub mod piece;
pub mod player;
pub mod rules_engine;
pub mod square;
pub mod types;

pub use board::{Board, Placement, HOME_PIECES};
pub use check::Check;
pub use error::{RulesError, RulesResult};
pub use game_state::GameState;
pub use piece::{Dummy, Piece, PieceId};
pub use player::Player;
pub use rules_engine::MoveValidator;
pub use square::{Square, SquareId};
pub use types::{ClickOutcome, Color, GameResult, PieceKind, Shade};
