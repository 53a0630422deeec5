//! Error types for the rules engine
//!
//! Gameplay never produces errors: an off-board click, an illegal destination or
//! a wrong promotion choice is resolved locally as a no-op. The variants below
//! describe corrupted setups and API misuse, which abort construction instead
//! of letting the game continue in an undefined state.

use thiserror::Error;

use crate::types::Color;

/// Errors that can occur while building or wiring up a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Row or column outside the 1..=8 grid
    #[error("Invalid square: row {row}, column {column} (must be 1-8)")]
    InvalidSquare { row: u8, column: u8 },

    /// Two pieces were placed on the same square
    #[error("Square {square} is already occupied")]
    OccupiedSquare { square: String },

    /// A color does not have exactly one king
    #[error("{color} must have exactly one king, found {found}")]
    KingCount { color: Color, found: usize },

    /// The standard setup did not leave a king on its home square
    #[error("No {color} king on its home square {square}")]
    MissingKing { color: Color, square: String },

    /// `get_status` was called before the players were paired
    #[error("{color} player has not been paired with an opponent")]
    UnpairedPlayer { color: Color },
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
