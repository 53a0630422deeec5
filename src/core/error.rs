//! Error types for core module
//!
//! Provides custom error types for the application layer: settings
//! persistence, terminal I/O, and rules engine setup failures.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file or terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// The rules engine refused to build a game
    #[error("Game setup failed: {0}")]
    Setup(#[from] chess_rules::RulesError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
