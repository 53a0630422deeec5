//! Rendering module - read-only views of the game for the terminal
//!
//! The renderer only reads: squares with their piece and highlight flags, the
//! pending promotion marker, and the game's result/ended state. It never
//! mutates the game.

pub mod text;

pub use text::TextRenderer;
