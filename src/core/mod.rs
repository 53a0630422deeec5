//! Core module - application infrastructure around the rules engine
//!
//! - [`error`] - [`CoreError`] and the [`CoreResult`] alias
//! - [`settings`] - [`GameSettings`] and their JSON persistence

pub mod error;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use settings::{
    load_or_default, load_settings, save_settings, settings_path, GameSettings, SettingsOrigin,
};
