// src/config/mod.rs

//! Configuration loading and validation for qmdwatch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate field values (`validate.rs`).
//! - Merge config + CLI flags into resolved runtime [`Settings`] (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{
    load_and_validate, load_from_path, load_optional, load_optional_in,
    DEFAULT_CONFIG_FILE,
};
pub use model::{ConfigFile, RawConfigFile, RenderSection, WatchSection};
pub use settings::Settings;
