//! Configuration module for sign-to-text.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for recognition,
//! collection, the detector and the debug display, `AppPaths` for
//! cross-platform data directories, and TOML persistence via
//! `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, CollectionConfig, DetectorConfig, DisplayConfig, RecognitionConfig};
