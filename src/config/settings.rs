//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Missing sections or
//! fields fall back to their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// RecognitionConfig
// ---------------------------------------------------------------------------

/// Settings for turning per-frame classifications into a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Minimum gap in milliseconds between two accepted emissions.  A sign
    /// arriving exactly `cooldown_ms` after the last one is still suppressed.
    pub cooldown_ms: u64,
    /// Text placed between emitted signs.
    pub separator: String,
}

impl RecognitionConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 1500,
            separator: " ".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// CollectionConfig
// ---------------------------------------------------------------------------

/// Settings for manual dataset collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// File name used when the dataset is downloaded.
    pub export_file_name: String,
    /// Target directory — `None` means the platform data dir
    /// (see [`AppPaths::exports_dir`]).
    pub export_dir: Option<PathBuf>,
    /// Start a session with collection already switched on.
    pub start_enabled: bool,
    /// Label assigned to samples until the user enters another one.
    pub initial_label: String,
}

impl CollectionConfig {
    /// Full path the dataset is written to.
    pub fn export_path(&self) -> PathBuf {
        let dir = self
            .export_dir
            .clone()
            .unwrap_or_else(|| AppPaths::new().exports_dir);
        dir.join(&self.export_file_name)
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            export_file_name: "collected_sign_language_data.json".into(),
            export_dir: None,
            start_enabled: false,
            initial_label: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// DetectorConfig
// ---------------------------------------------------------------------------

/// Options handed to the external hand-landmark detector.
///
/// The pipeline itself only reads `max_num_hands` (to flag frames that carry
/// more hands than requested); the rest is passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Upper bound on hands reported per frame.
    pub max_num_hands: usize,
    /// Detector model size (0 = lite, 1 = full).
    pub model_complexity: u8,
    /// Confidence (0.0 – 1.0) required for a new detection.
    pub min_detection_confidence: f32,
    /// Confidence (0.0 – 1.0) required to keep tracking a hand.
    pub min_tracking_confidence: f32,
    /// Capture width in pixels.
    pub frame_width: u32,
    /// Capture height in pixels.
    pub frame_height: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_num_hands: 2,
            model_complexity: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,
            frame_width: 640,
            frame_height: 480,
        }
    }
}

// ---------------------------------------------------------------------------
// DisplayConfig
// ---------------------------------------------------------------------------

/// Settings for the read-only debug view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places shown for landmark coordinates in hand summaries.
    /// Stored samples are never rounded.
    pub debug_precision: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { debug_precision: 2 }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use sign_to_text::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// assert_eq!(config.recognition.cooldown_ms, 1500);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub recognition: RecognitionConfig,
    pub collection: CollectionConfig,
    pub detector: DetectorConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `true` when no `settings.toml` file exists yet.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
