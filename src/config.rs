//! Interaction settings persistence.
//!
//! Stores the host-tunable input parameters (double-click pairing window and
//! radius, design-mode switch) as JSON at
//! `~/.local/share/skin-ui/config.json`. Loaded once on startup; saved on
//! every change so the file is always current.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skin-ui")
        .join("config.json")
}

/// Persisted interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinConfig {
    /// Maximum milliseconds between two presses that pair into a double-click.
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
    /// Maximum pointer travel (pixels) between the paired presses.
    #[serde(default = "default_double_click_radius")]
    pub double_click_radius: f32,
    /// Editing/design context: hit-testing skips the alpha test so invisible
    /// regions stay selectable while authoring a skin.
    #[serde(default)]
    pub design_mode: bool,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_double_click_ms() -> u64 {
    500
}

fn default_double_click_radius() -> f32 {
    4.0
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            double_click_ms: default_double_click_ms(),
            double_click_radius: default_double_click_radius(),
            design_mode: false,
            path: default_path(),
        }
    }
}

impl SkinConfig {
    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(default_path())
    }

    /// Load from an explicit path, falling back to defaults on any error.
    pub fn load_from(path: PathBuf) -> Self {
        let mut config = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        config.path = path;
        config
    }

    /// Persist current settings to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = std::fs::write(&self.path, json);
        }
    }
}
