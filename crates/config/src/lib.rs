//! Editor settings record and TOML load/save.
//!
//! Window geometry and key capture stay with the host UI; only the choices
//! the editor core actually consumes are persisted here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persisted editor preferences. Unknown or missing keys fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Nudge step size; snapped onto the decade ladder when applied.
    pub increment: f64,
    pub show_maneuver_pager: bool,
    pub show_ejection_angle: bool,
    pub show_clock: bool,
    pub show_trip: bool,
    pub show_orbit_info: bool,
    pub show_ut_controls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            increment: 1.0,
            show_maneuver_pager: true,
            show_ejection_angle: true,
            show_clock: false,
            show_trip: false,
            show_orbit_info: false,
            show_ut_controls: false,
        }
    }
}

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Load settings from a TOML file.
pub fn load(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable.
pub fn load_or_default(path: impl AsRef<Path>) -> Settings {
    load(path).unwrap_or_default()
}

/// Save settings to a TOML file.
pub fn save(path: impl AsRef<Path>, settings: &Settings) -> Result<(), ConfigError> {
    fs::write(path, toml::to_string_pretty(settings)?)?;
    Ok(())
}
