//! User-tunable settings for the design surface.

use crate::resize::{HANDLE_HIT_TOLERANCE, HANDLE_SIZE};
use crate::ruler::DEFAULT_RULER_THICKNESS;
use crate::shapes::MIN_SIZE;
use crate::units::{Unit, inch_to_px};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file name inside the application config directory.
pub const SETTINGS_FILE: &str = "settings.json";
const APP_DIR: &str = "draftsurface";

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Surface configuration. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    /// Smallest width/height a drawn shape may have.
    pub min_shape_size: f64,
    /// Unit selected at start-up.
    pub default_unit: Unit,
    /// Page width in pixels.
    pub page_width_px: f64,
    /// Page height in pixels.
    pub page_height_px: f64,
    /// Side length of the corner resize handles.
    pub handle_size: f64,
    /// Pick radius around a handle centre.
    pub handle_hit_tolerance: f64,
    /// Return to the select tool after a drawing gesture ends.
    pub revert_to_select_after_draw: bool,
    /// Ruler cross-axis size.
    pub ruler_thickness: f64,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            min_shape_size: MIN_SIZE,
            default_unit: Unit::Inch,
            // US Letter.
            page_width_px: inch_to_px(8.5),
            page_height_px: inch_to_px(11.0),
            handle_size: HANDLE_SIZE,
            handle_hit_tolerance: HANDLE_HIT_TOLERANCE,
            revert_to_select_after_draw: true,
            ruler_thickness: DEFAULT_RULER_THICKNESS,
        }
    }
}

impl SurfaceSettings {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize the settings to JSON.
    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a file.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from a file, falling back to defaults if it is missing
    /// or unusable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Write settings to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Default settings location in the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Reject sizes that are not finite and positive.
    pub fn validate(&self) -> SettingsResult<()> {
        let sizes = [
            ("min_shape_size", self.min_shape_size),
            ("page_width_px", self.page_width_px),
            ("page_height_px", self.page_height_px),
            ("handle_size", self.handle_size),
            ("handle_hit_tolerance", self.handle_hit_tolerance),
            ("ruler_thickness", self.ruler_thickness),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        Ok(())
    }
}
