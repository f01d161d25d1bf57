//! Tooltip configuration persistence.
//!
//! Stores presentation preferences (padding, placement offset, font sizes) as
//! JSON at `~/.local/share/hover-tooltip/config.json`. Missing fields fall back
//! to their defaults so older files keep loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::geometry::{Vec2, Vec3};
use crate::{Error, Result};

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hover-tooltip")
        .join("config.json")
}

/// Persisted tooltip settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Fixed margin added to the measured text extents.
    #[serde(default = "default_padding")]
    pub padding: Vec2,
    /// Offset from the hovered target to the panel (above and to the left).
    #[serde(default = "default_offset")]
    pub target_offset: Vec3,
    #[serde(default = "default_body_font_size")]
    pub body_font_size: f32,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f32,
    /// Wrap width for body and title text; `None` keeps each paragraph on one line.
    #[serde(default)]
    pub wrap_width: Option<f32>,
    /// TTF file to measure with. System fonts are used when unset.
    #[serde(default)]
    pub font: Option<PathBuf>,
    /// Canvas pixels per world unit when mapping positions onto the canvas.
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f32,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_padding() -> Vec2 { Vec2::new(30.0, 30.0) }
fn default_offset() -> Vec3 { Vec3::new(-1.0, 1.0, 0.0) }
fn default_body_font_size() -> f32 { 14.0 }
fn default_title_font_size() -> f32 { 16.0 }
fn default_pixels_per_unit() -> f32 { 1.0 }

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            target_offset: default_offset(),
            body_font_size: default_body_font_size(),
            title_font_size: default_title_font_size(),
            wrap_width: None,
            font: None,
            pixels_per_unit: default_pixels_per_unit(),
            path: default_path(),
        }
    }
}

impl TooltipConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Using default tooltip config ({}): {}", path.display(), e);
                Self { path, ..Self::default() }
            }
        }
    }

    /// Load from an explicit path. Errors are returned rather than swallowed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        config.path = path.to_path_buf();
        Ok(config)
    }

    /// Reject values the widget cannot lay out with.
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("body_font_size", self.body_font_size),
            ("title_font_size", self.title_font_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(Error::Other(format!("{name} must be positive, got {size}")));
            }
        }
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(Error::Other(format!(
                "pixels_per_unit must be positive, got {}",
                self.pixels_per_unit
            )));
        }
        Ok(())
    }

    /// Path this config is saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Redirect future saves to another file.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// Persist current config to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
