//! Text measurement using cosmic-text.
//!
//! Loads either a single TTF file or the system font set into a cosmic-text
//! `FontSystem` and shapes strings to report their rendered extents.

use std::path::Path;

use cosmic_text::{fontdb, Attrs, Buffer, Family, Metrics, Shaping};

use super::measure::{line_height, TextMeasure, TextStyle};
use crate::geometry::Vec2;
use crate::{Error, Result};

/// Shaping width used when text is not wrapped.
const UNBOUNDED_WIDTH: f32 = 10000.0;

/// cosmic-text backed [`TextMeasure`].
pub struct FontMeasure {
    font_system: cosmic_text::FontSystem,
    /// Family loaded from an explicit font file, if any.
    family: Option<String>,
}

impl std::fmt::Debug for FontMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMeasure")
            .field("family", &self.family)
            .finish()
    }
}

impl FontMeasure {
    /// Measure with the fonts installed on the system.
    pub fn system() -> Self {
        Self {
            font_system: cosmic_text::FontSystem::new(),
            family: None,
        }
    }

    /// Measure with a single font file and nothing else.
    pub fn from_file(path: &Path) -> Result<Self> {
        let (data, family) = load_font_file(path)?;

        let mut db = fontdb::Database::new();
        db.load_font_data(data);
        tracing::debug!("Loaded font {} -> family '{}'", path.display(), family);

        Ok(Self {
            font_system: cosmic_text::FontSystem::new_with_locale_and_db("en-US".to_string(), db),
            family: Some(family),
        })
    }

    /// Use `path` when given, otherwise system fonts. A font that fails to load
    /// is logged and replaced by the system set.
    pub fn from_optional_file(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::from_file(path).unwrap_or_else(|e| {
                tracing::warn!("{e}; falling back to system fonts");
                Self::system()
            }),
            None => Self::system(),
        }
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }
}

impl TextMeasure for FontMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Vec2 {
        // cosmic-text asserts on a zero line height.
        if text.is_empty() || !style.font_size.is_finite() || style.font_size <= 0.0 {
            return Vec2::ZERO;
        }

        let line_height = line_height(style.font_size);
        let metrics = Metrics::new(style.font_size, line_height);
        let attrs = match &self.family {
            Some(name) => Attrs::new().family(Family::Name(name.as_str())),
            None => Attrs::new(),
        };
        let shape_width = match style.wrap_width {
            Some(w) if w > 0.0 => w,
            _ => UNBOUNDED_WIDTH,
        };

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, Some(shape_width), None);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, true);

        let runs: Vec<_> = buffer.layout_runs().collect();
        let width = runs.iter().map(|r| r.line_w).fold(0.0_f32, f32::max);
        let height = if runs.len() <= 1 {
            line_height
        } else {
            let first_y = runs.first().map(|r| r.line_y).unwrap_or(0.0);
            runs.last().map(|r| r.line_y - first_y + line_height).unwrap_or(line_height)
        };
        Vec2::new(width, height)
    }
}

/// Read a TTF file and the family name it registers.
///
/// The demo window loads the same bytes into iced so drawn text matches the
/// measured extents.
pub fn load_font_file(path: &Path) -> Result<(Vec<u8>, String)> {
    let data = std::fs::read(path).map_err(|e| Error::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let family = fontdb_family_name(&data).ok_or_else(|| Error::FontLoad {
        path: path.to_path_buf(),
        reason: "no font faces found".to_string(),
    })?;
    Ok((data, family))
}

/// Extract the font family name from raw TTF data using fontdb.
fn fontdb_family_name(data: &[u8]) -> Option<String> {
    let mut tmp_db = fontdb::Database::new();
    tmp_db.load_font_data(data.to_vec());
    tmp_db
        .faces()
        .next()
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_file_is_reported() {
        let err = FontMeasure::from_file(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, Error::FontLoad { .. }), "got {err:?}");
    }

    #[test]
    fn garbage_font_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let err = FontMeasure::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("no font faces"), "got {err}");
    }

    #[test]
    fn optional_missing_file_falls_back_to_system() {
        let m = FontMeasure::from_optional_file(Some(Path::new("/nonexistent/font.ttf")));
        assert!(m.family().is_none());
    }

    #[test]
    fn empty_text_measures_zero() {
        let mut m = FontMeasure::system();
        assert_eq!(m.measure("", &TextStyle::new(14.0)), Vec2::ZERO);
    }

    #[test]
    fn zero_font_size_measures_zero_without_shaping() {
        let mut m = FontMeasure::system();
        assert_eq!(m.measure("hi", &TextStyle::new(0.0)), Vec2::ZERO);
        assert_eq!(m.measure("hi", &TextStyle::new(-3.0)), Vec2::ZERO);
    }

    #[test]
    fn load_font_file_reports_unreadable_path() {
        let err = load_font_file(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, Error::FontLoad { .. }), "got {err:?}");
    }

    #[test]
    fn single_line_height_is_one_line() {
        let mut m = FontMeasure::system();
        let size = m.measure(" ", &TextStyle::new(14.0));
        assert_eq!(size.height(), line_height(14.0));
    }
}
