//! Text measurement seam and text fields with cached rendered extents.
//!
//! The tooltip never shapes text itself. It asks a [`TextMeasure`] for the
//! rendered extents of a string and stores the answer on a [`TextField`] until
//! the next forced layout.

use crate::geometry::Vec2;

/// Line height used by every measurer, matching the glyph layout metrics.
pub fn line_height(font_size: f32) -> f32 {
    (font_size * 1.2).ceil()
}

/// Font and wrapping settings for a text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    /// Wrap width in pixels. `None` keeps each paragraph on a single line.
    pub wrap_width: Option<f32>,
}

impl TextStyle {
    pub fn new(font_size: f32) -> Self {
        Self { font_size, wrap_width: None }
    }

    pub fn wrapped(mut self, width: f32) -> Self {
        self.wrap_width = Some(width);
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// A text layout engine that reports rendered extents.
pub trait TextMeasure {
    /// Width and height `text` occupies after layout with `style`.
    fn measure(&mut self, text: &str, style: &TextStyle) -> Vec2;
}

impl<T: TextMeasure + ?Sized> TextMeasure for Box<T> {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Vec2 {
        (**self).measure(text, style)
    }
}

/// Measurer with a fixed per-character advance.
///
/// Used when no font is available (headless runs, tests). Width is the widest
/// line's character count times the advance; height is the line count times
/// [`line_height`]. Wrapping breaks on spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasure {
    pub advance: f32,
}

impl FixedAdvanceMeasure {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }

    /// Character counts of each laid-out line.
    fn line_lengths(&self, text: &str, wrap_width: Option<f32>) -> Vec<usize> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let Some(max_width) = wrap_width else {
                lines.push(paragraph.chars().count());
                continue;
            };
            let mut current = 0usize;
            let mut started = false;
            for word in paragraph.split(' ') {
                let word_len = word.chars().count();
                if !started {
                    current = word_len;
                    started = true;
                } else if (current + 1 + word_len) as f32 * self.advance <= max_width {
                    current += 1 + word_len;
                } else {
                    lines.push(current);
                    current = word_len;
                }
            }
            lines.push(current);
        }
        lines
    }
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self::new(7.0)
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }
        let lines = self.line_lengths(text, style.wrap_width);
        let widest = lines.iter().copied().max().unwrap_or(0);
        Vec2::new(
            widest as f32 * self.advance,
            lines.len() as f32 * line_height(style.font_size),
        )
    }
}

/// A text element whose rendered extents are refreshed on demand.
///
/// Assigning text marks the field dirty; the extents only change when
/// [`TextField::force_layout`] runs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    text: String,
    style: TextStyle,
    extents: Vec2,
    dirty: bool,
}

impl TextField {
    pub fn new(style: TextStyle) -> Self {
        Self {
            text: String::new(),
            style,
            extents: Vec2::ZERO,
            dirty: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
        self.dirty = true;
    }

    /// Whether text or style changed since the last layout.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Re-measure synchronously so `rendered_extents` reflects the current text.
    pub fn force_layout(&mut self, measure: &mut dyn TextMeasure) {
        self.extents = measure.measure(&self.text, &self.style);
        self.dirty = false;
    }

    /// Extents from the last layout.
    pub fn rendered_extents(&self) -> Vec2 {
        self.extents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_height_rounds_up() {
        assert_eq!(line_height(12.0), 15.0);
        assert_eq!(line_height(14.0), 17.0);
        assert_eq!(line_height(16.0), 20.0);
    }

    #[test]
    fn fixed_advance_single_line() {
        let mut m = FixedAdvanceMeasure::default();
        let size = m.measure("hello", &TextStyle::new(12.0));
        assert_eq!(size, Vec2::new(35.0, 15.0));
    }

    #[test]
    fn fixed_advance_empty_is_zero() {
        let mut m = FixedAdvanceMeasure::default();
        assert_eq!(m.measure("", &TextStyle::new(12.0)), Vec2::ZERO);
    }

    #[test]
    fn fixed_advance_single_space_has_a_line() {
        let mut m = FixedAdvanceMeasure::default();
        assert_eq!(m.measure(" ", &TextStyle::new(12.0)), Vec2::new(7.0, 15.0));
        assert_eq!(m.measure(" ", &TextStyle::new(12.0).wrapped(100.0)), Vec2::new(7.0, 15.0));
    }

    #[test]
    fn fixed_advance_newlines_stack() {
        let mut m = FixedAdvanceMeasure::default();
        let size = m.measure("ab\nabcd\n", &TextStyle::new(12.0));
        assert_eq!(size, Vec2::new(28.0, 45.0));
    }

    #[test]
    fn fixed_advance_wraps_on_words() {
        let mut m = FixedAdvanceMeasure::new(10.0);
        // "aaa bbb" is 70 wide; fits exactly.
        assert_eq!(m.measure("aaa bbb", &TextStyle::new(12.0).wrapped(70.0)), Vec2::new(70.0, 15.0));
        // One pixel less pushes "bbb" to the next line.
        assert_eq!(m.measure("aaa bbb", &TextStyle::new(12.0).wrapped(69.0)), Vec2::new(30.0, 30.0));
    }

    #[test]
    fn long_word_overflows_wrap_width() {
        let mut m = FixedAdvanceMeasure::new(10.0);
        let size = m.measure("abcdefgh ij", &TextStyle::new(12.0).wrapped(50.0));
        assert_eq!(size, Vec2::new(80.0, 30.0));
    }

    #[test]
    fn text_field_extents_lag_until_forced() {
        let mut m = FixedAdvanceMeasure::default();
        let mut field = TextField::new(TextStyle::new(12.0));
        field.set_text("abc");
        assert!(field.is_dirty());
        assert_eq!(field.rendered_extents(), Vec2::ZERO);

        field.force_layout(&mut m);
        assert!(!field.is_dirty());
        assert_eq!(field.rendered_extents(), Vec2::new(21.0, 15.0));
    }
}
