//! The tooltip widget: show/hide, text assignment, auto-resize, and clamping.

use serde::Serialize;

use super::handles::TooltipHandles;
use super::layout::{clamp_to_canvas, panel_size, placement};
use crate::config::TooltipConfig;
use crate::geometry::{Vec2, Vec3};
use crate::render::{CameraProvider, TextMeasure};

/// Body text substituted for empty content so measurement always sees one line.
const EMPTY_BODY: &str = " ";

/// Anything the tooltip can be placed next to.
pub trait HoverTarget {
    fn position(&self) -> Vec3;
}

impl HoverTarget for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

/// Snapshot of what the tooltip currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipState {
    pub visible: bool,
    pub body_text: String,
    pub title_text: Option<String>,
    pub title_visible: bool,
    pub position: Vec3,
    pub anchored_position: Vec2,
    pub size: Vec2,
}

/// A floating panel placed next to a hovered target.
pub struct TooltipWidget {
    handles: TooltipHandles,
    measurer: Box<dyn TextMeasure>,
    padding: Vec2,
    offset: Vec3,
}

impl std::fmt::Debug for TooltipWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TooltipWidget")
            .field("handles", &self.handles)
            .field("padding", &self.padding)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl TooltipWidget {
    /// Build the widget over `handles`. The panel starts hidden.
    pub fn new(
        mut handles: TooltipHandles,
        measurer: Box<dyn TextMeasure>,
        config: &TooltipConfig,
    ) -> Self {
        if let Some(panel) = handles.panel.as_mut() {
            panel.visible = false;
        }
        Self {
            handles,
            measurer,
            padding: config.padding,
            offset: config.target_offset,
        }
    }

    pub fn handles(&self) -> &TooltipHandles {
        &self.handles
    }

    /// True iff the panel exists and is shown.
    pub fn is_active(&self) -> bool {
        self.handles.panel.as_ref().is_some_and(|p| p.visible)
    }

    /// Current contents and geometry, or `None` without a panel.
    pub fn state(&self) -> Option<TooltipState> {
        let panel = self.handles.panel.as_ref()?;
        let title_visible = self.handles.title_row.visible;
        Some(TooltipState {
            visible: panel.visible,
            body_text: self.handles.body.text().to_string(),
            title_text: title_visible.then(|| self.handles.title.text().to_string()),
            title_visible,
            position: panel.position,
            anchored_position: panel.anchored_position,
            size: panel.size,
        })
    }

    /// Per-frame maintenance: bind the main camera if the surface has none.
    ///
    /// Returns true when a camera was bound on this tick.
    pub fn tick(&mut self, cameras: &dyn CameraProvider) -> bool {
        self.handles.surface.bind_camera_if_missing(cameras)
    }

    /// Resize the canvas the panel is clamped against.
    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.handles.surface.set_size(size);
    }

    /// Show the tooltip next to `target`.
    ///
    /// A `Some` title shows the title row even when the string is empty; `None`
    /// hides it.
    pub fn show<T: HoverTarget + ?Sized>(&mut self, target: &T, body: &str, title: Option<&str>) {
        if self.handles.panel.is_none() {
            tracing::debug!("show ignored: tooltip has no panel");
            return;
        }

        self.set_position(target.position());
        self.show_title(title);
        self.set_text(body, title);
        self.clamp_anchored_position();

        tracing::debug!(
            body = %self.handles.body.text(),
            title = ?title,
            "tooltip shown"
        );
    }

    /// Hide the panel. Text is kept until the next show overwrites it.
    pub fn hide(&mut self) {
        let Some(panel) = self.handles.panel.as_mut() else {
            return;
        };
        if panel.visible {
            tracing::debug!("tooltip hidden");
        }
        panel.visible = false;
    }

    fn set_position(&mut self, target: Vec3) {
        let position = placement(target, self.offset);
        let anchored = self.handles.surface.to_anchored(position);
        if let Some(panel) = self.handles.panel.as_mut() {
            panel.position = position;
            panel.anchored_position = anchored;
        }
    }

    fn show_title(&mut self, title: Option<&str>) {
        self.handles.title_row.visible = title.is_some();
        if let Some(panel) = self.handles.panel.as_mut() {
            panel.visible = true;
        }
    }

    fn set_text(&mut self, body: &str, title: Option<&str>) {
        let body = if body.is_empty() { EMPTY_BODY } else { body };
        self.handles.body.set_text(body);
        if let Some(title) = title {
            self.handles.title.set_text(title);
        }

        let measurer = self.measurer.as_mut();
        self.handles.title.force_layout(measurer);
        self.handles.body.force_layout(measurer);

        self.resize_panel();
    }

    /// Fit the panel to the measured text. Skipped while hidden.
    fn resize_panel(&mut self) {
        if !self.is_active() {
            return;
        }
        let body = self.handles.body.rendered_extents();
        let title = if self.handles.title_row.visible {
            self.handles.title.rendered_extents()
        } else {
            Vec2::ZERO
        };
        let size = panel_size(body, title, self.padding);
        if let Some(panel) = self.handles.panel.as_mut() {
            panel.size = size;
        }
    }

    fn clamp_anchored_position(&mut self) {
        let canvas = self.handles.surface.size();
        let Some(panel) = self.handles.panel.as_mut() else {
            return;
        };
        let clamped = clamp_to_canvas(panel.anchored_position, panel.size, canvas);
        if clamped != panel.anchored_position {
            panel.anchored_position = clamped;
            panel.position = self.handles.surface.to_world(clamped, panel.position.z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Camera, FixedAdvanceMeasure};

    fn config() -> TooltipConfig {
        let mut config = TooltipConfig::default();
        config.body_font_size = 12.0;
        config.title_font_size = 16.0;
        config
    }

    fn widget(canvas: Vec2) -> TooltipWidget {
        let config = config();
        TooltipWidget::new(
            TooltipHandles::new(canvas, &config),
            Box::new(FixedAdvanceMeasure::default()),
            &config,
        )
    }

    #[test]
    fn starts_hidden_even_if_panel_was_visible() {
        let config = config();
        let mut handles = TooltipHandles::new(Vec2::new(800.0, 600.0), &config);
        if let Some(panel) = handles.panel.as_mut() {
            panel.visible = true;
        }
        let w = TooltipWidget::new(handles, Box::new(FixedAdvanceMeasure::default()), &config);
        assert!(!w.is_active());
    }

    #[test]
    fn resize_is_skipped_while_hidden() {
        let mut w = widget(Vec2::new(800.0, 600.0));
        w.set_text("a much longer body", None);
        assert_eq!(w.handles().panel.as_ref().unwrap().size, Vec2::ZERO);
        assert_eq!(w.handles().body.text(), "a much longer body");
    }

    #[test]
    fn hidden_title_row_contributes_nothing() {
        let mut w = widget(Vec2::new(800.0, 600.0));
        w.show(&Vec3::new(10.0, 10.0, 0.0), "body", Some("a very long title"));
        w.show(&Vec3::new(10.0, 10.0, 0.0), "body", None);

        // 4 chars * 7 + 30, one 12pt line (15) + 30.
        assert_eq!(w.handles().panel.as_ref().unwrap().size, Vec2::new(58.0, 45.0));
        // Stale title text stays on the field but is not reported.
        assert_eq!(w.handles().title.text(), "a very long title");
        assert_eq!(w.state().unwrap().title_text, None);
    }

    #[test]
    fn clamped_position_is_written_back_to_world() {
        let mut w = widget(Vec2::new(100.0, 100.0));
        w.show(&Vec3::new(90.0, 5.0, 2.0), "body", None);

        let panel = w.handles().panel.as_ref().unwrap();
        assert_eq!(panel.anchored_position, Vec2::new(42.0, 6.0));
        assert_eq!(panel.position, Vec3::new(42.0, 6.0, 2.0));
    }

    #[test]
    fn tick_binds_camera_once() {
        let mut w = widget(Vec2::new(800.0, 600.0));
        assert!(!w.tick(&None::<Camera>));
        assert!(w.tick(&Camera::new(7, "main")));
        assert!(!w.tick(&Camera::new(8, "late")));
        assert_eq!(w.handles().surface.camera().map(|c| c.id), Some(7));
    }
}
