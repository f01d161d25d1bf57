//! UI handles the tooltip widget operates on.

use crate::config::TooltipConfig;
use crate::geometry::{Vec2, Vec3};
use crate::render::{RenderSurface, TextField, TextStyle};

/// The tooltip's background panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelHandle {
    pub visible: bool,
    /// World position.
    pub position: Vec3,
    /// Canvas-local position of the panel's bottom-left corner.
    pub anchored_position: Vec2,
    pub size: Vec2,
}

/// The row holding the title text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowHandle {
    pub visible: bool,
}

/// Everything the widget renders into, handed over at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipHandles {
    /// `None` models a tooltip whose panel was never wired up; every
    /// show/hide on it is a no-op.
    pub panel: Option<PanelHandle>,
    pub title_row: RowHandle,
    pub body: TextField,
    pub title: TextField,
    pub surface: RenderSurface,
}

impl TooltipHandles {
    /// Handles styled from `config`, drawing onto a canvas of `canvas_size`.
    pub fn new(canvas_size: Vec2, config: &TooltipConfig) -> Self {
        let style = |font_size| TextStyle {
            font_size,
            wrap_width: config.wrap_width,
        };
        Self {
            panel: Some(PanelHandle::default()),
            title_row: RowHandle::default(),
            body: TextField::new(style(config.body_font_size)),
            title: TextField::new(style(config.title_font_size)),
            surface: RenderSurface::new(canvas_size)
                .with_transform(Vec2::ZERO, config.pixels_per_unit),
        }
    }

    /// Drop the panel handle.
    pub fn without_panel(mut self) -> Self {
        self.panel = None;
        self
    }
}
