//! Headless one-shot tooltip: build, show once, report the result.

use crate::config::TooltipConfig;
use crate::geometry::{Vec2, Vec3};
use crate::render::TextMeasure;
use crate::widget::{TooltipHandles, TooltipState, TooltipWidget};
use crate::Result;

/// What to show and where.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRequest {
    pub target: Vec3,
    pub body: String,
    pub title: Option<String>,
    pub canvas: Vec2,
}

/// Show a fresh tooltip once and return its state.
pub fn preview(
    config: &TooltipConfig,
    measurer: Box<dyn TextMeasure>,
    request: &PreviewRequest,
) -> Option<TooltipState> {
    let mut widget = TooltipWidget::new(TooltipHandles::new(request.canvas, config), measurer, config);
    widget.show(&request.target, &request.body, request.title.as_deref());
    widget.state()
}

/// Pretty JSON for a tooltip state.
pub fn to_json(state: &TooltipState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}
