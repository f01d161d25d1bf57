//! Tooltip panel drawing.

use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{alignment, Color, Font, Pixels, Point, Size};

use super::styles::palette;
use crate::widget::TooltipWidget;

/// Panel fill, matching the default black tooltip background.
const BACKGROUND: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.92);

/// Draw the tooltip panel and its text if it is shown.
///
/// The widget reports positions with the canvas anchor at the bottom-left and
/// y up; `canvas_height` flips them into iced's top-left space. `font` must be
/// the face the widget measured with.
pub fn draw_tooltip(frame: &mut Frame, tooltip: &TooltipWidget, canvas_height: f32, font: Font) {
    let Some(state) = tooltip.state() else { return };
    if !state.visible {
        return;
    }
    let handles = tooltip.handles();

    let top_left = Point::new(
        state.anchored_position.x,
        canvas_height - state.anchored_position.y - state.size.height(),
    );
    let panel = Path::rectangle(top_left, Size::new(state.size.width(), state.size.height()));
    frame.fill(&panel, BACKGROUND);
    frame.stroke(&panel, Stroke::default().with_color(palette::TOOLTIP_EDGE).with_width(1.0));

    // Padding is split evenly around the text block.
    let title_extents = if state.title_visible {
        handles.title.rendered_extents()
    } else {
        crate::geometry::Vec2::ZERO
    };
    let body_extents = handles.body.rendered_extents();
    let inset_x = (state.size.width() - body_extents.width().max(title_extents.width())) / 2.0;
    let inset_y = (state.size.height() - body_extents.height() - title_extents.height()) / 2.0;
    let mut y = top_left.y + inset_y;

    if let Some(title) = state.title_text.as_deref() {
        let origin = Point::new(top_left.x + inset_x, y);
        emit_text(frame, title, origin, handles.title.style(), font, palette::TOOLTIP_TITLE);
        y += title_extents.height();
    }
    emit_text(
        frame,
        &state.body_text,
        Point::new(top_left.x + inset_x, y),
        handles.body.style(),
        font,
        palette::TOOLTIP_BODY,
    );
}

fn emit_text(
    frame: &mut Frame,
    content: &str,
    position: Point,
    style: &crate::render::TextStyle,
    font: Font,
    color: Color,
) {
    if content.is_empty() {
        return;
    }
    frame.fill_text(canvas::Text {
        content: content.to_string(),
        position,
        color,
        size: Pixels(style.font_size),
        line_height: iced::widget::text::LineHeight::Absolute(Pixels(crate::render::line_height(
            style.font_size,
        ))),
        font,
        align_x: alignment::Horizontal::Left.into(),
        align_y: alignment::Vertical::Top,
        shaping: iced::widget::text::Shaping::Advanced,
        max_width: style.wrap_width.unwrap_or(f32::INFINITY),
    });
}
