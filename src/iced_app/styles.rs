//! Demo colors and widget styles.

use iced::widget::button;
use iced::{Border, Theme};

/// Colors by what they paint in the demo.
pub mod palette {
    use iced::Color;

    pub const WINDOW: Color = Color::from_rgb(0.10, 0.11, 0.13);
    pub const CANVAS: Color = Color::from_rgb(0.04, 0.05, 0.07);
    pub const CANVAS_EDGE: Color = Color::from_rgb(0.30, 0.34, 0.42);
    pub const LABEL: Color = Color::from_rgb(0.62, 0.66, 0.72);
    pub const TILE: Color = Color::from_rgb(0.18, 0.20, 0.26);
    pub const TILE_HOVERED: Color = Color::from_rgb(0.28, 0.32, 0.42);
    pub const TILE_EDGE: Color = Color::from_rgb(0.24, 0.27, 0.33);
    pub const TOOLTIP_EDGE: Color = Color::from_rgb(0.50, 0.52, 0.58);
    pub const TOOLTIP_TITLE: Color = Color::from_rgb(1.0, 0.82, 0.0);
    pub const TOOLTIP_BODY: Color = Color::from_rgb(0.95, 0.95, 0.95);
}

/// Style for the view switcher buttons.
pub fn view_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text_color) = match status {
        button::Status::Hovered => (palette::TILE_HOVERED, palette::TOOLTIP_BODY),
        button::Status::Pressed => (palette::CANVAS_EDGE, palette::TOOLTIP_TITLE),
        button::Status::Active | button::Status::Disabled => (palette::TILE, palette::LABEL),
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color,
        border: Border {
            color: palette::TILE_EDGE,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}
