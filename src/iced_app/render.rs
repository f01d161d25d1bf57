//! Canvas program: forwards cursor events and draws tiles plus the tooltip.

use iced::mouse;
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Stroke};
use iced::{alignment, Pixels, Point, Rectangle, Size, Theme};

use super::app::App;
use super::styles::palette;
use super::tiles::TILE_SIZE;
use super::Message;

impl canvas::Program<Message> for &App {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if bounds.contains(*position) {
                    let local = Point::new(position.x - bounds.x, position.y - bounds.y);
                    return Some(canvas::Action::publish(Message::CursorMoved(local)));
                }
                Some(canvas::Action::publish(Message::CursorLeft))
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                Some(canvas::Action::publish(Message::CursorLeft))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        self.screen_size.set(bounds.size());

        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::CANVAS);
        self.draw_tiles(&mut frame);
        if let Some(tooltip) = self.host.tooltip() {
            super::tooltip::draw_tooltip(&mut frame, tooltip, bounds.height, self.text_font);
        }
        vec![frame.into_geometry()]
    }
}

impl App {
    fn draw_tiles(&self, frame: &mut Frame) {
        let Some(tooltip) = self.host.tooltip() else { return };
        let side = TILE_SIZE * tooltip.handles().surface.pixels_per_unit();

        for (i, tile) in self.tiles.iter().enumerate() {
            let Some(center) = self.world_to_screen(tile.center) else { continue };
            let top_left = Point::new(center.x - side / 2.0, center.y - side / 2.0);
            let rect = Path::rectangle(top_left, Size::new(side, side));

            let fill = if self.hovered == Some(i) { palette::TILE_HOVERED } else { palette::TILE };
            frame.fill(&rect, fill);
            frame.stroke(&rect, Stroke::default().with_color(palette::TILE_EDGE).with_width(1.0));

            frame.fill_text(canvas::Text {
                content: tile.label.to_string(),
                position: Point::new(center.x, center.y + side / 2.0 + 4.0),
                color: palette::LABEL,
                size: Pixels(11.0),
                line_height: iced::widget::text::LineHeight::default(),
                font: iced::Font::DEFAULT,
                align_x: alignment::Horizontal::Center.into(),
                align_y: alignment::Vertical::Top,
                shaping: iced::widget::text::Shaping::Advanced,
                max_width: f32::INFINITY,
            });
        }
    }
}
