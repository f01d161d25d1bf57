//! App::view() and subscription.

use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, row, text, Row};
use iced::{Border, Element, Length, Subscription};

use super::app::App;
use super::styles::{palette, view_button_style};
use super::tiles::VIEWS;
use super::Message;

impl App {
    /// Status line: view, hovered tile, tooltip and camera state.
    fn build_status_bar(&self) -> Element<'_, Message> {
        let hovered = self
            .hovered
            .and_then(|i| self.tiles.get(i))
            .map_or("-", |t| t.label);
        let camera = if self.camera.is_some() { "bound" } else { "pending" };
        let status = format!(
            "view: {} | hovered: {} | tooltip: {} | camera: {}",
            self.host.current_view(),
            hovered,
            if self.host.is_tooltip_active() { "shown" } else { "hidden" },
            camera,
        );
        text(status).size(12).color(palette::LABEL).into()
    }

    fn build_view_buttons(&self) -> Element<'_, Message> {
        let buttons = VIEWS.iter().map(|&view| {
            Element::from(
                button(text(view).size(12))
                    .on_press(Message::SwitchView(view))
                    .style(view_button_style),
            )
        });
        Row::with_children(buttons).spacing(6).into()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let canvas: Canvas<&App, Message> = Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill);

        let canvas_area = container(canvas)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(iced::Background::Color(palette::CANVAS)),
                border: Border {
                    color: palette::CANVAS_EDGE,
                    width: 2.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            });

        let main_column = column![
            row![self.build_view_buttons(), self.build_status_bar()].spacing(12),
            canvas_area,
        ]
        .spacing(5)
        .padding(7);

        container(main_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(iced::Background::Color(palette::WINDOW)),
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Render-loop tick (~60fps)
        iced::time::every(std::time::Duration::from_millis(16)).map(|_| Message::Frame)
    }
}
