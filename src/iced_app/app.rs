//! App struct definition, boot, and message handling.

use std::cell::{Cell, RefCell};

use iced::{Font, Point, Size, Task};

use crate::config::TooltipConfig;
use crate::geometry::{Vec2, Vec3};
use crate::host::{TooltipHost, INITIAL_VIEW};
use crate::render::{Camera, FontMeasure};
use crate::widget::{TooltipHandles, TooltipWidget};

use super::tiles::{hit_test, tiles_for_view, Tile};
use super::Message;

/// Canvas size assumed until the first draw reports the real one.
const INITIAL_CANVAS: Size = Size::new(1024.0, 768.0);

// Thread-local storage for init params
thread_local! {
    pub static INIT_CONFIG: RefCell<Option<TooltipConfig>> = const { RefCell::new(None) };
    pub static INIT_TEXT_FONT: Cell<Font> = const { Cell::new(Font::DEFAULT) };
}

/// Application state.
pub struct App {
    pub(crate) host: TooltipHost,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) hovered: Option<usize>,
    /// Main camera; only available once the canvas has been laid out.
    pub(crate) camera: Option<Camera>,
    /// Current canvas size (updated on every draw).
    pub(crate) screen_size: Cell<Size>,
    /// Canvas size the tooltip was last clamped against.
    pub(crate) applied_size: Size,
    pub(crate) frame_count: u64,
    /// Font tooltip text is drawn with; the same face the widget measures with.
    pub(crate) text_font: Font,
}

impl App {
    pub fn title(state: &Self) -> String {
        format!("Hover Tooltip [{}]", state.host.current_view())
    }

    pub fn boot() -> (Self, Task<Message>) {
        let config = INIT_CONFIG
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_else(TooltipConfig::load);

        let measurer = FontMeasure::from_optional_file(config.font.as_deref());
        let canvas = Vec2::new(INITIAL_CANVAS.width, INITIAL_CANVAS.height);
        let widget = TooltipWidget::new(
            TooltipHandles::new(canvas, &config),
            Box::new(measurer),
            &config,
        );
        tracing::info!(pixels_per_unit = config.pixels_per_unit, "tooltip demo started");

        let app = App {
            host: TooltipHost::with_tooltip(widget),
            tiles: tiles_for_view(INITIAL_VIEW),
            hovered: None,
            camera: None,
            screen_size: Cell::new(INITIAL_CANVAS),
            applied_size: INITIAL_CANVAS,
            frame_count: 0,
            text_font: INIT_TEXT_FONT.with(Cell::get),
        };
        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CursorMoved(pos) => self.handle_cursor(pos),
            Message::CursorLeft => self.set_hovered(None),
            Message::Frame => self.handle_frame(),
            Message::SwitchView(view) => {
                self.set_hovered(None);
                self.host.enter_view(view);
                self.tiles = tiles_for_view(view);
            }
        }
        Task::none()
    }

    /// The render-loop callback: sync canvas size, then tick the tooltip.
    fn handle_frame(&mut self) {
        self.frame_count += 1;
        let size = self.screen_size.get();
        if size != self.applied_size {
            self.applied_size = size;
            if let Some(tooltip) = self.host.tooltip_mut() {
                tooltip.set_canvas_size(Vec2::new(size.width, size.height));
            }
        }
        if self.camera.is_none() && self.frame_count > 1 {
            self.camera = Some(Camera::new(1, "main"));
        }
        self.host.frame(&self.camera);
    }

    fn handle_cursor(&mut self, pos: Point) {
        let world = self.screen_to_world(pos);
        let hovered = world.and_then(|w| hit_test(&self.tiles, w));
        self.set_hovered(hovered);
    }

    fn set_hovered(&mut self, hovered: Option<usize>) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        match hovered.and_then(|i| self.tiles.get(i)) {
            Some(tile) => self.host.show_tooltip(tile, tile.body, tile.title),
            None => self.host.hide_tooltip(),
        }
    }

    /// Convert a canvas point (y down) to world coordinates.
    pub(crate) fn screen_to_world(&self, pos: Point) -> Option<Vec2> {
        let tooltip = self.host.tooltip()?;
        let surface = &tooltip.handles().surface;
        let height = self.screen_size.get().height;
        let world = surface.to_world(Vec2::new(pos.x, height - pos.y), 0.0);
        Some(world.xy())
    }

    /// Convert a world point to a canvas point (y down).
    pub(crate) fn world_to_screen(&self, world: Vec3) -> Option<Point> {
        let tooltip = self.host.tooltip()?;
        let anchored = tooltip.handles().surface.to_anchored(world);
        let height = self.screen_size.get().height;
        Some(Point::new(anchored.x, height - anchored.y))
    }
}
