//! Iced demo that drives the tooltip from cursor movement.
//!
//! This module is split into several submodules:
//! - `app`: App struct, boot, and message handling
//! - `tiles`: hoverable tiles and hit testing
//! - `render`: canvas program drawing tiles
//! - `tooltip`: tooltip panel drawing
//! - `view`: App::view() and subscription
//! - `styles`: color palette and widget styles

mod app;
mod render;
mod styles;
pub mod tiles;
mod tooltip;
mod view;

use iced::{Font, Point};

use crate::config::TooltipConfig;
use crate::render::load_font_file;
use crate::Result;

pub use app::App;
pub use tiles::Tile;

use app::{INIT_CONFIG, INIT_TEXT_FONT};

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Cursor moved inside the canvas (canvas-local, y down).
    CursorMoved(Point),
    /// Cursor left the canvas.
    CursorLeft,
    /// Once-per-frame tick from the subscription.
    Frame,
    /// Switch to another view; the tooltip carries over.
    SwitchView(&'static str),
}

/// Run the demo window.
pub fn run_iced_ui(config: TooltipConfig) -> Result<()> {
    let mut application = iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription);

    // Draw with the font the tooltip is measured with, so panels fit their text.
    let mut text_font = Font::DEFAULT;
    if let Some(path) = config.font.as_deref() {
        match load_font_file(path) {
            Ok((data, family)) => {
                // iced names fonts by 'static family strings.
                text_font = Font::with_name(Box::leak(family.into_boxed_str()));
                application = application.font(data);
            }
            Err(e) => tracing::warn!("{e}; drawing with the default font"),
        }
    }

    // Store in thread-local for the boot function
    INIT_CONFIG.with(|cell| *cell.borrow_mut() = Some(config));
    INIT_TEXT_FONT.with(|cell| cell.set(text_font));

    application.run()?;

    Ok(())
}
