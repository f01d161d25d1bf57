//! Hover tooltip
//!
//! A single floating tooltip panel: placed next to a hovered target, filled
//! with title and body text, sized to the rendered text, and kept inside its
//! canvas. Ships with an iced demo that drives it from cursor movement.

pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod iced_app;
pub mod preview;
pub mod render;
pub mod widget;

pub use config::TooltipConfig;
pub use error::{Error, Result};
pub use geometry::{Vec2, Vec3};
pub use host::TooltipHost;
pub use widget::{HoverTarget, TooltipHandles, TooltipState, TooltipWidget};
