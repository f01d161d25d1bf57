//! The tooltip widget and the UI handles it drives.

mod handles;
pub mod layout;
mod tooltip;

pub use handles::{PanelHandle, RowHandle, TooltipHandles};
pub use tooltip::{HoverTarget, TooltipState, TooltipWidget};
