//! Application-shell ownership of the tooltip.
//!
//! The host is constructed once by the application and holds at most one
//! tooltip for the whole run. View changes do not touch it; the render loop
//! calls [`TooltipHost::frame`] once per frame.

use crate::render::CameraProvider;
use crate::widget::{HoverTarget, TooltipWidget};

/// Name of the view the host starts in.
pub const INITIAL_VIEW: &str = "main";

#[derive(Debug)]
pub struct TooltipHost {
    tooltip: Option<TooltipWidget>,
    view: String,
}

impl Default for TooltipHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipHost {
    pub fn new() -> Self {
        Self {
            tooltip: None,
            view: INITIAL_VIEW.to_string(),
        }
    }

    /// Host with `widget` already installed.
    pub fn with_tooltip(widget: TooltipWidget) -> Self {
        let mut host = Self::new();
        host.install(widget);
        host
    }

    /// Install the process-wide tooltip.
    ///
    /// If one is already installed the new widget is dropped and the existing
    /// one is left untouched. Returns whether `widget` was kept.
    pub fn install(&mut self, widget: TooltipWidget) -> bool {
        if self.tooltip.is_some() {
            tracing::debug!("tooltip already installed; discarding duplicate");
            drop(widget);
            return false;
        }
        self.tooltip = Some(widget);
        true
    }

    pub fn tooltip(&self) -> Option<&TooltipWidget> {
        self.tooltip.as_ref()
    }

    pub fn tooltip_mut(&mut self) -> Option<&mut TooltipWidget> {
        self.tooltip.as_mut()
    }

    /// Switch to another view. The tooltip carries over unchanged.
    pub fn enter_view(&mut self, view: impl Into<String>) {
        let view = view.into();
        tracing::debug!(from = %self.view, to = %view, "entering view");
        self.view = view;
    }

    pub fn current_view(&self) -> &str {
        &self.view
    }

    /// Per-frame callback from the render loop.
    pub fn frame(&mut self, cameras: &dyn CameraProvider) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.tick(cameras);
        }
    }

    /// Show the installed tooltip; does nothing when none is installed.
    pub fn show_tooltip<T: HoverTarget + ?Sized>(&mut self, target: &T, body: &str, title: Option<&str>) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.show(target, body, title);
        }
    }

    pub fn hide_tooltip(&mut self) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.hide();
        }
    }

    pub fn is_tooltip_active(&self) -> bool {
        self.tooltip.as_ref().is_some_and(TooltipWidget::is_active)
    }
}
