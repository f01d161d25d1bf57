//! Shared test helpers.

use hover_tooltip::render::FixedAdvanceMeasure;
use hover_tooltip::{TooltipConfig, TooltipHandles, TooltipWidget, Vec2};

/// Body at 12pt (15px lines), title at 16pt (20px lines), 7px per character.
#[allow(dead_code)]
pub fn test_config() -> TooltipConfig {
    let mut config = TooltipConfig::default();
    config.body_font_size = 12.0;
    config.title_font_size = 16.0;
    config
}

/// Widget over a canvas of `width` x `height` using [`test_config`].
#[allow(dead_code)]
pub fn widget_on_canvas(width: f32, height: f32) -> TooltipWidget {
    widget_with_config(width, height, &test_config())
}

#[allow(dead_code)]
pub fn widget_with_config(width: f32, height: f32, config: &TooltipConfig) -> TooltipWidget {
    TooltipWidget::new(
        TooltipHandles::new(Vec2::new(width, height), config),
        Box::new(FixedAdvanceMeasure::default()),
        config,
    )
}

/// Widget on a canvas large enough that nothing is clamped.
#[allow(dead_code)]
pub fn roomy_widget() -> TooltipWidget {
    widget_on_canvas(10_000.0, 10_000.0)
}
