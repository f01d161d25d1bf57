//! Placement, sizing, and clamping arithmetic for the tooltip panel.

use crate::geometry::{Vec2, Vec3};

/// Panel position for a target: the target's position plus a fixed offset.
pub fn placement(target: Vec3, offset: Vec3) -> Vec3 {
    target + offset
}

/// Panel size for stacked title and body extents plus padding.
///
/// Width is the wider of the two; heights add because the title sits above the body.
pub fn panel_size(body: Vec2, title: Vec2, padding: Vec2) -> Vec2 {
    Vec2::new(body.x.max(title.x), body.y + title.y) + padding
}

/// Pull the panel back inside the canvas on any axis where its far edge overflows.
///
/// Only the high side is clamped. A panel larger than the canvas, or one placed
/// left of or below the anchor, keeps a negative coordinate.
pub fn clamp_to_canvas(anchored: Vec2, size: Vec2, canvas: Vec2) -> Vec2 {
    let mut clamped = anchored;
    if anchored.x + size.x > canvas.x {
        clamped.x = canvas.x - size.x;
    }
    if anchored.y + size.y > canvas.y {
        clamped.y = canvas.y - size.y;
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn placement_is_above_and_left() {
        let p = placement(Vec3::new(10.0, 20.0, 3.0), Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(p, Vec3::new(9.0, 21.0, 3.0));
    }

    #[test]
    fn size_takes_wider_line_and_stacks_heights() {
        let size = panel_size(Vec2::new(120.0, 17.0), Vec2::new(80.0, 20.0), Vec2::new(30.0, 30.0));
        assert_eq!(size, Vec2::new(150.0, 67.0));

        let size = panel_size(Vec2::new(40.0, 17.0), Vec2::new(80.0, 20.0), Vec2::new(30.0, 30.0));
        assert_eq!(size, Vec2::new(110.0, 67.0));
    }

    #[test]
    fn size_with_no_title() {
        let size = panel_size(Vec2::new(7.0, 17.0), Vec2::ZERO, Vec2::new(30.0, 30.0));
        assert_eq!(size, Vec2::new(37.0, 47.0));
    }

    #[test]
    fn inside_canvas_is_untouched() {
        let pos = Vec2::new(100.0, 100.0);
        assert_eq!(clamp_to_canvas(pos, Vec2::new(200.0, 100.0), CANVAS), pos);
    }

    #[test]
    fn touching_the_edge_is_not_clamped() {
        let pos = Vec2::new(600.0, 500.0);
        assert_eq!(clamp_to_canvas(pos, Vec2::new(200.0, 100.0), CANVAS), pos);
    }

    #[test]
    fn x_overflow_clamps_x_only() {
        let clamped = clamp_to_canvas(Vec2::new(700.0, 100.0), Vec2::new(200.0, 100.0), CANVAS);
        assert_eq!(clamped, Vec2::new(600.0, 100.0));
    }

    #[test]
    fn y_overflow_clamps_y_only() {
        let clamped = clamp_to_canvas(Vec2::new(100.0, 550.0), Vec2::new(200.0, 100.0), CANVAS);
        assert_eq!(clamped, Vec2::new(100.0, 500.0));
    }

    #[test]
    fn negative_positions_are_left_alone() {
        let pos = Vec2::new(-50.0, -20.0);
        assert_eq!(clamp_to_canvas(pos, Vec2::new(200.0, 100.0), CANVAS), pos);
    }

    #[test]
    fn oversized_panel_goes_negative() {
        let clamped = clamp_to_canvas(Vec2::new(10.0, 10.0), Vec2::new(900.0, 100.0), CANVAS);
        assert_eq!(clamped, Vec2::new(-100.0, 10.0));
    }
}
