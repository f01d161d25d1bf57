//! Hoverable tiles shown by the demo, in world units.

use crate::geometry::{Vec2, Vec3};
use crate::widget::HoverTarget;

/// Edge length of a tile in world units.
pub const TILE_SIZE: f32 = 48.0;

/// Views the demo can switch between.
pub const VIEWS: &[&str] = &["main", "inventory"];

/// A square the cursor can hover, with the tooltip text it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub label: &'static str,
    pub title: Option<&'static str>,
    pub body: &'static str,
    /// Center of the tile.
    pub center: Vec3,
}

impl Tile {
    const fn new(
        label: &'static str,
        title: Option<&'static str>,
        body: &'static str,
        x: f32,
        y: f32,
    ) -> Self {
        Self { label, title, body, center: Vec3::new(x, y, 0.0) }
    }

    /// Whether a world point lies on the tile.
    pub fn contains(&self, point: Vec2) -> bool {
        let half = TILE_SIZE / 2.0;
        (point.x - self.center.x).abs() <= half && (point.y - self.center.y).abs() <= half
    }
}

impl HoverTarget for Tile {
    fn position(&self) -> Vec3 {
        self.center
    }
}

/// Tiles laid out for `view`. Unknown views are empty.
pub fn tiles_for_view(view: &str) -> Vec<Tile> {
    match view {
        "main" => vec![
            Tile::new("Sword", Some("Rusty Sword"), "Damage 3-7\nDurability 12/40", 96.0, 96.0),
            Tile::new("Note", None, "A folded note. No title row.", 256.0, 96.0),
            Tile::new("Blank", None, "", 416.0, 96.0),
            Tile::new("Empty title", Some(""), "The title row is shown but empty.", 576.0, 96.0),
            Tile::new("Corner", Some("Top right"), "Clamped back inside the canvas.", 960.0, 704.0),
            Tile::new("Edge", Some("Top left"), "Only the far edges are clamped.", 32.0, 704.0),
        ],
        "inventory" => (0..6)
            .map(|i| {
                let x = 128.0 + 96.0 * i as f32;
                Tile::new("Slot", Some("Bag slot"), "Empty", x, 320.0)
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Index of the topmost tile under `point`.
pub fn hit_test(tiles: &[Tile], point: Vec2) -> Option<usize> {
    tiles.iter().rposition(|t| t.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_has_tiles() {
        for view in VIEWS {
            assert!(!tiles_for_view(view).is_empty(), "{view} has no tiles");
        }
        assert!(tiles_for_view("nowhere").is_empty());
    }

    #[test]
    fn hit_test_uses_tile_extent() {
        let tiles = tiles_for_view("main");
        assert_eq!(hit_test(&tiles, Vec2::new(96.0, 96.0)), Some(0));
        assert_eq!(hit_test(&tiles, Vec2::new(120.0, 72.0)), Some(0));
        assert_eq!(hit_test(&tiles, Vec2::new(121.0, 96.0)), None);
        assert_eq!(hit_test(&tiles, Vec2::new(256.0, 112.0)), Some(1));
    }

    #[test]
    fn tile_targets_its_center() {
        let tile = &tiles_for_view("main")[0];
        assert_eq!(tile.position(), Vec3::new(96.0, 96.0, 0.0));
    }
}
