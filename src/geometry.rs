//! Small value types for positions and extents.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point or extent (width, height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Alias for `x` when the value is an extent.
    pub fn width(&self) -> f32 {
        self.x
    }

    /// Alias for `y` when the value is an extent.
    pub fn height(&self) -> f32 {
        self.y
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A world-space position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Drop the depth component.
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_offset_arithmetic() {
        let p = Vec3::new(2.0, 3.0, 4.0) + Vec3::new(0.0, 1.0, 0.0) - Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(p, Vec3::new(1.0, 4.0, 4.0));
        assert_eq!(p.xy(), Vec2::new(1.0, 4.0));
    }

    #[test]
    fn vec2_scale_and_extent_accessors() {
        let v = Vec2::new(3.0, 5.0).scale(2.0);
        assert_eq!(v.width(), 6.0);
        assert_eq!(v.height(), 10.0);
    }
}
