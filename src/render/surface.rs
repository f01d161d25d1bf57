//! Render surface the tooltip is drawn on, and its camera binding.

use crate::geometry::{Vec2, Vec3};

/// A camera the surface renders through.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub id: u64,
    pub label: String,
}

impl Camera {
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}

/// Supplies the application's main camera, once one exists.
pub trait CameraProvider {
    fn main_camera(&self) -> Option<Camera>;
}

impl CameraProvider for Option<Camera> {
    fn main_camera(&self) -> Option<Camera> {
        self.clone()
    }
}

impl CameraProvider for Camera {
    fn main_camera(&self) -> Option<Camera> {
        Some(self.clone())
    }
}

/// The canvas that contains the tooltip panel.
///
/// Positions inside the canvas are anchored at its bottom-left corner with y
/// growing upward, so a panel at `(x, y)` with size `(w, h)` covers
/// `[x, x + w] x [y, y + h]`. World positions map onto the canvas through
/// `origin` and `pixels_per_unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSurface {
    camera: Option<Camera>,
    size: Vec2,
    /// World point that lands on the canvas anchor.
    origin: Vec2,
    pixels_per_unit: f32,
}

impl RenderSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            camera: None,
            size,
            origin: Vec2::ZERO,
            pixels_per_unit: 1.0,
        }
    }

    pub fn with_transform(mut self, origin: Vec2, pixels_per_unit: f32) -> Self {
        self.origin = origin;
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Bind the provider's main camera if no camera is bound yet.
    ///
    /// Returns true when a camera was bound by this call.
    pub fn bind_camera_if_missing(&mut self, provider: &dyn CameraProvider) -> bool {
        if self.camera.is_some() {
            return false;
        }
        match provider.main_camera() {
            Some(camera) => {
                tracing::trace!("Binding tooltip surface to camera {} ({})", camera.id, camera.label);
                self.camera = Some(camera);
                true
            }
            None => false,
        }
    }

    /// Canvas-local position of a world point.
    pub fn to_anchored(&self, world: Vec3) -> Vec2 {
        (world.xy() - self.origin).scale(self.pixels_per_unit)
    }

    /// World position of a canvas-local point, keeping depth `z`.
    pub fn to_world(&self, anchored: Vec2, z: f32) -> Vec3 {
        let xy = Vec2::new(
            anchored.x / self.pixels_per_unit,
            anchored.y / self.pixels_per_unit,
        ) + self.origin;
        Vec3::new(xy.x, xy.y, z)
    }
}
