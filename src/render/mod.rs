//! Text measurement and the render surface the tooltip lives on.

pub mod font;
pub mod measure;
pub mod surface;

pub use font::{load_font_file, FontMeasure};
pub use measure::{line_height, FixedAdvanceMeasure, TextField, TextMeasure, TextStyle};
pub use surface::{Camera, CameraProvider, RenderSurface};
