//! AirDiag Render Library
//!
//! Draws change annotations onto rendered diagram surfaces: circle and box
//! markers with labels, the category legend and the render-failure
//! placeholder. Drawing goes through the [`Surface`] trait; [`Scene`]
//! records it and can be written out as SVG or (with the `raster` feature)
//! PNG.

pub mod legend;
pub mod marker;
pub mod overlay;
pub mod placeholder;
mod scene;
mod surface;
pub mod svg;

#[cfg(feature = "raster")]
mod raster;

pub use legend::draw_legend;
pub use marker::{draw_box_marker, draw_point_marker};
pub use overlay::{OverlayStats, draw_highlights};
pub use placeholder::{draw_placeholder, placeholder_scene};
pub use scene::{Bitmap, DrawCommand, Rgba, Scene};
pub use surface::{
    DeterministicTextMeasurer, RenderError, RenderResult, Surface, TextMeasurer, TextStyle,
};
pub use svg::to_svg;

#[cfg(feature = "raster")]
pub use raster::Rasterizer;
