//! Page-to-pixel coordinate mapping.

use kurbo::{Affine, Point, Size};
use serde::{Deserialize, Serialize};

/// Convert a position in page units to pixel units.
pub fn map_to_pixels(point: Point, scale: f64) -> Point {
    Point::new(point.x * scale, point.y * scale)
}

/// Scale a length (radius, box side) by the same factor as positions.
pub fn scale_length(length: f64, scale: f64) -> f64 {
    length * scale
}

/// Geometry reported by the rendering backend for one surface.
///
/// `scale` converts page units (points) to canvas pixels and is uniform in
/// x and y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderMetadata {
    pub page_width: f64,
    pub page_height: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub scale: f64,
}

impl RenderMetadata {
    /// Metadata for a page drawn at an explicit scale.
    pub fn new(page: Size, scale: f64) -> Self {
        Self {
            page_width: page.width,
            page_height: page.height,
            canvas_width: (page.width * scale).round(),
            canvas_height: (page.height * scale).round(),
            scale,
        }
    }

    /// Fit the page to a target canvas width, keeping the aspect ratio.
    ///
    /// Returns `None` for degenerate pages or targets.
    pub fn fit_width(page: Size, target_width: f64) -> Option<Self> {
        if !(page.width > 0.0 && page.height > 0.0 && target_width > 0.0) {
            return None;
        }
        Some(Self::new(page, target_width / page.width))
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// Page-to-canvas transform.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale)
    }

    /// Map a page position onto this surface.
    pub fn to_pixels(&self, point: Point) -> Point {
        self.transform() * point
    }
}
