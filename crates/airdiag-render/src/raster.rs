//! PNG output through resvg.

use crate::scene::Scene;
use crate::surface::{RenderError, RenderResult};
use crate::svg::to_svg;

/// Rasterizes scenes. Holds the font database so system fonts are loaded
/// once per process rather than once per image.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Rasterizer {
    /// Create a rasterizer. Without system fonts, text elements are skipped.
    pub fn new(load_system_fonts: bool) -> Self {
        let mut options = usvg::Options::default();
        if load_system_fonts {
            options.fontdb_mut().load_system_fonts();
            log::debug!("Loaded {} font faces", options.fontdb.len());
        }
        options.font_family = "Arial".to_string();
        Self { options }
    }

    /// Render an SVG document to PNG bytes at its intrinsic size.
    pub fn svg_to_png(&self, svg: &str) -> RenderResult<Vec<u8>> {
        let tree = usvg::Tree::from_str(svg, &self.options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;
        let size = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
            .ok_or(RenderError::PixmapAlloc(size.width(), size.height()))?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
        pixmap
            .encode_png()
            .map_err(|e| RenderError::PngEncode(e.to_string()))
    }

    /// Render a scene (page bitmap plus overlay) to PNG bytes.
    pub fn scene_to_png(&self, scene: &Scene) -> RenderResult<Vec<u8>> {
        self.svg_to_png(&to_svg(scene))
    }
}
