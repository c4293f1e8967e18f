//! Page rendering backend.
//!
//! Turns a diagram reference into a displayable bitmap and the geometry the
//! overlay needs to map page coordinates onto it.

use airdiag_core::RenderMetadata;
use airdiag_render::Bitmap;
use image::ImageFormat;
use image::imageops::FilterType;
use kurbo::Size;
use std::fmt;
use std::fs;
use std::future::Future;
use std::io::Cursor;
use std::path::PathBuf;
use std::pin::Pin;
use thiserror::Error;

/// Points per inch in page coordinates.
const POINTS_PER_INCH: f64 = 72.0;

/// Page rendering errors.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Page not found: {0}")]
    NotFound(String),
    #[error("Failed to decode {0}: {1}")]
    Decode(String, String),
    #[error("Invalid page geometry for {0}")]
    InvalidPage(String),
    #[error("Failed to encode page bitmap: {0}")]
    Encode(String),
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Boxed future returned by page renderers.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// One published diagram: an airport in a given AIRAC cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub airport: String,
    pub cycle: String,
}

impl DocumentRef {
    pub fn new(airport: &str, cycle: impl fmt::Display) -> Self {
        Self {
            airport: airport.to_uppercase(),
            cycle: cycle.to_string(),
        }
    }

    /// `SYR_2602`-style stem shared by page images and outputs.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.airport, self.cycle)
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cycle {}", self.airport, self.cycle)
    }
}

/// A rendered page ready to be annotated.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub metadata: RenderMetadata,
    pub bitmap: Bitmap,
}

/// Trait for page rendering backends.
pub trait PageRenderer {
    /// Render a diagram page. Failure means the surface gets a placeholder.
    fn render<'a>(&'a self, document: &'a DocumentRef) -> BoxFuture<'a, BackendResult<RenderedPage>>;
}

/// Serves pages that were rasterized ahead of time at a known DPI.
pub struct ImagePageRenderer {
    pages_dir: PathBuf,
    source_dpi: f64,
    display_width: Option<f64>,
}

impl ImagePageRenderer {
    pub fn new(pages_dir: PathBuf, source_dpi: f64, display_width: Option<f64>) -> Self {
        Self {
            pages_dir,
            source_dpi,
            display_width,
        }
    }

    fn page_path(&self, document: &DocumentRef) -> PathBuf {
        self.pages_dir.join(format!("{}.png", document.file_stem()))
    }

    fn render_sync(&self, document: &DocumentRef) -> BackendResult<RenderedPage> {
        let path = self.page_path(document);
        let bytes = fs::read(&path).map_err(|_| BackendError::NotFound(path.display().to_string()))?;
        let image = image::load_from_memory(&bytes)
            .map_err(|e| BackendError::Decode(path.display().to_string(), e.to_string()))?;

        let page = Size::new(
            image.width() as f64 * POINTS_PER_INCH / self.source_dpi,
            image.height() as f64 * POINTS_PER_INCH / self.source_dpi,
        );
        let target_width = self.display_width.unwrap_or(image.width() as f64);
        let metadata = RenderMetadata::fit_width(page, target_width)
            .ok_or_else(|| BackendError::InvalidPage(document.to_string()))?;

        let (width, height) = (
            (metadata.canvas_width as u32).max(1),
            (metadata.canvas_height as u32).max(1),
        );
        let image = if (width, height) == (image.width(), image.height()) {
            image
        } else {
            image.resize_exact(width, height, FilterType::Triangle)
        };

        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| BackendError::Encode(e.to_string()))?;

        log::debug!(
            "Rendered {}: page {:.0}x{:.0} pt, canvas {}x{} px, scale {:.3}",
            document,
            page.width,
            page.height,
            width,
            height,
            metadata.scale
        );
        Ok(RenderedPage {
            metadata,
            bitmap: Bitmap { png, width, height },
        })
    }
}

impl PageRenderer for ImagePageRenderer {
    fn render<'a>(&'a self, document: &'a DocumentRef) -> BoxFuture<'a, BackendResult<RenderedPage>> {
        Box::pin(async move { self.render_sync(document) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_page(dir: &std::path::Path, stem: &str, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        img.save(dir.join(format!("{stem}.png"))).unwrap();
    }

    #[test]
    fn test_file_stem() {
        let doc = DocumentRef::new("syr", 2602);
        assert_eq!(doc.file_stem(), "SYR_2602");
    }

    #[test]
    fn test_renders_at_display_width() {
        let dir = tempfile::tempdir().unwrap();
        // 300x400 px at 150 dpi is a 144x192 pt page.
        write_page(dir.path(), "SYR_2602", 300, 400);
        let backend = ImagePageRenderer::new(dir.path().to_path_buf(), 150.0, Some(72.0));

        let page = pollster::block_on(backend.render(&DocumentRef::new("SYR", "2602"))).unwrap();

        assert!((page.metadata.page_width - 144.0).abs() < 1e-10);
        assert!((page.metadata.scale - 0.5).abs() < 1e-10);
        assert_eq!((page.bitmap.width, page.bitmap.height), (72, 96));
        let decoded = image::load_from_memory(&page.bitmap.png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (72, 96));
    }

    #[test]
    fn test_native_width_keeps_pixels() {
        let dir = tempfile::tempdir().unwrap();
        write_page(dir.path(), "SYR_2601", 150, 150);
        let backend = ImagePageRenderer::new(dir.path().to_path_buf(), 72.0, None);

        let page = pollster::block_on(backend.render(&DocumentRef::new("SYR", "2601"))).unwrap();

        assert!((page.metadata.scale - 1.0).abs() < 1e-10);
        assert_eq!((page.bitmap.width, page.bitmap.height), (150, 150));
    }

    #[test]
    fn test_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let backend = ImagePageRenderer::new(dir.path().to_path_buf(), 150.0, None);
        let err = pollster::block_on(backend.render(&DocumentRef::new("JFK", "2602"))).unwrap_err();
        assert!(matches!(err, BackendError::NotFound(_)));
    }

    #[test]
    fn test_undecodable_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ORD_2602.png"), b"not a png").unwrap();
        let backend = ImagePageRenderer::new(dir.path().to_path_buf(), 150.0, None);
        let err = pollster::block_on(backend.render(&DocumentRef::new("ORD", "2602"))).unwrap_err();
        assert!(matches!(err, BackendError::Decode(..)));
    }
}
