//! Drawing surface abstraction.

use kurbo::{Circle, Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to parse SVG: {0}")]
    SvgParse(String),
    #[error("Failed to allocate a {0}x{1} pixmap")]
    PixmapAlloc(u32, u32),
    #[error("Failed to encode PNG: {0}")]
    PngEncode(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Font settings for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f64,
    pub bold: bool,
}

impl TextStyle {
    /// Regular weight at the given size.
    pub fn regular(size: f64) -> Self {
        Self { size, bold: false }
    }

    /// Bold weight at the given size.
    pub fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }
}

/// Measures rendered text width.
pub trait TextMeasurer {
    fn measure_width(&self, text: &str, style: TextStyle) -> f64;
}

/// Font-independent measurer: character count × size × a per-weight factor.
///
/// Label backgrounds are sized from this, so the layout is identical on every
/// machine regardless of installed fonts.
#[derive(Debug, Clone, Copy)]
pub struct DeterministicTextMeasurer {
    pub regular_width_factor: f64,
    pub bold_width_factor: f64,
}

impl Default for DeterministicTextMeasurer {
    fn default() -> Self {
        Self {
            regular_width_factor: 0.55,
            bold_width_factor: 0.6,
        }
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure_width(&self, text: &str, style: TextStyle) -> f64 {
        let factor = if style.bold {
            self.bold_width_factor
        } else {
            self.regular_width_factor
        };
        text.chars().count() as f64 * style.size.max(1.0) * factor
    }
}

/// A pixel-addressable target the overlay draws on.
///
/// Coordinates are canvas pixels with the origin at the top-left.
pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> Size;

    fn fill_circle(&mut self, circle: Circle, color: Color);

    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Draw text horizontally centered on `anchor.x` with its baseline at `anchor.y`.
    fn fill_text(&mut self, text: &str, anchor: Point, style: TextStyle, color: Color);

    /// Width the text will occupy when drawn with `style`.
    fn measure_text(&self, text: &str, style: TextStyle) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_is_wider() {
        let m = DeterministicTextMeasurer::default();
        let regular = m.measure_width("7200→7499 ft", TextStyle::regular(10.0));
        let bold = m.measure_width("7200→7499 ft", TextStyle::bold(10.0));
        assert!(bold > regular);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let m = DeterministicTextMeasurer::default();
        // The arrow is three bytes in UTF-8 but one character.
        let arrow = m.measure_width("→", TextStyle::bold(10.0));
        assert!((arrow - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_width_scales_with_size() {
        let m = DeterministicTextMeasurer::default();
        let small = m.measure_width("Y", TextStyle::bold(6.0));
        let large = m.measure_width("Y", TextStyle::bold(12.0));
        assert!((large - 2.0 * small).abs() < 1e-10);
    }
}
