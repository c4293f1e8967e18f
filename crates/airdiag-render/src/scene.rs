//! Recording surface.
//!
//! A [`Scene`] keeps the ordered list of draw calls made on it. It is the
//! surface every overlay is composed on; the SVG and PNG writers replay it.

use crate::surface::{DeterministicTextMeasurer, Surface, TextMeasurer, TextStyle};
use kurbo::{Circle, Point, Rect, Size};
use peniko::Color;

/// Color captured in a draw command (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        circle: Circle,
        color: Rgba,
    },
    StrokeCircle {
        circle: Circle,
        color: Rgba,
        width: f64,
    },
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    StrokeRect {
        rect: Rect,
        color: Rgba,
        width: f64,
    },
    Text {
        text: String,
        anchor: Point,
        style: TextStyle,
        color: Rgba,
    },
}

/// A page bitmap drawn underneath the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// PNG-encoded pixels.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Ordered draw commands over an optional page bitmap.
#[derive(Debug, Clone)]
pub struct Scene {
    size: Size,
    background: Option<Bitmap>,
    commands: Vec<DrawCommand>,
    measurer: DeterministicTextMeasurer,
}

impl Scene {
    /// Create an empty scene of the given pixel size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
            commands: Vec::new(),
            measurer: DeterministicTextMeasurer::default(),
        }
    }

    /// Set the page bitmap, stretched to the scene size when written out.
    pub fn with_background(mut self, bitmap: Bitmap) -> Self {
        self.background = Some(bitmap);
        self
    }

    pub fn background(&self) -> Option<&Bitmap> {
        self.background.as_ref()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// True when nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all draw commands, keeping size and background.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Circles drawn as filled markers or swatches.
    pub fn filled_circles(&self) -> impl Iterator<Item = (&Circle, &Rgba)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle { circle, color } => Some((circle, color)),
            _ => None,
        })
    }

    /// Strings drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for Scene {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            circle,
            color: color.into(),
        });
    }

    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            circle,
            color: color.into(),
            width,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.into(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color: color.into(),
            width,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: TextStyle, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            style,
            color: color.into(),
        });
    }

    fn measure_text(&self, text: &str, style: TextStyle) -> f64 {
        self.measurer.measure_width(text, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_is_empty() {
        let scene = Scene::new(Size::new(800.0, 600.0));
        assert!(scene.is_empty());
        assert!(scene.background().is_none());
    }

    #[test]
    fn test_records_in_order() {
        let mut scene = Scene::new(Size::new(100.0, 100.0));
        scene.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::from_rgba8(255, 255, 255, 255));
        scene.fill_text("A", Point::new(5.0, 5.0), TextStyle::bold(12.0), Color::from_rgba8(0, 0, 0, 255));
        assert_eq!(scene.commands().len(), 2);
        assert!(matches!(scene.commands()[0], DrawCommand::FillRect { .. }));
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_clear_keeps_background() {
        let bitmap = Bitmap {
            png: vec![1, 2, 3],
            width: 1,
            height: 1,
        };
        let mut scene = Scene::new(Size::new(1.0, 1.0)).with_background(bitmap);
        scene.fill_circle(Circle::new((0.5, 0.5), 0.5), Color::from_rgba8(0, 0, 0, 255));
        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.background().is_some());
    }

    #[test]
    fn test_color_roundtrip() {
        let rgba = Rgba::from(Color::from_rgba8(22, 163, 74, 77));
        assert_eq!(rgba, Rgba::new(22, 163, 74, 77));
        assert!((rgba.opacity() - 77.0 / 255.0).abs() < 1e-10);
    }
}
