//! Change markers: a shape at the change position plus a label above it.

use crate::surface::{Surface, TextStyle};
use airdiag_core::mapping::scale_length;
use airdiag_core::style::Style;
use kurbo::{Circle, Point, Rect};
use peniko::Color;

/// Circle radius at scale 1.
pub const POINT_RADIUS: f64 = 15.0;
/// Box size at scale 1.
pub const BOX_WIDTH: f64 = 80.0;
pub const BOX_HEIGHT: f64 = 20.0;
/// Marker border width in pixels. Not scaled.
pub const BORDER_WIDTH: f64 = 3.0;
/// Gap between a marker's edge and its label baseline.
pub const LABEL_GAP: f64 = 5.0;
/// Horizontal padding added to the measured label width.
pub const LABEL_PADDING: f64 = 6.0;
pub const POINT_FONT_SIZE: f64 = 12.0;
pub const BOX_FONT_SIZE: f64 = 10.0;
/// Label background height for box markers. Not scaled.
pub const BOX_LABEL_HEIGHT: f64 = 12.0;

const LABEL_BACKGROUND: Color = Color::from_rgba8(255, 255, 255, 255);

/// Draw `text` centered on `center_x` with its baseline at `baseline`, over a
/// white backing rectangle so it stays readable over chart ink.
fn draw_label<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    center_x: f64,
    baseline: f64,
    font: TextStyle,
    background_height: f64,
    color: Color,
) {
    let width = surface.measure_text(text, font) + LABEL_PADDING;
    let top = baseline - font.size;
    let background = Rect::new(
        center_x - width / 2.0,
        top,
        center_x + width / 2.0,
        top + background_height,
    );
    surface.fill_rect(background, LABEL_BACKGROUND);
    surface.fill_text(text, Point::new(center_x, baseline), font, color);
}

/// Circle marker for point-like changes (taxiway designators).
pub fn draw_point_marker<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    style: &Style,
    label: &str,
    scale: f64,
) {
    let radius = scale_length(POINT_RADIUS, scale);
    let circle = Circle::new(center, radius);
    surface.fill_circle(circle, style.fill);
    surface.stroke_circle(circle, style.stroke, BORDER_WIDTH);

    let font = TextStyle::bold(scale_length(POINT_FONT_SIZE, scale));
    draw_label(
        surface,
        label,
        center.x,
        center.y - radius - LABEL_GAP,
        font,
        font.size + 4.0,
        style.stroke,
    );
}

/// Box marker for dimension changes (runway length/width text).
pub fn draw_box_marker<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    style: &Style,
    label: &str,
    scale: f64,
) {
    let width = scale_length(BOX_WIDTH, scale);
    let height = scale_length(BOX_HEIGHT, scale);
    let rect = Rect::from_center_size(center, (width, height));
    surface.fill_rect(rect, style.fill);
    surface.stroke_rect(rect, style.stroke, BORDER_WIDTH);

    let font = TextStyle::bold(scale_length(BOX_FONT_SIZE, scale));
    draw_label(
        surface,
        label,
        center.x,
        center.y - height / 2.0 - LABEL_GAP,
        font,
        BOX_LABEL_HEIGHT,
        style.stroke,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawCommand, Rgba, Scene};
    use airdiag_core::style::{ADDED, WIDTH_CHANGED};
    use kurbo::Size;

    fn scene() -> Scene {
        Scene::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn test_point_marker_commands() {
        let mut scene = scene();
        draw_point_marker(&mut scene, Point::new(60.0, 40.0), &ADDED, "Y", 0.5);

        let cmds = scene.commands();
        assert_eq!(cmds.len(), 4);
        match &cmds[0] {
            DrawCommand::FillCircle { circle, color } => {
                assert!((circle.radius - 7.5).abs() < f64::EPSILON);
                assert_eq!(circle.center, Point::new(60.0, 40.0));
                assert_eq!(*color, Rgba::from(ADDED.fill));
            }
            other => panic!("expected fill circle, got {other:?}"),
        }
        match &cmds[1] {
            DrawCommand::StrokeCircle { color, width, .. } => {
                assert_eq!(*color, Rgba::new(0x16, 0xa3, 0x4a, 255));
                assert!((width - BORDER_WIDTH).abs() < f64::EPSILON);
            }
            other => panic!("expected stroke circle, got {other:?}"),
        }
        match &cmds[3] {
            DrawCommand::Text { text, anchor, style, .. } => {
                assert_eq!(text, "Y");
                assert!((anchor.x - 60.0).abs() < f64::EPSILON);
                // radius 7.5 + gap 5 above the center
                assert!((anchor.y - 27.5).abs() < f64::EPSILON);
                assert!(style.bold);
                assert!((style.size - 6.0).abs() < f64::EPSILON);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_label_background_fits_text() {
        let mut scene = scene();
        draw_point_marker(&mut scene, Point::new(100.0, 100.0), &ADDED, "AB", 1.0);
        let text_width = scene.measure_text("AB", TextStyle::bold(12.0));
        match &scene.commands()[2] {
            DrawCommand::FillRect { rect, color } => {
                assert!((rect.width() - (text_width + LABEL_PADDING)).abs() < 1e-10);
                assert!((rect.center().x - 100.0).abs() < 1e-10);
                assert_eq!(*color, Rgba::new(255, 255, 255, 255));
                // Background covers the baseline.
                assert!(rect.y1 > 100.0 - 15.0 - LABEL_GAP);
            }
            other => panic!("expected label background, got {other:?}"),
        }
    }

    #[test]
    fn test_box_marker_geometry() {
        let mut scene = scene();
        draw_box_marker(&mut scene, Point::new(205.0, 305.0), &WIDTH_CHANGED, "150→200 ft", 1.0);
        match &scene.commands()[0] {
            DrawCommand::FillRect { rect, .. } => {
                assert_eq!(*rect, Rect::new(165.0, 295.0, 245.0, 315.0));
            }
            other => panic!("expected box, got {other:?}"),
        }
        match scene.commands().last() {
            Some(DrawCommand::Text { text, anchor, style, .. }) => {
                assert_eq!(text, "150→200 ft");
                assert!((anchor.y - 290.0).abs() < f64::EPSILON);
                assert!((style.size - 10.0).abs() < f64::EPSILON);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_box_label_background_height_is_fixed() {
        for scale in [0.5, 1.0, 2.5] {
            let mut scene = scene();
            draw_box_marker(&mut scene, Point::new(300.0, 300.0), &WIDTH_CHANGED, "150 ft wide", scale);
            let DrawCommand::FillRect { rect, .. } = &scene.commands()[2] else {
                panic!("expected label background");
            };
            assert!((rect.height() - BOX_LABEL_HEIGHT).abs() < 1e-10);
        }
    }

    #[test]
    fn test_marker_size_is_linear_in_scale() {
        for scale in [0.5, 1.0, 2.0, 3.5] {
            let mut scene = scene();
            draw_box_marker(&mut scene, Point::new(300.0, 300.0), &WIDTH_CHANGED, "x", scale);
            draw_point_marker(&mut scene, Point::new(300.0, 300.0), &ADDED, "x", scale);
            let DrawCommand::FillRect { rect, .. } = &scene.commands()[0] else {
                panic!("expected box first");
            };
            assert!((rect.width() - 80.0 * scale).abs() < 1e-10);
            assert!((rect.height() - 20.0 * scale).abs() < 1e-10);
            let (circle, _) = scene.filled_circles().next().unwrap();
            assert!((circle.radius - 15.0 * scale).abs() < 1e-10);
        }
    }
}
