//! Legend panel in the top-left corner of a surface.

use crate::surface::{Surface, TextStyle};
use airdiag_core::changes::{RunwayChange, TaxiwayChange};
use airdiag_core::label::legend_label;
use airdiag_core::legend::legend_categories;
use airdiag_core::style::{MarkerFamily, resolve_style};
use kurbo::{Circle, Point, Rect};
use peniko::Color;

/// Panel origin, in pixels from the top-left corner.
pub const LEGEND_ORIGIN: Point = Point::new(10.0, 10.0);
pub const LEGEND_WIDTH: f64 = 140.0;
/// Vertical distance between entries.
pub const ENTRY_STEP: f64 = 20.0;
/// Extra height below the last entry.
pub const PANEL_PADDING: f64 = 10.0;
pub const SWATCH_RADIUS: f64 = 6.0;
pub const LEGEND_FONT_SIZE: f64 = 11.0;

const PANEL_FILL: Color = Color::from_rgba8(255, 255, 255, 230);
const PANEL_BORDER: Color = Color::from_rgba8(204, 204, 204, 255);
const TEXT_COLOR: Color = Color::from_rgba8(51, 51, 51, 255);

/// Panel rectangle for `count` entries.
pub fn legend_rect(count: usize) -> Rect {
    Rect::new(
        LEGEND_ORIGIN.x,
        LEGEND_ORIGIN.y,
        LEGEND_ORIGIN.x + LEGEND_WIDTH,
        LEGEND_ORIGIN.y + count as f64 * ENTRY_STEP + PANEL_PADDING,
    )
}

/// Draw the legend for the categories present in both lists.
///
/// Returns the number of entries drawn; nothing is drawn when both lists
/// are empty.
pub fn draw_legend<S: Surface + ?Sized>(
    surface: &mut S,
    taxiways: &[TaxiwayChange],
    runways: &[RunwayChange],
) -> usize {
    let categories = legend_categories(taxiways, runways);
    if categories.is_empty() {
        return 0;
    }

    let panel = legend_rect(categories.len());
    surface.fill_rect(panel, PANEL_FILL);
    surface.stroke_rect(panel, PANEL_BORDER, 1.0);

    let font = TextStyle::regular(LEGEND_FONT_SIZE);
    for (i, kind) in categories.iter().enumerate() {
        let row_center = panel.y0 + PANEL_PADDING / 2.0 + ENTRY_STEP * (i as f64 + 0.5);
        let style = resolve_style(kind, MarkerFamily::Point);
        let swatch = Circle::new((panel.x0 + 15.0, row_center), SWATCH_RADIUS);
        surface.fill_circle(swatch, style.fill);
        surface.stroke_circle(swatch, style.stroke, 2.0);

        let text = legend_label(kind);
        let text_x = panel.x0 + 28.0 + surface.measure_text(text, font) / 2.0;
        surface.fill_text(
            text,
            Point::new(text_x, row_center + LEGEND_FONT_SIZE / 2.0 - 1.0),
            font,
            TEXT_COLOR,
        );
    }
    categories.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawCommand, Rgba, Scene};
    use airdiag_core::style::ADDED;
    use kurbo::Size;

    fn scene() -> Scene {
        Scene::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn test_empty_lists_draw_nothing() {
        let mut scene = scene();
        assert_eq!(draw_legend(&mut scene, &[], &[]), 0);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        let mut scene = scene();
        let taxiways = vec![
            TaxiwayChange::new("ADDED", "A", 1.0, 1.0),
            TaxiwayChange::new("REMOVED", "B", 1.0, 1.0),
            TaxiwayChange::new("ADDED", "C", 1.0, 1.0),
        ];
        assert_eq!(draw_legend(&mut scene, &taxiways, &[]), 2);
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["ADDED", "REMOVED"]);
    }

    #[test]
    fn test_panel_height_tracks_entry_count() {
        let mut scene = scene();
        let runways = vec![
            RunwayChange::new("LENGTH_CHANGED", "10/28"),
            RunwayChange::new("WIDTH_CHANGED", "10/28"),
            RunwayChange::new("RUNWAY_ADDED", "4/22"),
        ];
        draw_legend(&mut scene, &[], &runways);
        match &scene.commands()[0] {
            DrawCommand::FillRect { rect, .. } => {
                assert_eq!(*rect, Rect::new(10.0, 10.0, 150.0, 80.0));
            }
            other => panic!("expected panel, got {other:?}"),
        }
        assert_eq!(
            scene.texts().collect::<Vec<_>>(),
            vec!["RWY LENGTH", "RWY WIDTH", "RWY ADDED"]
        );
    }

    #[test]
    fn test_runway_added_swatch_uses_point_fallback() {
        let mut scene = scene();
        draw_legend(&mut scene, &[], &[RunwayChange::new("RUNWAY_ADDED", "4/22")]);
        let (_, color) = scene.filled_circles().next().unwrap();
        assert_eq!(*color, Rgba::from(ADDED.fill));
    }

    #[test]
    fn test_entries_stay_inside_panel() {
        let mut scene = scene();
        let taxiways = vec![
            TaxiwayChange::new("ADDED", "A", 1.0, 1.0),
            TaxiwayChange::new("REMOVED", "B", 1.0, 1.0),
            TaxiwayChange::new("RENAMED", "C", 1.0, 1.0),
        ];
        draw_legend(&mut scene, &taxiways, &[]);
        let panel = legend_rect(3);
        for (circle, _) in scene.filled_circles() {
            assert!(panel.contains(Point::new(circle.center.x, circle.center.y - circle.radius)));
            assert!(panel.contains(Point::new(circle.center.x, circle.center.y + circle.radius)));
        }
    }
}
