//! Category colors for change markers.
//!
//! Colors come from the Tailwind 600 shades so the overlay matches the rest
//! of the change-tracker UI.

use crate::changes::ChangeKind;
use peniko::Color;

/// Alpha applied to the stroke color to produce the marker fill.
pub const FILL_ALPHA: u8 = 77;

/// Stroke and fill color for one change category.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Border and label color.
    pub stroke: Color,
    /// Translucent marker body.
    pub fill: Color,
}

impl Style {
    /// Build a style from an opaque RGB stroke; the fill is the same hue at [`FILL_ALPHA`].
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            stroke: Color::from_rgba8(r, g, b, 255),
            fill: Color::from_rgba8(r, g, b, FILL_ALPHA),
        }
    }
}

/// Green 600.
pub const ADDED: Style = Style::from_rgb(22, 163, 74);
/// Red 600.
pub const REMOVED: Style = Style::from_rgb(220, 38, 38);
/// Amber 600.
pub const RENAMED: Style = Style::from_rgb(217, 119, 6);
/// Purple 600.
pub const LENGTH_CHANGED: Style = Style::from_rgb(147, 51, 234);
/// Blue 600.
pub const WIDTH_CHANGED: Style = Style::from_rgb(37, 99, 235);

/// Marker family being drawn. Each family falls back to a different style
/// for categories outside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerFamily {
    /// Circle markers (taxiway changes, legend swatches). Falls back to ADDED.
    Point,
    /// Box markers (runway dimensions). Falls back to LENGTH_CHANGED.
    Box,
}

/// Look up a category in the fixed table.
pub fn lookup(kind: &ChangeKind) -> Option<Style> {
    match kind {
        ChangeKind::Added => Some(ADDED),
        ChangeKind::Removed => Some(REMOVED),
        ChangeKind::Renamed => Some(RENAMED),
        ChangeKind::LengthChanged => Some(LENGTH_CHANGED),
        ChangeKind::WidthChanged => Some(WIDTH_CHANGED),
        _ => None,
    }
}

/// Resolve the style for a category. Total: unknown categories get the
/// family's fallback.
pub fn resolve_style(kind: &ChangeKind, family: MarkerFamily) -> Style {
    lookup(kind).unwrap_or(match family {
        MarkerFamily::Point => ADDED,
        MarkerFamily::Box => LENGTH_CHANGED,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(color: Color) -> [u8; 4] {
        let c = color.to_rgba8();
        [c.r, c.g, c.b, c.a]
    }

    #[test]
    fn test_added_stroke_is_green_600() {
        let style = resolve_style(&ChangeKind::Added, MarkerFamily::Point);
        assert_eq!(rgba(style.stroke), [0x16, 0xa3, 0x4a, 255]);
    }

    #[test]
    fn test_fill_is_translucent_stroke() {
        let style = resolve_style(&ChangeKind::Removed, MarkerFamily::Point);
        let stroke = rgba(style.stroke);
        let fill = rgba(style.fill);
        assert_eq!(stroke[..3], fill[..3]);
        assert_eq!(fill[3], FILL_ALPHA);
    }

    #[test]
    fn test_point_fallback_is_added() {
        for raw in ["RUNWAY_ADDED", "GEOMETRY_ADDED", ""] {
            let style = resolve_style(&ChangeKind::from(raw), MarkerFamily::Point);
            assert_eq!(rgba(style.stroke), rgba(ADDED.stroke));
        }
    }

    #[test]
    fn test_box_fallback_is_length_changed() {
        for raw in ["RUNWAY_REMOVED", "SOMETHING_NEW"] {
            let style = resolve_style(&ChangeKind::from(raw), MarkerFamily::Box);
            assert_eq!(rgba(style.stroke), rgba(LENGTH_CHANGED.stroke));
        }
    }

    #[test]
    fn test_table_ignores_family() {
        let point = resolve_style(&ChangeKind::WidthChanged, MarkerFamily::Point);
        let boxed = resolve_style(&ChangeKind::WidthChanged, MarkerFamily::Box);
        assert_eq!(rgba(point.stroke), rgba(boxed.stroke));
        assert_eq!(rgba(point.fill), rgba(WIDTH_CHANGED.fill));
    }
}
