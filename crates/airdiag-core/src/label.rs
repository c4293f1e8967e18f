//! Text shown next to markers and in the legend.

use crate::changes::{ChangeKind, RunwayChange, SurfaceSide, TaxiwayChange};

/// Placeholder for a dimension the comparator did not report.
pub const MISSING_VALUE: &str = "?";

/// Format a number the way the chart prints it: integral values without a
/// fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn format_dimension(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| MISSING_VALUE.to_string())
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Label for a taxiway marker: the designator, else the raw category.
pub fn format_taxiway_label(change: &TaxiwayChange) -> String {
    non_empty(change.designator.as_ref())
        .unwrap_or(change.change_type.as_str())
        .to_string()
}

/// Label for a runway dimension marker on the given side.
pub fn format_runway_label(change: &RunwayChange, side: SurfaceSide) -> String {
    match (&change.change_type, side) {
        (ChangeKind::LengthChanged, SurfaceSide::Old) => {
            format!("{} ft", format_dimension(change.old_length))
        }
        (ChangeKind::LengthChanged, SurfaceSide::New) => format!(
            "{}→{} ft",
            format_dimension(change.old_length),
            format_dimension(change.new_length)
        ),
        (ChangeKind::WidthChanged, SurfaceSide::Old) => {
            format!("{} ft wide", format_dimension(change.old_width))
        }
        (ChangeKind::WidthChanged, SurfaceSide::New) => format!(
            "{}→{} ft",
            format_dimension(change.old_width),
            format_dimension(change.new_width)
        ),
        _ => non_empty(change.designator.as_ref())
            .unwrap_or("RWY")
            .to_string(),
    }
}

/// Human-readable legend text for a category.
pub fn legend_label(kind: &ChangeKind) -> &str {
    match kind {
        ChangeKind::LengthChanged => "RWY LENGTH",
        ChangeKind::WidthChanged => "RWY WIDTH",
        ChangeKind::RunwayAdded => "RWY ADDED",
        ChangeKind::RunwayRemoved => "RWY REMOVED",
        other => other.as_str(),
    }
}
