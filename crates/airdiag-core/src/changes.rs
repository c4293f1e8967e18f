//! Change records produced by the diagram comparator.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a detected change.
///
/// The comparator emits plain strings. Known values map to named variants;
/// anything else is kept verbatim in [`ChangeKind::Other`] so it can still be
/// styled (via fallback) and listed in the legend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeKind {
    /// Taxiway designator present only in the new diagram.
    Added,
    /// Taxiway designator present only in the old diagram.
    Removed,
    /// Same location, different designator.
    Renamed,
    /// Runway length differs between cycles.
    LengthChanged,
    /// Runway width differs between cycles.
    WidthChanged,
    RunwayAdded,
    RunwayRemoved,
    /// Any category this crate does not know about.
    Other(String),
}

impl ChangeKind {
    /// The wire representation of this category.
    pub fn as_str(&self) -> &str {
        match self {
            ChangeKind::Added => "ADDED",
            ChangeKind::Removed => "REMOVED",
            ChangeKind::Renamed => "RENAMED",
            ChangeKind::LengthChanged => "LENGTH_CHANGED",
            ChangeKind::WidthChanged => "WIDTH_CHANGED",
            ChangeKind::RunwayAdded => "RUNWAY_ADDED",
            ChangeKind::RunwayRemoved => "RUNWAY_REMOVED",
            ChangeKind::Other(raw) => raw,
        }
    }
}

impl From<&str> for ChangeKind {
    fn from(value: &str) -> Self {
        match value {
            "ADDED" => ChangeKind::Added,
            "REMOVED" => ChangeKind::Removed,
            "RENAMED" => ChangeKind::Renamed,
            "LENGTH_CHANGED" => ChangeKind::LengthChanged,
            "WIDTH_CHANGED" => ChangeKind::WidthChanged,
            "RUNWAY_ADDED" => ChangeKind::RunwayAdded,
            "RUNWAY_REMOVED" => ChangeKind::RunwayRemoved,
            other => ChangeKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ChangeKind {
    fn from(value: String) -> Self {
        match ChangeKind::from(value.as_str()) {
            ChangeKind::Other(_) => ChangeKind::Other(value),
            known => known,
        }
    }
}

impl From<ChangeKind> for String {
    fn from(kind: ChangeKind) -> Self {
        match kind {
            ChangeKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for ChangeKind {
    fn default() -> Self {
        ChangeKind::Other(String::new())
    }
}

/// Which of the two compared diagrams is being drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceSide {
    /// The previous cycle.
    Old,
    /// The current cycle.
    #[default]
    New,
}

impl SurfaceSide {
    /// Lowercase name, used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            SurfaceSide::Old => "old",
            SurfaceSide::New => "new",
        }
    }
}

/// Turn a raw coordinate pair into a position, treating `(0, 0)` and missing
/// values as "no known position".
fn known_position(x: Option<f64>, y: Option<f64>) -> Option<Point> {
    let x = x.unwrap_or(0.0);
    let y = y.unwrap_or(0.0);
    if (x == 0.0 && y == 0.0) || !x.is_finite() || !y.is_finite() {
        None
    } else {
        Some(Point::new(x, y))
    }
}

/// A change in taxiway designators (point-style annotation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxiwayChange {
    pub change_type: ChangeKind,
    #[serde(default)]
    pub designator: Option<String>,
    /// Previous designator, only meaningful for renames.
    #[serde(default)]
    pub old_designator: Option<String>,
    /// Position in page units on the single surface this record describes.
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub description: String,
}

impl TaxiwayChange {
    /// Create a change at a page position.
    pub fn new(change_type: impl Into<ChangeKind>, designator: &str, x: f64, y: f64) -> Self {
        Self {
            change_type: change_type.into(),
            designator: Some(designator.to_string()),
            old_designator: None,
            x: Some(x),
            y: Some(y),
            description: String::new(),
        }
    }

    /// Page position of the change, or `None` when the comparator had no location.
    pub fn position(&self) -> Option<Point> {
        known_position(self.x, self.y)
    }
}

/// A change in runway dimensions (box-style annotation).
///
/// Carries both coordinate pairs because the dimension text sits at a
/// different spot on each diagram version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunwayChange {
    pub change_type: ChangeKind,
    pub designator: Option<String>,
    pub old_x: Option<f64>,
    pub old_y: Option<f64>,
    pub new_x: Option<f64>,
    pub new_y: Option<f64>,
    pub old_length: Option<f64>,
    pub new_length: Option<f64>,
    pub old_width: Option<f64>,
    pub new_width: Option<f64>,
    pub description: String,
}

impl RunwayChange {
    /// Create a runway change with no positions or dimensions set.
    pub fn new(change_type: impl Into<ChangeKind>, designator: &str) -> Self {
        Self {
            change_type: change_type.into(),
            designator: Some(designator.to_string()),
            ..Default::default()
        }
    }

    /// Set the dimension text position on the old diagram.
    pub fn with_old_position(mut self, x: f64, y: f64) -> Self {
        self.old_x = Some(x);
        self.old_y = Some(y);
        self
    }

    /// Set the dimension text position on the new diagram.
    pub fn with_new_position(mut self, x: f64, y: f64) -> Self {
        self.new_x = Some(x);
        self.new_y = Some(y);
        self
    }

    /// Set old and new lengths in feet.
    pub fn with_lengths(mut self, old: f64, new: f64) -> Self {
        self.old_length = Some(old);
        self.new_length = Some(new);
        self
    }

    /// Set old and new widths in feet.
    pub fn with_widths(mut self, old: f64, new: f64) -> Self {
        self.old_width = Some(old);
        self.new_width = Some(new);
        self
    }

    /// Page position of the annotation on the given side.
    pub fn position(&self, side: SurfaceSide) -> Option<Point> {
        match side {
            SurfaceSide::Old => known_position(self.old_x, self.old_y),
            SurfaceSide::New => known_position(self.new_x, self.new_y),
        }
    }
}

/// A change in drawn geometry. Reported in text only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryChange {
    #[serde(default)]
    pub change_type: ChangeKind,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub description: String,
}
