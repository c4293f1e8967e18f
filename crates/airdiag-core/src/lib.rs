//! AirDiag Core Library
//!
//! Data model and pure logic for annotating airport diagram changes:
//! change records, page-to-pixel mapping, category styles, marker labels
//! and legend entries. Nothing in here draws.

pub mod api;
pub mod changes;
pub mod label;
pub mod legend;
pub mod mapping;
pub mod style;

pub use api::{
    Airport, AirportList, ApiResponse, ComparisonResult, ComparisonSummary, CycleId, CycleInfo,
    HistoricalLookup, ModelError, ModelResult, load_response, parse_response,
};
pub use changes::{ChangeKind, GeometryChange, RunwayChange, SurfaceSide, TaxiwayChange};
pub use label::{format_number, format_runway_label, format_taxiway_label, legend_label};
pub use legend::legend_categories;
pub use mapping::{RenderMetadata, map_to_pixels, scale_length};
pub use style::{MarkerFamily, Style, resolve_style};
