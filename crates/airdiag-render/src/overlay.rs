//! Overlay composition for one rendered surface.

use crate::legend::draw_legend;
use crate::marker::{draw_box_marker, draw_point_marker};
use crate::surface::Surface;
use airdiag_core::changes::{RunwayChange, SurfaceSide, TaxiwayChange};
use airdiag_core::label::{format_runway_label, format_taxiway_label};
use airdiag_core::mapping::RenderMetadata;
use airdiag_core::style::{MarkerFamily, resolve_style};

/// What one overlay pass drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayStats {
    /// Markers drawn.
    pub drawn: usize,
    /// Records skipped for lack of a position on this side.
    pub skipped: usize,
    /// Legend entries (0 when no legend was drawn).
    pub legend_entries: usize,
}

/// Draw every change that has a position on `side`, then the legend.
///
/// `metadata` is `None` when the surface failed to render; nothing is drawn
/// in that case. Markers are drawn in list order, taxiways first. The legend
/// lists every category in the inputs (positioned or not) but only appears
/// once at least one marker was drawn.
pub fn draw_highlights<S: Surface + ?Sized>(
    surface: &mut S,
    taxiways: &[TaxiwayChange],
    metadata: Option<&RenderMetadata>,
    side: SurfaceSide,
    runways: &[RunwayChange],
) -> OverlayStats {
    let Some(metadata) = metadata else {
        log::debug!("No render metadata for {} surface, skipping overlay", side.name());
        return OverlayStats::default();
    };
    let mut stats = OverlayStats::default();

    for change in taxiways {
        let Some(position) = change.position() else {
            stats.skipped += 1;
            continue;
        };
        let style = resolve_style(&change.change_type, MarkerFamily::Point);
        let label = format_taxiway_label(change);
        draw_point_marker(surface, metadata.to_pixels(position), &style, &label, metadata.scale);
        stats.drawn += 1;
    }

    for change in runways {
        let Some(position) = change.position(side) else {
            stats.skipped += 1;
            continue;
        };
        let style = resolve_style(&change.change_type, MarkerFamily::Box);
        let label = format_runway_label(change, side);
        draw_box_marker(surface, metadata.to_pixels(position), &style, &label, metadata.scale);
        stats.drawn += 1;
    }

    if stats.drawn > 0 {
        stats.legend_entries = draw_legend(surface, taxiways, runways);
    }

    log::debug!(
        "{} surface: {} markers drawn, {} skipped, {} legend entries",
        side.name(),
        stats.drawn,
        stats.skipped,
        stats.legend_entries
    );
    stats
}
