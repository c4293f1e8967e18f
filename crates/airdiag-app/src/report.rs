//! Plain-text reports printed alongside the annotated diagrams.

use airdiag_core::{AirportList, ComparisonResult, CycleInfo, HistoricalLookup};
use std::fmt::Write as _;

/// Summary of a comparison plus one line per change.
pub fn comparison_report(result: &ComparisonResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: cycle {} -> {}",
        result.airport_code, result.old_cycle, result.new_cycle
    );
    if result.test_mode {
        let description = result
            .test_description
            .as_deref()
            .unwrap_or("synthetic test data");
        let _ = writeln!(out, "(test mode: {description})");
    }
    if result.is_unchanged() {
        out.push_str("No changes detected.\n");
        return out;
    }

    let s = &result.summary;
    let _ = writeln!(
        out,
        "Taxiways: {} added, {} removed, {} renamed",
        s.taxiways_added, s.taxiways_removed, s.taxiways_renamed
    );
    let _ = writeln!(
        out,
        "Runways: {} changed ({} length, {} width)",
        s.runway_changes, s.runway_length_changes, s.runway_width_changes
    );
    let _ = writeln!(out, "Geometry: {} changed", s.geometry_changes);
    let _ = writeln!(out, "Total: {}", s.total_changes.max(result.change_count() as u32));

    for change in &result.taxiway_changes {
        let _ = writeln!(out, "  [{}] {}", change.change_type, change.description);
        match change.position() {
            Some(p) => {
                let _ = writeln!(out, "      Location: ({:.0}, {:.0})", p.x, p.y);
            }
            None => out.push_str("      Location: unknown\n"),
        }
    }
    for change in &result.runway_changes {
        let _ = writeln!(out, "  [{}] {}", change.change_type, change.description);
    }
    if !result.geometry_changes.is_empty() {
        let _ = writeln!(out, "Geometry changes ({}):", result.geometry_changes.len());
        for change in &result.geometry_changes {
            let _ = writeln!(out, "  {}", change.description);
        }
    }
    out
}

/// One line per configured airport.
pub fn airport_list_report(list: &AirportList) -> String {
    let mut out = String::new();
    if let Some(cycle) = &list.current_cycle {
        let _ = writeln!(out, "Current cycle: {cycle}");
    }
    for airport in &list.airports {
        if airport.name.is_empty() {
            let _ = writeln!(out, "{}", airport.code);
        } else {
            let _ = writeln!(out, "{:<4} {}", airport.code, airport.name);
        }
    }
    out
}

pub fn cycles_report(cycles: &CycleInfo) -> String {
    format!("Comparing cycle {} to {}\n", cycles.previous, cycles.current)
}

/// Result of searching back through earlier cycles for the last change.
pub fn historical_report(airport: &str, lookup: &HistoricalLookup) -> String {
    let mut out = String::new();
    if lookup.found {
        match &lookup.last_change_cycle {
            Some(cycle) => {
                let _ = writeln!(out, "{airport}: last change in cycle {cycle}");
            }
            None => {
                let _ = writeln!(out, "{airport}: change found");
            }
        }
        if !lookup.taxiways_added.is_empty() {
            let _ = writeln!(out, "  Taxiways added: {}", lookup.taxiways_added.join(", "));
        }
        if !lookup.taxiways_removed.is_empty() {
            let _ = writeln!(out, "  Taxiways removed: {}", lookup.taxiways_removed.join(", "));
        }
        if !lookup.runway_changes.is_empty() {
            let _ = writeln!(out, "  Runway changes: {}", lookup.runway_changes.join("; "));
        }
        if let Some(cycle) = &lookup.current_cycle {
            let _ = writeln!(out, "  Compared against cycle {cycle}");
        }
    } else {
        let message = lookup.message.as_deref().unwrap_or("No changes found");
        let _ = writeln!(
            out,
            "{airport}: {message} ({} cycles searched)",
            lookup.cycles_searched
        );
    }
    out
}
