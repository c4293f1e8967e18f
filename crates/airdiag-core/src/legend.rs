//! Legend entries for an overlay.

use crate::changes::{ChangeKind, RunwayChange, TaxiwayChange};

/// Distinct categories across both lists, in first-seen order, taxiway
/// categories before runway ones.
///
/// Includes records that will not be drawn (no position): the legend
/// describes the whole change set.
pub fn legend_categories(taxiways: &[TaxiwayChange], runways: &[RunwayChange]) -> Vec<ChangeKind> {
    let mut seen: Vec<ChangeKind> = Vec::new();
    let kinds = taxiways
        .iter()
        .map(|c| &c.change_type)
        .chain(runways.iter().map(|c| &c.change_type));
    for kind in kinds {
        if !seen.contains(kind) {
            seen.push(kind.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_removed_in_order() {
        let taxiways = vec![
            TaxiwayChange::new("ADDED", "A", 1.0, 1.0),
            TaxiwayChange::new("REMOVED", "B", 1.0, 1.0),
            TaxiwayChange::new("ADDED", "C", 1.0, 1.0),
        ];
        let categories = legend_categories(&taxiways, &[]);
        assert_eq!(categories, vec![ChangeKind::Added, ChangeKind::Removed]);
    }

    #[test]
    fn test_taxiways_before_runways() {
        let taxiways = vec![TaxiwayChange::new("RENAMED", "A", 1.0, 1.0)];
        let runways = vec![
            RunwayChange::new("WIDTH_CHANGED", "10/28"),
            RunwayChange::new("LENGTH_CHANGED", "10/28"),
            RunwayChange::new("WIDTH_CHANGED", "4/22"),
        ];
        let categories = legend_categories(&taxiways, &runways);
        assert_eq!(
            categories,
            vec![ChangeKind::Renamed, ChangeKind::WidthChanged, ChangeKind::LengthChanged]
        );
    }

    #[test]
    fn test_unpositioned_records_still_listed() {
        let taxiways = vec![TaxiwayChange::new("REMOVED", "Z", 0.0, 0.0)];
        assert_eq!(legend_categories(&taxiways, &[]), vec![ChangeKind::Removed]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(legend_categories(&[], &[]).is_empty());
    }
}
