//! Collider merge: fan a zone's aggregated colliders back onto its members.
//!
//! After the pass every item sharing a zone carries the same hit-detection
//! coverage, including items that contributed nothing to the aggregate.

use crate::catalog::ItemCatalog;
use crate::classify::ClassificationResult;
use crate::union_into;
use crate::zones::RuleTable;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// Member records that gained at least one collider.
    pub items_updated: usize,
    /// Collider entries appended across all records.
    pub colliders_added: usize,
}

/// Union each matching zone's colliders into every member record.
///
/// Merge rules are evaluated independently, so a name matching several rules
/// is merged once per match; the dedup in `union_into` makes repeats harmless.
/// Records whose collider list is absent and gains nothing are left absent.
pub fn merge_colliders(
    catalog: &mut ItemCatalog,
    table: &RuleTable,
    classification: &ClassificationResult,
) -> MergeStats {
    let mut stats = MergeStats::default();
    for record in catalog.in_family_mut(&table.members) {
        if !table.accepts_name(&record.name) {
            continue;
        }
        let mut merged = record.colliders(table.collider_field).to_vec();
        let mut added = 0;
        for zone in table.merge_zones(&record.name) {
            added += union_into(&mut merged, classification.colliders(zone));
        }
        if added == 0 {
            continue;
        }
        tracing::debug!(
            area = table.area.as_str(),
            item = %record.id,
            field = table.collider_field.json_name(),
            added,
            "merged zone colliders"
        );
        *record.colliders_mut(table.collider_field) = Some(merged);
        stats.items_updated += 1;
        stats.colliders_added += added;
    }
    stats
}
