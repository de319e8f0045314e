//! Filter propagation: open carrier slots to every item of their zone.

use crate::catalog::ItemCatalog;
use crate::classify::ClassificationResult;
use crate::union_into;
use crate::zones::RuleTable;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PropagationStats {
    /// Carrier records whose slots were inspected.
    pub carriers: usize,
    /// Filters that gained at least one id.
    pub filters_updated: usize,
    /// Ids appended across all filters.
    pub ids_added: usize,
}

/// Union each zone's item ids into every filter of the carrier slots mapped
/// to that zone.
///
/// Slot names are compared case-insensitively. A slot matching several slot
/// rules draws from each zone in table order. Existing allow-list entries keep
/// their position; new ids are appended in zone order.
pub fn propagate_filters(
    catalog: &mut ItemCatalog,
    table: &RuleTable,
    classification: &ClassificationResult,
) -> PropagationStats {
    let mut stats = PropagationStats::default();
    for carrier in catalog.in_families_mut(table.carriers) {
        stats.carriers += 1;
        let carrier_id = carrier.id.clone();
        for slot in carrier.slots_mut() {
            let zones: Vec<_> = table.slot_zones(&slot.name).collect();
            if zones.is_empty() {
                continue;
            }
            for filter in slot.filters_mut() {
                let mut added = 0;
                for zone in &zones {
                    added += union_into(&mut filter.allow, classification.items(*zone));
                }
                if added > 0 {
                    stats.filters_updated += 1;
                    stats.ids_added += added;
                }
            }
            tracing::trace!(carrier = %carrier_id, slot = %slot.name, "propagated slot");
        }
    }
    stats
}
