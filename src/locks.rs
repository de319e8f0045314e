//! Lock clearing for the carrier slots a feature area opens up.

use crate::catalog::ItemCatalog;
use crate::zones::RuleTable;

/// Set `locked = false` on every filter of the targeted carrier slots whose
/// lock is currently set. Absent and already-false locks are left alone.
/// Returns the number of locks cleared.
pub fn resolve_locks(catalog: &mut ItemCatalog, table: &RuleTable) -> usize {
    let mut cleared = 0;
    for carrier in catalog.in_families_mut(table.carriers) {
        for slot in carrier.slots_mut() {
            if !table.lock_targets.covers(&slot.name) {
                continue;
            }
            for filter in slot.filters_mut() {
                if filter.locked == Some(true) {
                    filter.locked = Some(false);
                    cleared += 1;
                }
            }
        }
    }
    if cleared > 0 {
        tracing::debug!(area = table.area.as_str(), cleared, "cleared slot locks");
    }
    cleared
}
