//! Runs the enabled feature areas against a catalog and bot config.
//!
//! Each area is classify → merge colliders → propagate filters → clear locks.
//! Areas run in a fixed order (plates, torso inserts, helmet inserts) and
//! every step is a dedup-on-insert union, so calling `apply` again on the
//! patched state changes nothing.

use crate::bots::{BotConfig, EquipmentFilters, PMC_ROLE};
use crate::catalog::ItemCatalog;
use crate::classify::classify;
use crate::colliders::{MergeStats, merge_colliders};
use crate::config::ModConfig;
use crate::locks::resolve_locks;
use crate::propagate::{PropagationStats, propagate_filters};
use crate::zones::{FeatureArea, RuleTable, Zone};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// What one feature area did to the catalog.
pub struct AreaReport {
    pub area: FeatureArea,
    /// Items classified per zone.
    pub zones: BTreeMap<Zone, usize>,
    pub colliders: MergeStats,
    pub filters: PropagationStats,
    pub locks_cleared: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Edits made to the bot equipment config.
pub struct BotReport {
    /// Randomised slot names removed, keyed by slot name.
    pub randomised_slots_removed: BTreeMap<String, usize>,
    pub plate_level_filter_disabled: bool,
    /// Requested edits that could not be applied.
    pub skipped: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub enabled: bool,
    pub areas: Vec<AreaReport>,
    pub bots: BotReport,
}

impl PatchReport {
    pub fn area(&self, area: FeatureArea) -> Option<&AreaReport> {
        self.areas.iter().find(|report| report.area == area)
    }
}

/// Patch `catalog` (and `bots`, when given) according to `config`.
pub fn apply(
    config: &ModConfig,
    catalog: &mut ItemCatalog,
    mut bots: Option<&mut BotConfig>,
) -> PatchReport {
    let mut report = PatchReport::default();
    if !config.enable_mod {
        tracing::info!("enableMod is false; catalog left untouched");
        return report;
    }
    report.enabled = true;

    let plan = [
        (FeatureArea::Plates, config.enable_plates),
        (FeatureArea::TorsoInserts, config.enable_torso_inserts),
        (FeatureArea::HelmetInserts, config.enable_helmet_inserts),
    ];
    for (area, enabled) in plan {
        if !enabled {
            tracing::debug!(area = area.as_str(), "feature area disabled");
            continue;
        }
        let table = area.rules();
        report.areas.push(run_area(catalog, table));
        if config.disable_randomised_armor_slots && !table.randomised_slots.is_empty() {
            drop_randomised_slots(bots.as_deref_mut(), table, &mut report.bots);
        }
    }

    if config.disable_plate_level_filter {
        if let Some(pmc) = pmc_role(bots.as_deref_mut(), &mut report.bots, "filterPlatesByLevel") {
            let changed = pmc.disable_plate_level_filter();
            report.bots.plate_level_filter_disabled = changed;
            if changed {
                tracing::info!("disabled pmc plate filtering by level");
            }
        }
    }
    report
}

/// Run one feature area's pipeline against `catalog`.
pub fn run_area(catalog: &mut ItemCatalog, table: &RuleTable) -> AreaReport {
    warn_on_missing_families(catalog, table);

    let classification = classify(catalog, table);
    let colliders = merge_colliders(catalog, table, &classification);
    let filters = propagate_filters(catalog, table, &classification);
    let locks_cleared = resolve_locks(catalog, table);

    let zones = classification
        .zones
        .iter()
        .map(|(zone, members)| (*zone, members.items.len()))
        .collect();
    tracing::info!(
        area = table.area.as_str(),
        classified = classification.item_count(),
        colliders_added = colliders.colliders_added,
        filters_updated = filters.filters_updated,
        ids_added = filters.ids_added,
        locks_cleared,
        "feature area patched"
    );
    AreaReport {
        area: table.area,
        zones,
        colliders,
        filters,
        locks_cleared,
    }
}

fn warn_on_missing_families(catalog: &ItemCatalog, table: &RuleTable) {
    if catalog.family_count(&table.members) == 0 {
        tracing::warn!(
            area = table.area.as_str(),
            family = table.members.label(),
            "catalog has no items to classify"
        );
    }
    for carrier in table.carriers {
        if catalog.family_count(carrier) == 0 {
            tracing::warn!(
                area = table.area.as_str(),
                family = carrier.label(),
                "catalog has no carriers of this family"
            );
        }
    }
}

fn drop_randomised_slots(bots: Option<&mut BotConfig>, table: &RuleTable, report: &mut BotReport) {
    let Some(pmc) = pmc_role(bots, report, "randomisedWeaponModSlots") else {
        return;
    };
    for &slot in table.randomised_slots {
        let removed = pmc.remove_randomised_slots(&[slot]);
        *report
            .randomised_slots_removed
            .entry(slot.to_string())
            .or_default() += removed;
        tracing::debug!(area = table.area.as_str(), slot, removed, "dropped randomised slot");
    }
}

fn pmc_role<'a>(
    bots: Option<&'a mut BotConfig>,
    report: &mut BotReport,
    edit: &str,
) -> Option<&'a mut EquipmentFilters> {
    let Some(bots) = bots else {
        tracing::warn!(edit, "no bot config supplied; skipping bot edit");
        report.skipped.push(format!("{edit}: no bot config"));
        return None;
    };
    let pmc = bots.role_mut(PMC_ROLE);
    if pmc.is_none() {
        tracing::warn!(edit, role = PMC_ROLE, "bot config has no equipment for role");
        report.skipped.push(format!("{edit}: no {PMC_ROLE} equipment"));
    }
    pmc
}
