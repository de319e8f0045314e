//! Zone classification for one feature area.
//!
//! A single read-only pass over the member family builds, per zone, the ids
//! of the items that landed there and the union of their colliders. The
//! result feeds both the collider merge and the filter propagation.

use crate::catalog::{ItemCatalog, ItemId};
use crate::union_into;
use crate::zones::{FeatureArea, RuleTable, Zone};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Items assigned to one zone and their combined colliders, both in first-seen order.
pub struct ZoneMembers {
    pub items: Vec<ItemId>,
    pub colliders: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub area: FeatureArea,
    pub zones: BTreeMap<Zone, ZoneMembers>,
}

impl ClassificationResult {
    pub fn new(area: FeatureArea) -> Self {
        Self {
            area,
            zones: BTreeMap::new(),
        }
    }

    pub fn zone(&self, zone: Zone) -> Option<&ZoneMembers> {
        self.zones.get(&zone)
    }

    /// Item ids classified into `zone`; empty when none were.
    pub fn items(&self, zone: Zone) -> &[ItemId] {
        self.zone(zone).map(|m| m.items.as_slice()).unwrap_or_default()
    }

    /// Colliders aggregated for `zone`; empty when none were.
    pub fn colliders(&self, zone: Zone) -> &[String] {
        self.zone(zone)
            .map(|m| m.colliders.as_slice())
            .unwrap_or_default()
    }

    /// Total number of classified items across zones.
    pub fn item_count(&self) -> usize {
        self.zones.values().map(|m| m.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// Classify every member of `table`'s family into at most one zone.
pub fn classify(catalog: &ItemCatalog, table: &RuleTable) -> ClassificationResult {
    let mut result = ClassificationResult::new(table.area);
    for record in catalog.in_family(&table.members) {
        if !table.accepts_name(&record.name) {
            continue;
        }
        let Some(zone) = table.classify_name(&record.name) else {
            tracing::trace!(item = %record.id, name = %record.name, "no zone rule matched");
            continue;
        };
        let members = result.zones.entry(zone).or_default();
        union_into(&mut members.items, [&record.id]);
        union_into(&mut members.colliders, record.colliders(table.collider_field));
    }

    for (zone, members) in &result.zones {
        tracing::debug!(
            area = table.area.as_str(),
            zone = zone.as_str(),
            items = members.items.len(),
            colliders = members.colliders.len(),
            "classified zone"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemRecord;
    use crate::zones::{HELMET_INSERTS, PLATES, TORSO_INSERTS};
    use serde_json::json;

    const PLATE: &str = "644120aa86ffbe10ee032b6f";
    const INSERT: &str = "65649eb40bf0ed77b8044453";

    fn item(id: &str, parent: &str, name: &str, props: serde_json::Value) -> ItemRecord {
        serde_json::from_value(json!({"_id": id, "_name": name, "_parent": parent, "_props": props}))
            .unwrap()
    }

    #[test]
    fn plates_group_by_suffix_and_union_colliders() {
        let catalog = ItemCatalog::from_records([
            item("p1", PLATE, "item_equipment_plate_a_front", json!({"armorPlateColliders": ["C1"]})),
            item("p2", PLATE, "item_equipment_plate_b_back", json!({"armorPlateColliders": ["C2", "C1"]})),
            item("p3", PLATE, "item_equipment_plate_c_side", json!({"armorPlateColliders": ["S1"]})),
            item("p4", PLATE, "custom_plate_front", json!({"armorPlateColliders": ["X"]})),
            item("p5", INSERT, "item_equipment_plate_d_front", json!({})),
        ])
        .unwrap();

        let result = classify(&catalog, &PLATES);
        assert_eq!(result.area, FeatureArea::Plates);
        assert_eq!(result.items(Zone::FrontBack), [ItemId::from("p1"), ItemId::from("p2")]);
        assert_eq!(result.colliders(Zone::FrontBack), ["C1", "C2"]);
        assert_eq!(result.items(Zone::Side), [ItemId::from("p3")]);
        assert_eq!(result.item_count(), 3);
    }

    #[test]
    fn unmatched_names_are_skipped() {
        let catalog = ItemCatalog::from_records([
            item("i1", INSERT, "vest_soft_armor_front", json!({"armorColliders": ["RibcageUp"]})),
            item("i2", INSERT, "vest_soft_armor_mystery", json!({"armorColliders": ["Q"]})),
        ])
        .unwrap();

        let result = classify(&catalog, &TORSO_INSERTS);
        assert_eq!(result.zones.len(), 1);
        assert_eq!(result.items(Zone::FrontBack), [ItemId::from("i1")]);
        assert!(result.colliders(Zone::FrontBack).iter().all(|c| c != "Q"));
        assert!(result.items(Zone::Groin).is_empty());
    }

    #[test]
    fn helmet_and_torso_areas_read_the_same_family_independently() {
        let catalog = ItemCatalog::from_records([
            item("h1", INSERT, "helmet_x_helmet_armor_top", json!({"armorColliders": ["ParietalHead"]})),
            item("h2", INSERT, "helmet_x_helmet_armor_nape", json!({})),
            item("t1", INSERT, "vest_soft_armor_collar", json!({"armorColliders": ["NeckFront"]})),
        ])
        .unwrap();

        let helmet = classify(&catalog, &HELMET_INSERTS);
        assert_eq!(helmet.items(Zone::Top), [ItemId::from("h1")]);
        assert_eq!(helmet.items(Zone::Back), [ItemId::from("h2")]);
        assert!(helmet.colliders(Zone::Back).is_empty());
        assert_eq!(helmet.item_count(), 2);

        let torso = classify(&catalog, &TORSO_INSERTS);
        assert_eq!(torso.items(Zone::Collar), [ItemId::from("t1")]);
        assert_eq!(torso.item_count(), 1);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let result = classify(&ItemCatalog::default(), &PLATES);
        assert!(result.is_empty());
        assert!(result.zone(Zone::FrontBack).is_none());
    }
}
