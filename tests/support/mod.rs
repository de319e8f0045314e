#![allow(dead_code)]

use anyhow::Result;
use armor_unlock::{BotConfig, ItemCatalog, ItemId, ItemRecord, ModConfig};
use serde_json::{Value, json};

pub const PLATE: &str = "644120aa86ffbe10ee032b6f";
pub const INSERT: &str = "65649eb40bf0ed77b8044453";
pub const ARMOR: &str = "5448e54d4bdc2dcc718b4568";
pub const VEST: &str = "5448e5284bdc2dcb718b4567";
pub const HEADWEAR: &str = "5a341c4086f77401f2541505";

pub fn item(id: &str, parent: &str, name: &str, props: Value) -> Value {
    json!({"_id": id, "_name": name, "_parent": parent, "_type": "Item", "_props": props})
}

pub fn slot(name: &str, allow: &[&str], locked: Option<bool>) -> Value {
    let mut filter = json!({"Filter": allow});
    if let Some(locked) = locked {
        filter["locked"] = json!(locked);
    }
    json!({"_name": name, "_id": format!("slot_{name}"), "_required": false,
           "_props": {"filters": [filter]}})
}

pub fn catalog_from(records: Vec<Value>) -> Result<ItemCatalog> {
    let records: Vec<ItemRecord> = records
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()?;
    ItemCatalog::from_records(records)
}

/// A small catalog touching every feature area.
pub fn sample_catalog_json() -> Value {
    let records = vec![
        item("plate_front", PLATE, "item_equipment_plate_steel_front",
             json!({"armorPlateColliders": ["Plate_Granit_SAPI_chest"]})),
        item("plate_back", PLATE, "item_equipment_plate_steel_back",
             json!({"armorPlateColliders": ["Plate_6B13_back"]})),
        item("plate_side", PLATE, "item_equipment_plate_sapi_side",
             json!({"armorPlateColliders": ["Plate_Korund_side_left_high"]})),
        item("plate_custom", PLATE, "custom_plate_front", json!({})),
        item("soft_front", INSERT, "vest_a_soft_armor_front",
             json!({"armorColliders": ["RibcageUp", "RibcageLow"]})),
        item("soft_back", INSERT, "vest_a_soft_armor_back",
             json!({"armorColliders": ["SpineTop", "SpineDown"]})),
        item("soft_groin", INSERT, "vest_a_soft_armor_groin_front",
             json!({"armorColliders": ["Pelvis"]})),
        item("soft_collar", INSERT, "vest_a_soft_armor_collar",
             json!({"armorColliders": ["NeckFront"]})),
        item("helm_top", INSERT, "helmet_a_helmet_armor_top",
             json!({"armorColliders": ["ParietalHead"]})),
        item("helm_nape", INSERT, "helmet_a_helmet_armor_nape",
             json!({"armorColliders": ["BackHead"]})),
        item("helm_ears", INSERT, "helmet_a_helmet_armor_ears",
             json!({"armorColliders": ["Ears"]})),
        item("vest_rig", VEST, "item_equipment_rig_plate", json!({"Weight": 2.1, "Slots": [
            slot("front_plate", &["X"], Some(true)),
            slot("back_plate", &[], None),
            slot("left_side_plate", &[], Some(false)),
            slot("soft_armor_front", &["soft_front"], Some(true)),
            slot("groin", &[], Some(true)),
        ]})),
        item("armor_vest", ARMOR, "item_equipment_armor_heavy", json!({"Slots": [
            slot("Soft_Armor_Back", &["soft_back"], Some(true)),
            slot("collar", &[], None),
            slot("right_side_plate", &["plate_side"], None),
        ]})),
        item("helmet", HEADWEAR, "item_equipment_helmet_a", json!({"Slots": [
            slot("helmet_top", &["helm_top"], Some(true)),
            slot("helmet_back", &[], Some(true)),
            slot("helmet_ears", &[], Some(true)),
            slot("helmet_eyes", &[], Some(true)),
        ]})),
        item("backpack", "5448e53e4bdc2d60728b4567", "item_equipment_backpack",
             json!({"Slots": [slot("front_plate", &[], Some(true))]})),
    ];
    let mut table = serde_json::Map::new();
    for record in records {
        let id = record["_id"].as_str().unwrap_or_default().to_string();
        table.insert(id, record);
    }
    Value::Object(table)
}

pub fn sample_catalog() -> Result<ItemCatalog> {
    let table = serde_json::from_value(sample_catalog_json())?;
    ItemCatalog::from_table(table)
}

pub fn sample_bots_json() -> Value {
    json!({
        "presetBatch": {"pmcBEAR": 15},
        "equipment": {
            "pmc": {
                "filterPlatesByLevel": true,
                "randomisation": [
                    {"levelRange": {"min": 1, "max": 14},
                     "randomisedWeaponModSlots": ["Headwear", "TacticalVest", "ArmorVest", "mod_scope"]},
                    {"levelRange": {"min": 15, "max": 100}}
                ]
            },
            "assault": {"filterPlatesByLevel": true}
        }
    })
}

pub fn sample_bots() -> Result<BotConfig> {
    Ok(serde_json::from_value(sample_bots_json())?)
}

pub fn all_enabled() -> ModConfig {
    ModConfig {
        enable_mod: true,
        enable_plates: true,
        enable_torso_inserts: true,
        enable_helmet_inserts: true,
        disable_randomised_armor_slots: true,
        disable_plate_level_filter: true,
    }
}

/// Allow-list of the first filter on `slot_name` of carrier `id`.
pub fn allow_list(catalog: &ItemCatalog, id: &str, slot_name: &str) -> Vec<String> {
    filter_of(catalog, id, slot_name)
        .map(|filter| filter.allow.iter().map(|id| id.0.clone()).collect())
        .unwrap_or_default()
}

pub fn lock_of(catalog: &ItemCatalog, id: &str, slot_name: &str) -> Option<bool> {
    filter_of(catalog, id, slot_name).and_then(|filter| filter.locked)
}

fn filter_of<'a>(
    catalog: &'a ItemCatalog,
    id: &str,
    slot_name: &str,
) -> Option<&'a armor_unlock::SlotFilter> {
    catalog
        .get(&ItemId::from(id))?
        .slots()
        .iter()
        .find(|slot| slot.is_named(slot_name))?
        .filters()
        .first()
}
