//! Deserializable representation of the item template table.
//!
//! Only the fields the patcher reads or writes are typed. Everything else in a
//! record, slot, or filter lands in an `extra` map so a loaded catalog saves
//! back out without losing data.

use crate::catalog::identity::{ItemFamily, ItemId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One item template.
pub struct ItemRecord {
    #[serde(rename = "_id")]
    pub id: ItemId,
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_parent")]
    pub parent: ItemFamily,
    #[serde(rename = "_props", default)]
    pub props: ItemProps,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Typed subset of an item's `_props`.
pub struct ItemProps {
    #[serde(rename = "Slots", default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<Slot>>,
    #[serde(
        rename = "armorColliders",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub armor_colliders: Option<Vec<String>>,
    #[serde(
        rename = "armorPlateColliders",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub armor_plate_colliders: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Named mount point on a carrier item.
pub struct Slot {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_props", default)]
    pub props: SlotProps,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<SlotFilter>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Allow-list plus optional lock for a slot.
///
/// A missing `Filter` saves as `[]` and a null `locked` saves as absent.
pub struct SlotFilter {
    #[serde(rename = "Filter", default)]
    pub allow: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Which collider list a feature area reads and writes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColliderField {
    /// `armorColliders`, carried by soft inserts.
    Armor,
    /// `armorPlateColliders`, carried by rigid plates.
    ArmorPlate,
}

impl ColliderField {
    pub fn json_name(&self) -> &'static str {
        match self {
            ColliderField::Armor => "armorColliders",
            ColliderField::ArmorPlate => "armorPlateColliders",
        }
    }
}

impl ItemRecord {
    /// Colliders in the given field; absent lists read as empty.
    pub fn colliders(&self, field: ColliderField) -> &[String] {
        let list = match field {
            ColliderField::Armor => &self.props.armor_colliders,
            ColliderField::ArmorPlate => &self.props.armor_plate_colliders,
        };
        list.as_deref().unwrap_or_default()
    }

    pub fn colliders_mut(&mut self, field: ColliderField) -> &mut Option<Vec<String>> {
        match field {
            ColliderField::Armor => &mut self.props.armor_colliders,
            ColliderField::ArmorPlate => &mut self.props.armor_plate_colliders,
        }
    }

    /// Slots on the record; records without `Slots` yield nothing.
    pub fn slots(&self) -> &[Slot] {
        self.props.slots.as_deref().unwrap_or_default()
    }

    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.props.slots.iter_mut().flatten()
    }
}

impl Slot {
    pub fn filters(&self) -> &[SlotFilter] {
        self.props.filters.as_deref().unwrap_or_default()
    }

    pub fn filters_mut(&mut self) -> impl Iterator<Item = &mut SlotFilter> {
        self.props.filters.iter_mut().flatten()
    }

    /// Case-insensitive slot name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
