//! Zone rule tables for the three feature areas.
//!
//! Each `RuleTable` is static data describing one feature area end to end:
//! which item family gets classified and by which name patterns, which
//! carrier slots receive each zone, which slots get unlocked, and which
//! randomised bot equipment slots stop being rolled.
//!
//! Item rules are ordered. Classification assigns the first matching zone, so
//! a more specific suffix must sit above any shorter suffix it ends with.

use crate::catalog::{ColliderField, ItemFamily};
use serde::Serialize;

/// Anatomical grouping used as the unit of classification.
///
/// Zones are scoped by `FeatureArea`: `FrontBack` for plates and `FrontBack`
/// for soft inserts never share members.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    FrontBack,
    Side,
    Groin,
    Collar,
    Shoulder,
    Top,
    Back,
    Ears,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::FrontBack => "front_back",
            Zone::Side => "side",
            Zone::Groin => "groin",
            Zone::Collar => "collar",
            Zone::Shoulder => "shoulder",
            Zone::Top => "top",
            Zone::Back => "back",
            Zone::Ears => "ears",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureArea {
    Plates,
    TorsoInserts,
    HelmetInserts,
}

impl FeatureArea {
    pub const ALL: [FeatureArea; 3] = [
        FeatureArea::Plates,
        FeatureArea::TorsoInserts,
        FeatureArea::HelmetInserts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureArea::Plates => "plates",
            FeatureArea::TorsoInserts => "torso_inserts",
            FeatureArea::HelmetInserts => "helmet_inserts",
        }
    }

    /// The rule table driving this area.
    pub fn rules(&self) -> &'static RuleTable {
        match self {
            FeatureArea::Plates => &PLATES,
            FeatureArea::TorsoInserts => &TORSO_INSERTS,
            FeatureArea::HelmetInserts => &HELMET_INSERTS,
        }
    }
}

impl TryFrom<&str> for FeatureArea {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "plates" => Ok(FeatureArea::Plates),
            "torso" | "torso_inserts" => Ok(FeatureArea::TorsoInserts),
            "helmet" | "helmet_inserts" => Ok(FeatureArea::HelmetInserts),
            other => anyhow::bail!("Unknown feature area: {other}"),
        }
    }
}

/// Case-insensitive name predicate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NamePattern {
    Prefix(&'static str),
    Suffix(&'static str),
}

impl NamePattern {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Prefix(prefix) => name
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
            NamePattern::Suffix(suffix) => name
                .len()
                .checked_sub(suffix.len())
                .and_then(|start| name.get(start..))
                .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix)),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ZoneRule {
    pub pattern: NamePattern,
    pub zone: Zone,
}

const fn suffix(pattern: &'static str, zone: Zone) -> ZoneRule {
    ZoneRule {
        pattern: NamePattern::Suffix(pattern),
        zone,
    }
}

/// Carrier slot name (compared case-insensitively) fed by a zone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlotRule {
    pub slot: &'static str,
    pub zone: Zone,
}

const fn slot(slot: &'static str, zone: Zone) -> SlotRule {
    SlotRule { slot, zone }
}

/// Which carrier slots get their filter locks cleared.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LockTargets {
    None,
    AllSlots,
    Named(&'static [&'static str]),
}

impl LockTargets {
    pub fn covers(&self, slot_name: &str) -> bool {
        match self {
            LockTargets::None => false,
            LockTargets::AllSlots => true,
            LockTargets::Named(names) => names
                .iter()
                .any(|name| name.eq_ignore_ascii_case(slot_name)),
        }
    }
}

/// Static description of one feature area.
#[derive(Debug)]
pub struct RuleTable {
    pub area: FeatureArea,
    /// Family whose members are classified.
    pub members: ItemFamily,
    /// Name condition every member must meet before item rules apply.
    pub marker: Option<NamePattern>,
    pub collider_field: ColliderField,
    /// Ordered; first match wins during classification.
    pub item_rules: &'static [ZoneRule],
    /// Every match applies during the collider merge.
    pub merge_rules: &'static [ZoneRule],
    pub carriers: &'static [ItemFamily],
    pub slot_rules: &'static [SlotRule],
    pub lock_targets: LockTargets,
    /// Bot equipment slots dropped from randomisation when requested.
    pub randomised_slots: &'static [&'static str],
}

impl RuleTable {
    /// True when `name` passes the family marker (or the table has none).
    pub fn accepts_name(&self, name: &str) -> bool {
        self.marker.is_none_or(|marker| marker.matches(name))
    }

    /// First item rule matching `name`.
    pub fn classify_name(&self, name: &str) -> Option<Zone> {
        self.item_rules
            .iter()
            .find(|rule| rule.pattern.matches(name))
            .map(|rule| rule.zone)
    }

    /// Every merge rule matching `name`, in table order, duplicates kept.
    pub fn merge_zones<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Zone> + 'a {
        self.merge_rules
            .iter()
            .filter(move |rule| rule.pattern.matches(name))
            .map(|rule| rule.zone)
    }

    /// Zones feeding a carrier slot, in table order.
    pub fn slot_zones<'a>(&'a self, slot_name: &'a str) -> impl Iterator<Item = Zone> + 'a {
        self.slot_rules
            .iter()
            .filter(move |rule| rule.slot.eq_ignore_ascii_case(slot_name))
            .map(|rule| rule.zone)
    }
}

const ARMOR_CARRIERS: &[ItemFamily] = &[ItemFamily::Armor, ItemFamily::Vest];

const PLATE_RULES: &[ZoneRule] = &[
    suffix("_frontback", Zone::FrontBack),
    suffix("_front", Zone::FrontBack),
    suffix("_back", Zone::FrontBack),
    suffix("_side", Zone::Side),
];

pub static PLATES: RuleTable = RuleTable {
    area: FeatureArea::Plates,
    members: ItemFamily::ArmorPlate,
    marker: Some(NamePattern::Prefix("item_equipment_plate_")),
    collider_field: ColliderField::ArmorPlate,
    item_rules: PLATE_RULES,
    merge_rules: PLATE_RULES,
    carriers: ARMOR_CARRIERS,
    slot_rules: &[
        slot("front_plate", Zone::FrontBack),
        slot("back_plate", Zone::FrontBack),
        slot("left_side_plate", Zone::Side),
        slot("right_side_plate", Zone::Side),
    ],
    lock_targets: LockTargets::None,
    randomised_slots: &[],
};

const TORSO_RULES: &[ZoneRule] = &[
    suffix("soft_armor_front", Zone::FrontBack),
    suffix("soft_armor_back", Zone::FrontBack),
    suffix("soft_armor_right_side", Zone::Side),
    suffix("soft_armor_left_side", Zone::Side),
    suffix("soft_armor_left", Zone::Side),
    suffix("soft_armor_right", Zone::Side),
    suffix("soft_armor_groin", Zone::Groin),
    suffix("soft_armor_groin_front", Zone::Groin),
    suffix("soft_armor_groin_back", Zone::Groin),
    suffix("soft_armor_collar", Zone::Collar),
    suffix("soft_armor_right_arm", Zone::Shoulder),
    suffix("soft_armor_left_arm", Zone::Shoulder),
];

pub static TORSO_INSERTS: RuleTable = RuleTable {
    area: FeatureArea::TorsoInserts,
    members: ItemFamily::BuiltInInsert,
    marker: None,
    collider_field: ColliderField::Armor,
    item_rules: TORSO_RULES,
    merge_rules: TORSO_RULES,
    carriers: ARMOR_CARRIERS,
    slot_rules: &[
        slot("soft_armor_front", Zone::FrontBack),
        slot("soft_armor_back", Zone::FrontBack),
        slot("soft_armor_left", Zone::Side),
        slot("soft_armor_right", Zone::Side),
        slot("groin", Zone::Groin),
        slot("groin_back", Zone::Groin),
        slot("collar", Zone::Collar),
        slot("shoulder_r", Zone::Shoulder),
        slot("shoulder_l", Zone::Shoulder),
    ],
    lock_targets: LockTargets::AllSlots,
    randomised_slots: &["TacticalVest", "ArmorVest"],
};

const HELMET_SLOTS: &[&str] = &["helmet_top", "helmet_back", "helmet_ears"];

pub static HELMET_INSERTS: RuleTable = RuleTable {
    area: FeatureArea::HelmetInserts,
    members: ItemFamily::BuiltInInsert,
    marker: None,
    collider_field: ColliderField::Armor,
    item_rules: &[
        suffix("helmet_armor_top", Zone::Top),
        suffix("helmet_armor_nape", Zone::Back),
        suffix("helmet_armor_ears", Zone::Ears),
    ],
    // Top is merged twice and nape items get no merge; kept as shipped.
    merge_rules: &[
        suffix("helmet_armor_top", Zone::Top),
        suffix("helmet_armor_ears", Zone::Ears),
        suffix("helmet_armor_top", Zone::Top),
    ],
    carriers: &[ItemFamily::Headwear],
    slot_rules: &[
        slot("helmet_top", Zone::Top),
        slot("helmet_back", Zone::Back),
        slot("helmet_ears", Zone::Ears),
    ],
    lock_targets: LockTargets::Named(HELMET_SLOTS),
    randomised_slots: &["Headwear"],
};
