use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unique identifier of an item template (the `_id` field).
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

/// Structural type of an item, decoded from its `_parent` id.
///
/// Only the families the patcher reads or writes get a variant; every other
/// parent id is carried through as `Other` so the catalog round-trips.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ItemFamily {
    ArmorPlate,
    BuiltInInsert,
    Armor,
    Vest,
    Headwear,
    Other(String),
}

const FAMILY_IDS: &[(&str, ItemFamily)] = &[
    ("644120aa86ffbe10ee032b6f", ItemFamily::ArmorPlate),
    ("65649eb40bf0ed77b8044453", ItemFamily::BuiltInInsert),
    ("5448e54d4bdc2dcc718b4568", ItemFamily::Armor),
    ("5448e5284bdc2dcb718b4567", ItemFamily::Vest),
    ("5a341c4086f77401f2541505", ItemFamily::Headwear),
];

impl ItemFamily {
    /// Parent id as stored in the catalog.
    pub fn as_str(&self) -> &str {
        match self {
            ItemFamily::Other(value) => value.as_str(),
            known => FAMILY_IDS
                .iter()
                .find(|(_, family)| family == known)
                .map(|(id, _)| *id)
                .unwrap_or_default(),
        }
    }

    /// Short human label used in logs and reports.
    pub fn label(&self) -> &str {
        match self {
            ItemFamily::ArmorPlate => "armor_plate",
            ItemFamily::BuiltInInsert => "built_in_insert",
            ItemFamily::Armor => "armor",
            ItemFamily::Vest => "vest",
            ItemFamily::Headwear => "headwear",
            ItemFamily::Other(value) => value.as_str(),
        }
    }

    fn from_parent_id(value: &str) -> Self {
        FAMILY_IDS
            .iter()
            .find(|(id, _)| *id == value)
            .map(|(_, family)| family.clone())
            .unwrap_or_else(|| ItemFamily::Other(value.to_string()))
    }
}

impl Serialize for ItemFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_parent_id(&value))
    }
}
