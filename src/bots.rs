//! Bot equipment configuration touched as a side effect of the patch.
//!
//! Only the randomisation slot lists and the plate level filter are typed;
//! the rest of the host's `bot.json` is carried in `extra` maps.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Equipment role whose randomisation the patcher edits.
pub const PMC_ROLE: &str = "pmc";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub equipment: BTreeMap<String, EquipmentFilters>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Equipment generation settings for one bot role.
pub struct EquipmentFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomisation: Option<Vec<RandomisationDetails>>,
    #[serde(
        rename = "filterPlatesByLevel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_plates_by_level: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// One level-ranged randomisation entry.
pub struct RandomisationDetails {
    #[serde(
        rename = "randomisedWeaponModSlots",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub randomised_weapon_mod_slots: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BotConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing bot config {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("writing bot config {}", path.display()))?;
        writer.flush()?;
        Ok(())
    }

    pub fn role_mut(&mut self, role: &str) -> Option<&mut EquipmentFilters> {
        self.equipment.get_mut(role)
    }
}

impl EquipmentFilters {
    /// Drop `slots` from every randomisation entry's randomised slot list.
    ///
    /// Entries without a list are skipped. Returns how many names were removed.
    pub fn remove_randomised_slots(&mut self, slots: &[&str]) -> usize {
        let mut removed = 0;
        for entry in self.randomisation.iter_mut().flatten() {
            let Some(list) = entry.randomised_weapon_mod_slots.as_mut() else {
                continue;
            };
            let before = list.len();
            list.retain(|name| !slots.contains(&name.as_str()));
            removed += before - list.len();
        }
        removed
    }

    /// Turn off level-based plate filtering. Returns true when the flag changed.
    pub fn disable_plate_level_filter(&mut self) -> bool {
        let changed = self.filter_plates_by_level != Some(false);
        self.filter_plates_by_level = Some(false);
        changed
    }
}
