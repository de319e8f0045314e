//! Mod configuration: five feature switches plus an optional plate switch.
//!
//! The file is validated against `schema/mod_config.schema.json` before it is
//! deserialized, so a missing or mistyped flag fails at load time with every
//! schema violation listed. Unknown keys are ignored.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

const MOD_CONFIG_SCHEMA: &str = include_str!("../schema/mod_config.schema.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Immutable feature switches read once per run.
pub struct ModConfig {
    /// Master switch; nothing runs when false.
    #[serde(rename = "enableMod")]
    pub enable_mod: bool,
    /// Rigid plate pipeline. Absent means enabled.
    #[serde(rename = "enablePlates", default = "enabled")]
    pub enable_plates: bool,
    #[serde(rename = "enableBuiltInInsert")]
    pub enable_torso_inserts: bool,
    #[serde(rename = "enableBuiltInInsert_helmet")]
    pub enable_helmet_inserts: bool,
    /// Stop bots rolling random armor carriers and headwear.
    #[serde(rename = "disableRandomisedArmorSlots")]
    pub disable_randomised_armor_slots: bool,
    /// Turn off the bots' level-based plate filtering.
    #[serde(rename = "filterPlatesByLevel_config")]
    pub disable_plate_level_filter: bool,
}

fn enabled() -> bool {
    true
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            enable_mod: true,
            enable_plates: true,
            enable_torso_inserts: true,
            enable_helmet_inserts: true,
            disable_randomised_armor_slots: false,
            disable_plate_level_filter: false,
        }
    }
}

impl ModConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&data).with_context(|| format!("loading mod config {}", path.display()))
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data).context("parsing mod config JSON")?;
        Self::from_value(value)
    }

    /// Validate against the bundled schema, then deserialize.
    pub fn from_value(value: Value) -> Result<Self> {
        validate_against_schema(&value)?;
        serde_json::from_value(value).context("decoding mod config")
    }
}

fn validate_against_schema(value: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(MOD_CONFIG_SCHEMA).context("parsing bundled mod config schema")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling bundled mod config schema: {err}"))?;
    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("mod config failed schema validation:\n{details}");
    }
    Ok(())
}
