//! Shared library for the armor-unlock patcher.
//!
//! The crate loads an item template catalog, classifies armor plates and soft
//! inserts into body zones, and opens the matching carrier slots to every item
//! of the zone. The pipeline stages live in their own modules (`classify`,
//! `colliders`, `propagate`, `locks`) and are driven by the static tables in
//! `zones`; `orchestrator::apply` runs them according to a `ModConfig`.
//! Binaries under `src/bin` are thin hosts around these functions.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod bots;
pub mod catalog;
pub mod classify;
pub mod colliders;
pub mod config;
pub mod locks;
pub mod orchestrator;
pub mod propagate;
pub mod zones;

pub use bots::{BotConfig, EquipmentFilters, RandomisationDetails};
pub use catalog::{
    ColliderField, ItemCatalog, ItemFamily, ItemId, ItemRecord, Slot, SlotFilter,
};
pub use classify::{ClassificationResult, ZoneMembers, classify};
pub use colliders::merge_colliders;
pub use config::ModConfig;
pub use locks::resolve_locks;
pub use orchestrator::{AreaReport, BotReport, PatchReport, apply, run_area};
pub use propagate::{PropagationStats, propagate_filters};
pub use zones::{FeatureArea, RuleTable, Zone};

/// Append every entry of `source` missing from `target`, keeping the existing
/// order of `target`. Returns the number of entries appended.
pub fn union_into<'a, T>(target: &mut Vec<T>, source: impl IntoIterator<Item = &'a T>) -> usize
where
    T: PartialEq + Clone + 'a,
{
    let mut added = 0;
    for entry in source {
        if !target.contains(entry) {
            target.push(entry.clone());
            added += 1;
        }
    }
    added
}

/// Install the stderr `tracing` subscriber used by the binaries.
///
/// `RUST_LOG` overrides the default `info` level. Stdout is left alone so the
/// binaries can print JSON there.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}
