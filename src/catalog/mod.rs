//! Item catalog wiring.
//!
//! Wraps the host's item template table (`items.json`) so the patcher can load
//! a validated snapshot, walk it by item family, and mutate slots and collider
//! lists in place. Types here mirror the JSON fields the patcher touches;
//! `ItemCatalog` owns the records for the length of a run.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{ItemFamily, ItemId};
pub use index::ItemCatalog;
pub use model::{ColliderField, ItemProps, ItemRecord, Slot, SlotFilter, SlotProps};
