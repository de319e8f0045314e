//! Validated in-memory item catalog.
//!
//! Records are keyed by id in a `BTreeMap` so every pass over the catalog
//! walks items in the same order, which keeps classification and the order of
//! appended allow-list entries deterministic.

use crate::catalog::{ItemFamily, ItemId, ItemRecord};
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq)]
/// Item templates keyed by id.
pub struct ItemCatalog {
    by_id: BTreeMap<ItemId, ItemRecord>,
}

impl ItemCatalog {
    /// Load and validate an `items.json` style table from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let table: BTreeMap<ItemId, ItemRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing item catalog {}", path.display()))?;
        Self::from_table(table).with_context(|| format!("validating {}", path.display()))
    }

    /// Build a catalog from an id-keyed table, rejecting keys that disagree
    /// with the record they point at.
    pub fn from_table(table: BTreeMap<ItemId, ItemRecord>) -> Result<Self> {
        for (key, record) in &table {
            validate_id(&record.id)?;
            if key != &record.id {
                bail!("catalog key {key} does not match record _id {}", record.id);
            }
        }
        Ok(Self { by_id: table })
    }

    /// Build a catalog from loose records; duplicate ids are an error.
    pub fn from_records(records: impl IntoIterator<Item = ItemRecord>) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        for record in records {
            validate_id(&record.id)?;
            if by_id.contains_key(&record.id) {
                bail!("duplicate item id {}", record.id);
            }
            by_id.insert(record.id.clone(), record);
        }
        Ok(Self { by_id })
    }

    /// Write the catalog back out as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.by_id)
            .with_context(|| format!("writing item catalog {}", path.display()))?;
        writer.flush()?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&ItemRecord> {
        self.by_id.get(id)
    }

    /// Iterates records in id order.
    pub fn records(&self) -> impl Iterator<Item = &ItemRecord> {
        self.by_id.values()
    }

    /// Records whose parent is `family`, in id order.
    pub fn in_family<'a>(&'a self, family: &'a ItemFamily) -> impl Iterator<Item = &'a ItemRecord> {
        self.by_id.values().filter(move |record| &record.parent == family)
    }

    pub fn in_family_mut<'a>(
        &'a mut self,
        family: &'a ItemFamily,
    ) -> impl Iterator<Item = &'a mut ItemRecord> {
        self.by_id
            .values_mut()
            .filter(move |record| &record.parent == family)
    }

    /// Records whose parent is any of `families`, in id order.
    pub fn in_families_mut<'a>(
        &'a mut self,
        families: &'a [ItemFamily],
    ) -> impl Iterator<Item = &'a mut ItemRecord> {
        self.by_id
            .values_mut()
            .filter(move |record| families.contains(&record.parent))
    }

    /// Number of records in `family`.
    pub fn family_count(&self, family: &ItemFamily) -> usize {
        self.in_family(family).count()
    }
}

fn validate_id(id: &ItemId) -> Result<()> {
    if id.0.trim().is_empty() {
        bail!("encountered item with no _id");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::NamedTempFile;

    fn record(id: &str, parent: &str) -> ItemRecord {
        serde_json::from_value(json!({"_id": id, "_name": id, "_parent": parent})).unwrap()
    }

    #[test]
    fn from_table_rejects_mismatched_keys() {
        let mut table = BTreeMap::new();
        table.insert(ItemId::from("a"), record("b", "x"));
        let err = ItemCatalog::from_table(table).expect_err("mismatch should fail");
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn from_records_rejects_duplicates_and_empty_ids() {
        let err = ItemCatalog::from_records([record("a", "x"), record("a", "y")])
            .expect_err("duplicate should fail");
        assert!(err.to_string().contains("duplicate item id a"));

        let err = ItemCatalog::from_records([record(" ", "x")]).expect_err("empty id");
        assert!(err.to_string().contains("no _id"));
    }

    #[test]
    fn family_iteration_is_ordered_by_id() {
        let catalog = ItemCatalog::from_records([
            record("c", "5448e54d4bdc2dcc718b4568"),
            record("a", "5448e54d4bdc2dcc718b4568"),
            record("b", "5a341c4086f77401f2541505"),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog
            .in_family(&ItemFamily::Armor)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(catalog.family_count(&ItemFamily::Headwear), 1);
        assert_eq!(catalog.family_count(&ItemFamily::ArmorPlate), 0);
    }

    #[test]
    fn load_and_save_round_trip() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        serde_json::to_writer(
            &mut file,
            &json!({
                "h1": {"_id": "h1", "_name": "helmet", "_parent": "5a341c4086f77401f2541505",
                       "_type": "Item", "_props": {"Weight": 1}}
            }),
        )?;
        let catalog = ItemCatalog::load(file.path())?;
        assert_eq!(catalog.len(), 1);

        let out = NamedTempFile::new()?;
        catalog.save(out.path())?;
        let reloaded = ItemCatalog::load(out.path())?;
        assert_eq!(reloaded, catalog);
        Ok(())
    }
}
