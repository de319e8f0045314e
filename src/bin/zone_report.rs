//! Prints how an item catalog classifies into zones, without patching it.
//!
//! Useful for spotting items a naming rule misses: anything absent from the
//! report will not be offered to carrier slots. Output is a JSON array of
//! classification results, one per requested feature area.

use anyhow::{Result, bail};
use armor_unlock::{ClassificationResult, FeatureArea, ItemCatalog, classify, init_logging};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    init_logging()?;

    let catalog = ItemCatalog::load(&args.items)?;
    let results: Vec<ClassificationResult> = args
        .areas
        .iter()
        .map(|area| classify(&catalog, area.rules()))
        .collect();

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

struct CliArgs {
    items: PathBuf,
    areas: Vec<FeatureArea>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut items = None;
        let mut areas = Vec::new();

        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--items" => match args.next() {
                    Some(value) if !value.is_empty() => items = Some(PathBuf::from(value)),
                    _ => bail!("--items requires a path"),
                },
                "--area" => match args.next() {
                    Some(value) => areas.push(FeatureArea::try_from(value.as_str())?),
                    None => bail!("--area requires plates|torso|helmet"),
                },
                "-h" | "--help" => usage_and_exit(0),
                other => {
                    eprintln!("zone-report: unknown argument '{other}'");
                    usage_and_exit(1);
                }
            }
        }

        let Some(items) = items else {
            bail!("--items is required");
        };
        if areas.is_empty() {
            areas.extend(FeatureArea::ALL);
        }
        Ok(Self { items, areas })
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!("Usage: zone-report --items PATH [--area plates|torso|helmet]...");
    std::process::exit(code);
}
