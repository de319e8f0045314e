//! Applies the armor unlock patch to an item catalog on disk.
//!
//! Loads `items.json`, the mod config, and optionally the bot config, runs
//! every enabled feature area, and prints the `PatchReport` as JSON on stdout.
//! Patched documents are only written when `--out` / `--bot-out` are given;
//! without them the run is a dry run.

use anyhow::{Context, Result, bail};
use armor_unlock::{BotConfig, ItemCatalog, ModConfig, apply, init_logging};
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

    let config = ModConfig::load(&args.config)?;
    let mut catalog = ItemCatalog::load(&args.items)?;
    let mut bots = match &args.bot_config {
        Some(path) => Some(BotConfig::load(path)?),
        None => None,
    };
    tracing::info!(items = catalog.len(), path = %args.items.display(), "loaded item catalog");

    let report = apply(&config, &mut catalog, bots.as_mut());

    if let Some(out) = &args.out {
        catalog
            .save(out)
            .with_context(|| format!("saving patched catalog to {}", out.display()))?;
        tracing::info!(path = %out.display(), "wrote patched catalog");
    }
    if let (Some(out), Some(bots)) = (&args.bot_out, &bots) {
        bots.save(out)
            .with_context(|| format!("saving patched bot config to {}", out.display()))?;
        tracing::info!(path = %out.display(), "wrote patched bot config");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

struct CliArgs {
    items: PathBuf,
    config: PathBuf,
    bot_config: Option<PathBuf>,
    out: Option<PathBuf>,
    bot_out: Option<PathBuf>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut items = None;
        let mut config = None;
        let mut bot_config = None;
        let mut out = None;
        let mut bot_out = None;

        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--items" => items = Some(next_path(&mut args, "--items")?),
                "--config" => config = Some(next_path(&mut args, "--config")?),
                "--bot-config" => bot_config = Some(next_path(&mut args, "--bot-config")?),
                "--out" => out = Some(next_path(&mut args, "--out")?),
                "--bot-out" => bot_out = Some(next_path(&mut args, "--bot-out")?),
                "-h" | "--help" => usage_and_exit(0),
                other => {
                    eprintln!("patch-catalog: unknown argument '{other}'");
                    usage_and_exit(1);
                }
            }
        }

        let Some(items) = items else {
            bail!("--items is required");
        };
        let Some(config) = config else {
            bail!("--config is required");
        };
        if bot_out.is_some() && bot_config.is_none() {
            bail!("--bot-out requires --bot-config");
        }

        Ok(Self {
            items,
            config,
            bot_config,
            out,
            bot_out,
        })
    }
}

fn next_path(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<PathBuf> {
    match args.next() {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => bail!("{flag} requires a path"),
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage: patch-catalog --items PATH --config PATH [--bot-config PATH] [--out PATH] [--bot-out PATH]"
    );
    std::process::exit(code);
}
