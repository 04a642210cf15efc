//! Subcommand implementations.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use rtnom_map::{MappingTable, SuggestOptions};
use rtnom_model::{Dose, ExtraValue, InstanceIndex, MappingEntry, MarginValue};

use crate::cli::{CatalogArgs, ComposeArgs, MapArgs};
use crate::inputs::{load_catalog, load_categories, load_raw_structures};
use crate::summary::print_catalog;

pub fn run_map(args: &MapArgs) -> Result<MappingTable> {
    let catalog = load_catalog(&args.catalog)?;
    let sets = load_categories(&args.categories)?;
    let raw = load_raw_structures(&args.raw_file)?;
    tracing::info!(
        structures = raw.len(),
        catalog = catalog.len(),
        "building mapping table"
    );

    let options = SuggestOptions {
        enabled: !args.no_suggest,
        cutoff: args.cutoff,
    };
    let table = MappingTable::initialize_with(&raw, catalog, sets, options);

    let summary = table.summary();
    tracing::info!(
        total = summary.total,
        non_standard = summary.non_standard,
        "mapping table ready"
    );

    if let Some(path) = &args.output {
        write_mapping(&table, path)?;
    }
    Ok(table)
}

fn write_mapping(table: &MappingTable, path: &Path) -> Result<()> {
    let entries: BTreeMap<&str, &MappingEntry> = table.entries().collect();
    let json =
        serde_json::to_string_pretty(&entries).context("failed to serialize mapping table")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write mapping to {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote mapping table");
    Ok(())
}

pub fn run_compose(args: &ComposeArgs) -> Result<String> {
    let extra = resolve_extra(args)?;
    let margin = args
        .margin
        .as_deref()
        .map(MarginValue::parse)
        .transpose()?;
    let dose = args.dose.map(Dose::new).transpose()?;
    Ok(rtnom_map::compose(&args.identifier, &extra, margin, dose))
}

fn resolve_extra(args: &ComposeArgs) -> Result<ExtraValue> {
    if let Some(side) = args.laterality {
        return Ok(ExtraValue::Laterality(side.into()));
    }
    if let Some(index) = args.instance {
        return Ok(ExtraValue::Instance(InstanceIndex::new(index)?));
    }
    if let Some(text) = &args.free_text {
        return Ok(ExtraValue::FreeText(text.clone()));
    }
    Ok(ExtraValue::None)
}

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let sets = match &args.categories {
        Some(path) => Some(load_categories(path)?),
        None => None,
    };
    print_catalog(&catalog, sets.as_ref());
    Ok(())
}
