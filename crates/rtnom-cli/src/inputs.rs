//! Loading of the externally supplied catalog, category sets, and raw
//! structure files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use rtnom_model::{CategorySets, StructureCatalog};

pub fn load_catalog(path: &Path) -> Result<StructureCatalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog: {}", path.display()))?;
    parse_catalog(&contents)
        .with_context(|| format!("failed to parse catalog: {}", path.display()))
}

pub fn parse_catalog(json: &str) -> Result<StructureCatalog> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_categories(path: &Path) -> Result<CategorySets> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read category sets: {}", path.display()))?;
    parse_categories(&contents)
        .with_context(|| format!("failed to parse category sets: {}", path.display()))
}

pub fn parse_categories(json: &str) -> Result<CategorySets> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_raw_structures(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read raw structures: {}", path.display()))?;
    parse_raw_structures(&contents)
        .with_context(|| format!("failed to parse raw structures: {}", path.display()))
}

pub fn parse_raw_structures(json: &str) -> Result<BTreeMap<String, String>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_array() {
        let catalog = parse_catalog(
            r#"[
                {"identifier": "PTV", "display_name": "Planning Target Volume"},
                {"identifier": "CORD", "display_name": "Spinal Cord"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(0).map(|s| s.identifier.as_str()),
            Some("PTV")
        );
    }

    #[test]
    fn parses_category_sets_with_missing_keys() {
        let sets = parse_categories(
            r#"{
                "laterality": ["Parotid Gland"],
                "target_volume": ["Planning Target Volume"]
            }"#,
        )
        .unwrap();
        assert!(sets.laterality.contains("Parotid Gland"));
        assert!(sets.target_volume.contains("Planning Target Volume"));
        assert!(sets.free_text.is_empty());
    }

    #[test]
    fn parses_raw_structure_map() {
        let raw = parse_raw_structures(r#"{"roi-1": "ptv 70", "roi-2": "cord"}"#).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.get("roi-1").map(String::as_str), Some("ptv 70"));
    }

    #[test]
    fn rejects_malformed_catalog() {
        assert!(parse_catalog(r#"{"identifier": "PTV"}"#).is_err());
    }
}
