pub mod category;
pub mod descriptor;
pub mod entry;
pub mod error;
pub mod numeric;
pub mod structure;

pub use category::CategorySets;
pub use descriptor::{ExtraKind, ExtraValue, InstanceIndex, Laterality};
pub use entry::MappingEntry;
pub use error::{NomenclatureError, Result};
pub use numeric::{DOSE_MAX, Dose, MARGIN_MAX, Margin, MarginPreset, MarginValue};
pub use structure::{FormalizedStructure, StructureCatalog};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookups() {
        let catalog = StructureCatalog::new(vec![
            FormalizedStructure::new("PTV", "Planning Target Volume"),
            FormalizedStructure::new("PAROTID", "Parotid Gland"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.by_identifier("ptv").map(|s| s.display_name.as_str()),
            Some("Planning Target Volume")
        );
        assert_eq!(
            catalog
                .by_display_name("Parotid Gland")
                .map(|s| s.identifier.as_str()),
            Some("PAROTID")
        );
        assert!(catalog.by_identifier("GTV").is_none());
    }

    #[test]
    fn entry_serializes() {
        let mut entry = MappingEntry::new("ptv primary", "PTV");
        entry.margin = Some(MarginValue::Width(Margin::new(7).unwrap()));
        entry.dose = Some(Dose::new(5000).unwrap());
        entry.standardized_name = "PTV_07_5000".to_string();

        let json = serde_json::to_string(&entry).expect("serialize entry");
        let round: MappingEntry = serde_json::from_str(&json).expect("deserialize entry");
        assert_eq!(round, entry);
    }

    #[test]
    fn out_of_range_margin_fails_to_deserialize() {
        let result: std::result::Result<Margin, _> = serde_json::from_str("120");
        assert!(result.is_err());
    }
}
