//! Mapping-table orchestration.
//!
//! The table owns every `MappingEntry` and is the only writer. Each
//! mutation validates eligibility against the current base identifier's
//! category, applies the change, and recomposes the standardized name
//! before returning; a rejected change leaves the entry untouched.

use std::collections::BTreeMap;

use rtnom_model::{
    CategorySets, Dose, ExtraValue, MappingEntry, MarginValue, StructureCatalog,
};

use crate::classify::{Eligibility, classify};
use crate::compose::compose;
use crate::error::MappingError;
use crate::suggest::{DEFAULT_CUTOFF, suggest_with_cutoff};

/// Options for the initial suggestion pass.
#[derive(Debug, Clone, Copy)]
pub struct SuggestOptions {
    /// When false, every raw label maps to the first catalog entry.
    pub enabled: bool,
    /// Minimum similarity for a suggestion to be taken.
    pub cutoff: f64,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

/// Summary counts over the current table contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    /// Number of raw structures in the table.
    pub total: usize,
    /// Entries carrying a non-standard (free-text) descriptor.
    pub non_standard: usize,
    /// Entries with a margin set.
    pub with_margin: usize,
    /// Entries with a dose set.
    pub with_dose: usize,
}

/// In-memory mapping from raw structure keys to their entries.
#[derive(Debug, Clone)]
pub struct MappingTable {
    catalog: StructureCatalog,
    sets: CategorySets,
    entries: BTreeMap<String, MappingEntry>,
}

impl MappingTable {
    /// Build the table from externally supplied raw structures, catalog,
    /// and category sets, seeding each entry's base identifier with the
    /// closest catalog match.
    pub fn initialize(
        raw_structures: &BTreeMap<String, String>,
        catalog: StructureCatalog,
        sets: CategorySets,
    ) -> Self {
        Self::initialize_with(raw_structures, catalog, sets, SuggestOptions::default())
    }

    /// [`Self::initialize`] with explicit suggestion options.
    ///
    /// A label with no candidate above the cutoff, and every label when
    /// suggestion is disabled, maps to the first catalog entry. An empty
    /// catalog yields entries with an empty base identifier.
    pub fn initialize_with(
        raw_structures: &BTreeMap<String, String>,
        catalog: StructureCatalog,
        sets: CategorySets,
        options: SuggestOptions,
    ) -> Self {
        let candidates = catalog.display_names();
        let mut entries = BTreeMap::new();
        for (key, label) in raw_structures {
            let index = if options.enabled {
                match suggest_with_cutoff(label, &candidates, options.cutoff) {
                    Some(index) => index,
                    None => {
                        tracing::info!(
                            key = %key,
                            label = %label,
                            "no close match; defaulting to first catalog entry"
                        );
                        0
                    }
                }
            } else {
                0
            };
            let base = catalog
                .get(index)
                .map(|structure| structure.identifier.clone())
                .unwrap_or_default();
            let mut entry = MappingEntry::new(label.clone(), base);
            Self::recompose(&mut entry);
            entries.insert(key.clone(), entry);
        }
        Self {
            catalog,
            sets,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn catalog(&self) -> &StructureCatalog {
        &self.catalog
    }

    pub fn category_sets(&self) -> &CategorySets {
        &self.sets
    }

    /// Current entry for a raw structure key.
    pub fn entry(&self, key: &str) -> Option<&MappingEntry> {
        self.entries.get(key)
    }

    /// All entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Attribute eligibility for a key's current base identifier. An
    /// identifier missing from the catalog (including the empty one from
    /// an empty-catalog initialization) is fully restricted.
    pub fn eligibility(&self, key: &str) -> Result<Eligibility, MappingError> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| MappingError::UnknownKey(key.to_string()))?;
        Ok(self.classify_identifier(&entry.base_identifier))
    }

    /// Change the base identifier for a key. Attributes the new
    /// identifier's category no longer allows are cleared, then the name
    /// is recomposed.
    pub fn set_base_identifier(&mut self, key: &str, identifier: &str) -> Result<(), MappingError> {
        let structure = self
            .catalog
            .by_identifier(identifier)
            .ok_or_else(|| MappingError::UnknownIdentifier(identifier.to_string()))?;
        let canonical = structure.identifier.clone();
        let eligibility = classify(&structure.display_name, &self.sets);

        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| MappingError::UnknownKey(key.to_string()))?;
        entry.base_identifier = canonical;
        if !eligibility.permits_extra(&entry.extra) {
            entry.extra = ExtraValue::None;
        }
        if entry.margin.is_some_and(|margin| !eligibility.permits_margin(margin)) {
            entry.margin = None;
        }
        if entry.dose.is_some() && !eligibility.permits_dose() {
            entry.dose = None;
        }
        Self::recompose(entry);
        Ok(())
    }

    /// Select an extra descriptor for a key.
    pub fn set_extra(&mut self, key: &str, extra: ExtraValue) -> Result<(), MappingError> {
        let eligibility = self.eligibility(key)?;
        if !eligibility.permits_extra(&extra) {
            return Err(MappingError::ExtraNotEligible {
                key: key.to_string(),
                kind: extra.kind(),
            });
        }
        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| MappingError::UnknownKey(key.to_string()))?;
        entry.extra = extra;
        Self::recompose(entry);
        Ok(())
    }

    /// Set or clear the margin for a key.
    pub fn set_margin(&mut self, key: &str, margin: Option<MarginValue>) -> Result<(), MappingError> {
        let eligibility = self.eligibility(key)?;
        if let Some(margin) = margin {
            if !eligibility.margin_enabled {
                return Err(MappingError::MarginNotEligible(key.to_string()));
            }
            if margin.is_preset() && !eligibility.margin_presets {
                return Err(MappingError::PresetNotEligible(key.to_string()));
            }
        }
        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| MappingError::UnknownKey(key.to_string()))?;
        entry.margin = margin;
        Self::recompose(entry);
        Ok(())
    }

    /// Set or clear the dose for a key.
    pub fn set_dose(&mut self, key: &str, dose: Option<Dose>) -> Result<(), MappingError> {
        let eligibility = self.eligibility(key)?;
        if dose.is_some() && !eligibility.permits_dose() {
            return Err(MappingError::DoseNotEligible(key.to_string()));
        }
        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| MappingError::UnknownKey(key.to_string()))?;
        entry.dose = dose;
        Self::recompose(entry);
        Ok(())
    }

    /// The externally consumed output: raw key to standardized name.
    pub fn standardized_names(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.standardized_name.clone()))
            .collect()
    }

    /// Summary counts for logging and display.
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            total: self.entries.len(),
            non_standard: self
                .entries
                .values()
                .filter(|entry| entry.extra.is_non_standard())
                .count(),
            with_margin: self
                .entries
                .values()
                .filter(|entry| entry.margin.is_some())
                .count(),
            with_dose: self
                .entries
                .values()
                .filter(|entry| entry.dose.is_some())
                .count(),
        }
    }

    fn classify_identifier(&self, identifier: &str) -> Eligibility {
        match self.catalog.by_identifier(identifier) {
            Some(structure) => classify(&structure.display_name, &self.sets),
            None => Eligibility::NONE,
        }
    }

    fn recompose(entry: &mut MappingEntry) {
        entry.standardized_name =
            compose(&entry.base_identifier, &entry.extra, entry.margin, entry.dose);
    }
}
