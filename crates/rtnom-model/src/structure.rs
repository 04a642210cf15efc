use serde::{Deserialize, Serialize};

/// A catalog entry defining the canonical code and human-readable display
/// name a raw structure can be mapped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormalizedStructure {
    /// Canonical code used as the base of every composed name.
    pub identifier: String,
    /// Display name shown to reviewers; category sets key on this.
    pub display_name: String,
}

impl FormalizedStructure {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}

/// Ordered collection of formalized structures, supplied externally.
///
/// Order is preserved as loaded; suggestion indices and the position-0
/// fallback both refer to this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureCatalog {
    structures: Vec<FormalizedStructure>,
}

impl StructureCatalog {
    pub fn new(structures: Vec<FormalizedStructure>) -> Self {
        Self { structures }
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FormalizedStructure> {
        self.structures.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormalizedStructure> {
        self.structures.iter()
    }

    /// Display names in catalog order, for use as suggestion candidates.
    pub fn display_names(&self) -> Vec<&str> {
        self.structures
            .iter()
            .map(|structure| structure.display_name.as_str())
            .collect()
    }

    /// Find a structure by its canonical identifier (case-insensitive).
    pub fn by_identifier(&self, identifier: &str) -> Option<&FormalizedStructure> {
        self.structures
            .iter()
            .find(|structure| structure.identifier.eq_ignore_ascii_case(identifier))
    }

    /// Find a structure by its display name (exact match).
    pub fn by_display_name(&self, display_name: &str) -> Option<&FormalizedStructure> {
        self.structures
            .iter()
            .find(|structure| structure.display_name == display_name)
    }
}
