use serde::{Deserialize, Serialize};

use crate::descriptor::ExtraValue;
use crate::numeric::{Dose, MarginValue};

/// One raw structure's mapping: the original label, the chosen base
/// identifier, the optional attributes, and the composed name.
///
/// `standardized_name` is derived from the other fields; the mapping
/// table recomputes it on every mutation and nothing else writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Label as it appeared in the imported structure set.
    pub original_label: String,
    /// Canonical code of the selected formalized structure. Empty when
    /// the catalog was empty at initialization.
    pub base_identifier: String,
    /// Selected extra descriptor (laterality, instance index, or text).
    #[serde(default)]
    pub extra: ExtraValue,
    /// Selected margin, when the structure's category allows one.
    #[serde(default)]
    pub margin: Option<MarginValue>,
    /// Selected dose, when the structure's category allows one.
    #[serde(default)]
    pub dose: Option<Dose>,
    /// The composed standardized name.
    pub standardized_name: String,
}

impl MappingEntry {
    /// A fresh entry with no attributes selected yet. The caller is
    /// expected to compose and fill `standardized_name`.
    pub fn new(original_label: impl Into<String>, base_identifier: impl Into<String>) -> Self {
        let base_identifier = base_identifier.into();
        Self {
            original_label: original_label.into(),
            standardized_name: base_identifier.clone(),
            base_identifier,
            extra: ExtraValue::None,
            margin: None,
            dose: None,
        }
    }
}
