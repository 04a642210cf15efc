use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The five display-name sets that drive attribute eligibility.
///
/// Supplied by external configuration and immutable for a session. The
/// sets are not required to be disjoint; classification resolves overlap
/// by precedence (laterality, then multi-instance, then free text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySets {
    /// Paired structures that take a left/right qualifier.
    pub laterality: BTreeSet<String>,
    /// Structures that may occur more than once and take an index 1-9.
    pub multi_instance: BTreeSet<String>,
    /// Structures that accept a free-text descriptor.
    pub free_text: BTreeSet<String>,
    /// Organs at risk whose names may carry a margin (numeric or preset).
    pub risk_organ_margin: BTreeSet<String>,
    /// Target volumes; margin and dose both apply.
    pub target_volume: BTreeSet<String>,
}
