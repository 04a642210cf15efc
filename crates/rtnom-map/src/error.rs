//! Error types for mapping-table operations.

use std::fmt;

use rtnom_model::ExtraKind;

/// Errors from mapping-table mutations. The entry named by `key` is left
/// unchanged when any of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Raw structure key not present in the table.
    UnknownKey(String),
    /// Identifier not found in the formalized-structure catalog.
    UnknownIdentifier(String),
    /// The selected extra descriptor kind is not allowed for the current
    /// base identifier's category.
    ExtraNotEligible { key: String, kind: ExtraKind },
    /// The current base identifier's category does not allow a margin.
    MarginNotEligible(String),
    /// Preset margins are limited to organ-at-risk structures.
    PresetNotEligible(String),
    /// The current base identifier's category does not allow a dose.
    DoseNotEligible(String),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey(key) => write!(f, "Unknown raw structure key: {key}"),
            Self::UnknownIdentifier(id) => write!(f, "Identifier not in catalog: {id}"),
            Self::ExtraNotEligible { key, kind } => {
                write!(f, "Structure '{key}' does not take a {kind} descriptor")
            }
            Self::MarginNotEligible(key) => {
                write!(f, "Structure '{key}' does not take a margin")
            }
            Self::PresetNotEligible(key) => {
                write!(f, "Structure '{key}' does not offer margin presets")
            }
            Self::DoseNotEligible(key) => {
                write!(f, "Structure '{key}' does not take a dose")
            }
        }
    }
}

impl std::error::Error for MappingError {}
