#![deny(unsafe_code)]

//! Name-mapping rule engine for structure-set nomenclature.
//!
//! Given raw anatomical-structure labels and an externally supplied
//! catalog of formalized structures plus category sets, this crate
//! suggests the closest catalog entry per label, decides which optional
//! attributes (laterality or other extra descriptor, margin, dose) apply,
//! and composes the canonical standardized name for each selection.

pub mod classify;
pub mod compose;
pub mod error;
pub mod suggest;
pub mod table;

pub use classify::{Eligibility, classify};
pub use compose::compose;
pub use error::MappingError;
pub use suggest::{DEFAULT_CUTOFF, suggest, suggest_with_cutoff};
pub use table::{MappingTable, SuggestOptions, TableSummary};
