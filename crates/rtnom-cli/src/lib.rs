//! CLI library components for the structure nomenclature mapper.

pub mod logging;
