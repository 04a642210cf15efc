//! Extra-descriptor vocabularies: laterality codes, multi-instance
//! indices, and free text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NomenclatureError, Result};

/// Which optional extra-descriptor group applies to a structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    #[default]
    None,
    Laterality,
    MultiInstance,
    FreeText,
}

impl ExtraKind {
    /// Canonical label as shown in listings.
    pub fn as_str(self) -> &'static str {
        match self {
            ExtraKind::None => "none",
            ExtraKind::Laterality => "laterality",
            ExtraKind::MultiInstance => "multi-instance",
            ExtraKind::FreeText => "free text",
        }
    }
}

impl fmt::Display for ExtraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Left/right body-side qualifier for paired structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Laterality {
    Left,
    Right,
}

impl Laterality {
    /// Suffix code appended to the base identifier.
    pub fn code(self) -> &'static str {
        match self {
            Laterality::Left => "_L",
            Laterality::Right => "_R",
        }
    }

    /// Selection label as offered to the user.
    pub fn label(self) -> &'static str {
        match self {
            Laterality::Left => "left",
            Laterality::Right => "right",
        }
    }
}

impl FromStr for Laterality {
    type Err = NomenclatureError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("left") {
            Ok(Laterality::Left)
        } else if trimmed.eq_ignore_ascii_case("right") {
            Ok(Laterality::Right)
        } else {
            Err(NomenclatureError::UnknownLaterality(s.to_string()))
        }
    }
}

/// Instance index for multi-instance structures, restricted to 1..=9.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct InstanceIndex(u8);

impl InstanceIndex {
    pub fn new(value: u8) -> Result<Self> {
        if (1..=9).contains(&value) {
            Ok(Self(value))
        } else {
            Err(NomenclatureError::InstanceOutOfRange(u32::from(value)))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for InstanceIndex {
    type Error = NomenclatureError;

    fn try_from(value: u32) -> Result<Self> {
        let narrowed =
            u8::try_from(value).map_err(|_| NomenclatureError::InstanceOutOfRange(value))?;
        Self::new(narrowed)
    }
}

impl From<InstanceIndex> for u32 {
    fn from(index: InstanceIndex) -> Self {
        u32::from(index.0)
    }
}

impl fmt::Display for InstanceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The selected extra descriptor for a mapping entry.
///
/// `None` covers both "no descriptor applies" and the empty laterality
/// selection. Free text is the only variant treated as non-standard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraValue {
    #[default]
    None,
    Laterality(Laterality),
    Instance(InstanceIndex),
    FreeText(String),
}

impl ExtraValue {
    pub fn kind(&self) -> ExtraKind {
        match self {
            ExtraValue::None => ExtraKind::None,
            ExtraValue::Laterality(_) => ExtraKind::Laterality,
            ExtraValue::Instance(_) => ExtraKind::MultiInstance,
            ExtraValue::FreeText(_) => ExtraKind::FreeText,
        }
    }

    /// Suffix appended to the base identifier, before any non-standard
    /// marking.
    pub fn suffix(&self) -> String {
        match self {
            ExtraValue::None => String::new(),
            ExtraValue::Laterality(side) => side.code().to_string(),
            ExtraValue::Instance(index) => index.to_string(),
            ExtraValue::FreeText(text) => text.clone(),
        }
    }

    /// True for non-empty free text: the descriptor is outside the fixed
    /// vocabularies and gets the distinct `"___"` delimiter when it
    /// follows a margin or dose segment.
    pub fn is_non_standard(&self) -> bool {
        matches!(self, ExtraValue::FreeText(text) if !text.is_empty())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ExtraValue::None)
    }
}
