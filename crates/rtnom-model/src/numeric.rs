//! Validated numeric attributes: margins and doses.
//!
//! Range checks live in the constructors so the composer downstream can
//! assume every value it receives is already valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NomenclatureError, Result};

/// Largest accepted numeric margin, in millimetres.
pub const MARGIN_MAX: u32 = 99;
/// Largest accepted dose, in centigray.
pub const DOSE_MAX: u32 = 90_000;

/// Margin width in millimetres, restricted to 0..=99.
///
/// Renders as exactly two digits: `5` displays as `"05"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Margin(u8);

impl Margin {
    pub fn new(value: u32) -> Result<Self> {
        if value > MARGIN_MAX {
            return Err(NomenclatureError::MarginOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for Margin {
    type Error = NomenclatureError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Margin> for u32 {
    fn from(margin: Margin) -> Self {
        margin.get()
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Margin {
    type Err = NomenclatureError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| NomenclatureError::InvalidNumber(s.to_string()))?;
        Self::new(value)
    }
}

/// Prescribed dose in centigray, restricted to 0..=90000.
///
/// Renders as a plain decimal with no leading zeros.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Dose(u32);

impl Dose {
    pub fn new(value: u32) -> Result<Self> {
        if value > DOSE_MAX {
            return Err(NomenclatureError::DoseOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Dose {
    type Error = NomenclatureError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Dose> for u32 {
    fn from(dose: Dose) -> Self {
        dose.0
    }
}

impl fmt::Display for Dose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Dose {
    type Err = NomenclatureError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| NomenclatureError::InvalidNumber(s.to_string()))?;
        Self::new(value)
    }
}

/// Fixed margin presets offered for organs at risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginPreset {
    /// No margin; composes to an empty suffix.
    Zero,
    /// Non-uniform margin; composes to the `"_PRV"` suffix.
    Nonuniform,
}

impl MarginPreset {
    /// Suffix code appended to the base identifier and extra descriptor.
    pub fn code(self) -> &'static str {
        match self {
            MarginPreset::Zero => "",
            MarginPreset::Nonuniform => "_PRV",
        }
    }

    /// Selection label as offered to the user.
    pub fn label(self) -> &'static str {
        match self {
            MarginPreset::Zero => "0",
            MarginPreset::Nonuniform => "nonuniform",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "0" => Some(MarginPreset::Zero),
            l if l.eq_ignore_ascii_case("nonuniform") => Some(MarginPreset::Nonuniform),
            _ => None,
        }
    }
}

/// A margin selection: one of the fixed presets, or a numeric width.
///
/// Presets suffix the name directly and bypass the two-digit formatting
/// that numeric widths receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginValue {
    Preset(MarginPreset),
    Width(Margin),
}

impl MarginValue {
    /// Parse user-entered margin text. The preset labels `"0"` and
    /// `"nonuniform"` always take the preset path; anything else must be
    /// a whole number in range.
    pub fn parse(raw: &str) -> Result<Self> {
        if let Some(preset) = MarginPreset::from_label(raw) {
            return Ok(MarginValue::Preset(preset));
        }
        Margin::from_str(raw).map(MarginValue::Width)
    }

    pub fn is_preset(&self) -> bool {
        matches!(self, MarginValue::Preset(_))
    }
}
