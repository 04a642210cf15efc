//! Category-driven attribute eligibility.
//!
//! Which optional attribute groups apply to a structure is decided solely
//! by which of the five category sets its display name belongs to. The
//! classifier is total: a display name in no set yields the maximal
//! restriction rather than an error.

use serde::{Deserialize, Serialize};

use rtnom_model::{CategorySets, ExtraKind, ExtraValue, MarginValue};

/// Which optional attribute groups a formalized structure supports.
///
/// Consumers enable or disable the matching inputs from this and seed
/// their allowed value sets from the fixed vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Extra-descriptor group; the first matching category wins.
    pub extra_kind: ExtraKind,
    /// A margin may be set (organ-at-risk or target volume).
    pub margin_enabled: bool,
    /// The fixed margin presets are offered (organ-at-risk only).
    pub margin_presets: bool,
    /// A dose may be set (target volume only).
    pub dose_enabled: bool,
}

impl Eligibility {
    /// Maximal restriction: no extra descriptor, margin and dose disabled.
    pub const NONE: Eligibility = Eligibility {
        extra_kind: ExtraKind::None,
        margin_enabled: false,
        margin_presets: false,
        dose_enabled: false,
    };

    /// Whether the given extra-descriptor selection is allowed. Clearing
    /// the descriptor is always allowed.
    pub fn permits_extra(&self, extra: &ExtraValue) -> bool {
        extra.is_none() || extra.kind() == self.extra_kind
    }

    /// Whether the given margin selection is allowed.
    pub fn permits_margin(&self, margin: MarginValue) -> bool {
        self.margin_enabled && (!margin.is_preset() || self.margin_presets)
    }

    pub fn permits_dose(&self) -> bool {
        self.dose_enabled
    }
}

/// Classify a display name against the five category sets.
///
/// Extra-descriptor precedence is laterality, then multi-instance, then
/// free text; margin and dose eligibility are independent of that choice.
pub fn classify(display_name: &str, sets: &CategorySets) -> Eligibility {
    let extra_kind = if sets.laterality.contains(display_name) {
        ExtraKind::Laterality
    } else if sets.multi_instance.contains(display_name) {
        ExtraKind::MultiInstance
    } else if sets.free_text.contains(display_name) {
        ExtraKind::FreeText
    } else {
        ExtraKind::None
    };

    let risk_organ = sets.risk_organ_margin.contains(display_name);
    let target_volume = sets.target_volume.contains(display_name);

    Eligibility {
        extra_kind,
        margin_enabled: risk_organ || target_volume,
        margin_presets: risk_organ,
        dose_enabled: target_volume,
    }
}
