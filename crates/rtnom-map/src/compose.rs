//! Canonical name composition.
//!
//! The composed name is `identifier`, an optional extra-descriptor
//! suffix, and optional margin and dose segments, joined under a small
//! delimiter grammar:
//!
//! - Laterality codes (`_L`, `_R`) and instance digits suffix the
//!   identifier directly.
//! - A numeric margin renders as two digits, a dose as plain decimal;
//!   each numeric segment is preceded by `_`.
//! - A fixed-vocabulary suffix comes before the numeric segments; free
//!   text comes after them, prefixed with `___` to mark the name as
//!   non-standard. Free text with no numeric segment is appended
//!   directly, unprefixed.
//! - A margin preset (`Zero`, `Nonuniform`) suffixes the name directly
//!   and ends composition; the numeric path is not used.
//!
//! Pure function: identical inputs always produce the identical string,
//! and malformed numbers cannot reach it because the argument types are
//! range-checked at construction.

use rtnom_model::{Dose, ExtraValue, MarginValue};

/// Compose the standardized name for a base identifier plus attributes.
pub fn compose(
    identifier: &str,
    extra: &ExtraValue,
    margin: Option<MarginValue>,
    dose: Option<Dose>,
) -> String {
    let suffix = extra.suffix();

    // Presets replace the numeric margin path entirely.
    if let Some(MarginValue::Preset(preset)) = margin {
        return format!("{identifier}{suffix}{}", preset.code());
    }

    let margin_text = match margin {
        Some(MarginValue::Width(width)) => Some(width.to_string()),
        Some(MarginValue::Preset(_)) | None => None,
    };
    let dose_text = dose.map(|dose| dose.to_string());
    let non_standard = extra.is_non_standard();

    match (margin_text, dose_text) {
        (None, None) => format!("{identifier}{suffix}"),
        (Some(margin), None) if non_standard => format!("{identifier}_{margin}___{suffix}"),
        (Some(margin), None) => format!("{identifier}{suffix}_{margin}"),
        (None, Some(dose)) if non_standard => format!("{identifier}_{dose}___{suffix}"),
        (None, Some(dose)) => format!("{identifier}{suffix}_{dose}"),
        (Some(margin), Some(dose)) if non_standard => {
            format!("{identifier}_{margin}_{dose}___{suffix}")
        }
        (Some(margin), Some(dose)) => format!("{identifier}{suffix}_{margin}_{dose}"),
    }
}

#[cfg(test)]
mod tests {
    use rtnom_model::{InstanceIndex, Laterality, Margin, MarginPreset};

    use super::*;

    fn margin(value: u32) -> Option<MarginValue> {
        Some(MarginValue::Width(Margin::new(value).unwrap()))
    }

    fn dose(value: u32) -> Option<Dose> {
        Some(Dose::new(value).unwrap())
    }

    #[test]
    fn bare_identifier() {
        assert_eq!(compose("CORD", &ExtraValue::None, None, None), "CORD");
    }

    #[test]
    fn target_volume_with_margin_and_dose() {
        let name = compose("PTV", &ExtraValue::None, margin(7), dose(5000));
        assert_eq!(name, "PTV_07_5000");
    }

    #[test]
    fn laterality_with_nonuniform_preset() {
        let name = compose(
            "PAROTID",
            &ExtraValue::Laterality(Laterality::Right),
            Some(MarginValue::Preset(MarginPreset::Nonuniform)),
            None,
        );
        assert_eq!(name, "PAROTID_R_PRV");
    }

    #[test]
    fn zero_preset_composes_to_bare_suffix() {
        let name = compose(
            "PAROTID",
            &ExtraValue::Laterality(Laterality::Left),
            Some(MarginValue::Preset(MarginPreset::Zero)),
            None,
        );
        assert_eq!(name, "PAROTID_L");
    }

    #[test]
    fn instance_index_suffixes_directly() {
        let extra = ExtraValue::Instance(InstanceIndex::new(2).unwrap());
        assert_eq!(compose("GTV", &extra, None, None), "GTV2");
    }

    #[test]
    fn free_text_after_margin_gets_the_marker() {
        let extra = ExtraValue::FreeText("loop".to_string());
        assert_eq!(compose("BOWEL", &extra, margin(3), None), "BOWEL_03___loop");
    }

    #[test]
    fn free_text_alone_is_unprefixed() {
        let extra = ExtraValue::FreeText("loop".to_string());
        assert_eq!(compose("BOWEL", &extra, None, None), "BOWELloop");
    }

    #[test]
    fn free_text_after_dose_gets_the_marker() {
        let extra = ExtraValue::FreeText("boost".to_string());
        assert_eq!(compose("CTV", &extra, None, dose(6600)), "CTV_6600___boost");
    }

    #[test]
    fn free_text_after_margin_and_dose() {
        let extra = ExtraValue::FreeText("boost".to_string());
        assert_eq!(
            compose("CTV", &extra, margin(5), dose(6600)),
            "CTV_05_6600___boost"
        );
    }

    #[test]
    fn empty_free_text_behaves_like_no_descriptor() {
        let extra = ExtraValue::FreeText(String::new());
        assert_eq!(compose("BOWEL", &extra, margin(3), None), "BOWEL_03");
    }

    #[test]
    fn laterality_precedes_numeric_segments() {
        let extra = ExtraValue::Laterality(Laterality::Left);
        assert_eq!(compose("LUNG", &extra, margin(5), None), "LUNG_L_05");
        assert_eq!(
            compose("PTV", &ExtraValue::None, None, dose(5400)),
            "PTV_5400"
        );
    }

    #[test]
    fn margin_always_renders_two_digits() {
        assert_eq!(compose("LUNG", &ExtraValue::None, margin(0), None), "LUNG_00");
        assert_eq!(compose("LUNG", &ExtraValue::None, margin(99), None), "LUNG_99");
    }
}
