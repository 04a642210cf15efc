//! Property tests for the composition grammar.

use proptest::prelude::*;

use rtnom_map::compose;
use rtnom_model::{Dose, ExtraValue, Laterality, Margin, MarginValue};

proptest! {
    #[test]
    fn margin_renders_exactly_two_digits(value in 0u32..=99) {
        let margin = MarginValue::Width(Margin::new(value).unwrap());
        let name = compose("PTV", &ExtraValue::None, Some(margin), None);
        prop_assert_eq!(name, format!("PTV_{value:02}"));
    }

    #[test]
    fn dose_renders_plain_decimal(value in 0u32..=90_000) {
        let dose = Dose::new(value).unwrap();
        let name = compose("PTV", &ExtraValue::None, None, Some(dose));
        prop_assert_eq!(name, format!("PTV_{value}"));
    }

    #[test]
    fn compose_is_pure(
        margin in proptest::option::of(0u32..=99),
        dose in proptest::option::of(0u32..=90_000),
        text in "[a-z]{0,8}",
    ) {
        let extra = ExtraValue::FreeText(text);
        let margin = margin.map(|value| MarginValue::Width(Margin::new(value).unwrap()));
        let dose = dose.map(|value| Dose::new(value).unwrap());
        let first = compose("CTV", &extra, margin, dose);
        let second = compose("CTV", &extra, margin, dose);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn free_text_marker_appears_only_after_numeric_segments(
        text in "[a-z]{1,8}",
        value in 0u32..=99,
    ) {
        let extra = ExtraValue::FreeText(text.clone());
        let margin = MarginValue::Width(Margin::new(value).unwrap());

        let with_margin = compose("BOWEL", &extra, Some(margin), None);
        prop_assert!(with_margin.ends_with(&format!("___{}", text)));

        let without = compose("BOWEL", &extra, None, None);
        prop_assert!(!without.contains("___"));
        prop_assert!(without.ends_with(&text));
    }

    #[test]
    fn standard_suffix_precedes_numeric_segments(value in 0u32..=99) {
        let margin = MarginValue::Width(Margin::new(value).unwrap());
        let name = compose(
            "LUNG",
            &ExtraValue::Laterality(Laterality::Left),
            Some(margin),
            None,
        );
        prop_assert_eq!(name, format!("LUNG_L_{value:02}"));
    }
}
