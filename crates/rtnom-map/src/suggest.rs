//! Closest-match suggestion for raw structure labels.
//!
//! Uses Jaro-Winkler similarity over both the raw and normalized forms of
//! the label, the higher of the two winning. Advisory only: the result
//! seeds the initial mapping and never overrides an explicit selection.

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;

/// Minimum similarity for a candidate to be suggested.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Find the candidate closest to a raw label.
///
/// Returns the winning candidate's position in `candidates`, or `None`
/// when no candidate reaches [`DEFAULT_CUTOFF`]. Deterministic: on equal
/// scores the earliest candidate wins.
pub fn suggest(raw_label: &str, candidates: &[&str]) -> Option<usize> {
    suggest_with_cutoff(raw_label, candidates, DEFAULT_CUTOFF)
}

/// [`suggest`] with an explicit similarity cutoff.
pub fn suggest_with_cutoff(raw_label: &str, candidates: &[&str], cutoff: f64) -> Option<usize> {
    let label_upper = raw_label.to_uppercase();
    let label_norm = normalize_text(raw_label);

    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let score_raw = jaro_similarity(label_upper.chars(), candidate.to_uppercase().chars());
        let score_norm = jaro_similarity(label_norm.chars(), normalize_text(candidate).chars());
        let score = score_raw.max(score_norm);
        if score < cutoff {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }

    if let Some((index, score)) = best {
        tracing::debug!(
            label = raw_label,
            candidate = candidates[index],
            score,
            "suggested closest match"
        );
    }
    best.map(|(index, _)| index)
}

/// Normalize a label for comparison.
///
/// - Trims whitespace
/// - Converts to lowercase
/// - Replaces separators with spaces
fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        let candidates = ["Spinal Cord", "Parotid Gland", "Planning Target Volume"];
        assert_eq!(suggest("Parotid Gland", &candidates), Some(1));
    }

    #[test]
    fn separators_do_not_matter() {
        let candidates = ["Spinal Cord", "Planning Target Volume"];
        assert_eq!(suggest("planning_target_volume", &candidates), Some(1));
        assert_eq!(suggest("SPINAL-CORD", &candidates), Some(0));
    }

    #[test]
    fn close_labels_still_match() {
        let candidates = ["Spinal Cord", "Parotid Gland"];
        assert_eq!(suggest("parotid gl", &candidates), Some(1));
    }

    #[test]
    fn empty_candidate_list_yields_none() {
        assert_eq!(suggest("anything", &[]), None);
    }

    #[test]
    fn dissimilar_label_yields_none() {
        let candidates = ["Spinal Cord", "Parotid Gland"];
        assert_eq!(suggest("xyzzy-123", &candidates), None);
    }

    #[test]
    fn first_candidate_wins_ties() {
        let candidates = ["Lung", "Lung"];
        assert_eq!(suggest("lung", &candidates), Some(0));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let candidates = ["Heart", "Liver", "Lung"];
        let first = suggest("lver", &candidates);
        let second = suggest("lver", &candidates);
        assert_eq!(first, second);
    }
}
