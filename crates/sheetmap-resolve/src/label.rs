//! Candidate-label lookup against an input record.

use std::collections::BTreeMap;

/// Finds the input-map key matching a field at the given repetition index.
///
/// Candidates are tried in priority order:
/// - index > 0: `"<label> NN"` (two-digit zero-padded), then `"<label> N"`.
///   Upstream data sources disagree about zero-padding, so both forms count.
/// - index == 0: the bare canonical label.
/// - then every alias label in declared order, without index suffixing
///   (aliases are assumed already fully qualified by the data producer).
///
/// Matching is exact string equality; the map is not mutated. Returns the
/// matched key so the caller can remove it after consuming the value.
pub fn current_label(
    label: &str,
    alias_labels: &[String],
    index: u32,
    input: &BTreeMap<String, String>,
) -> Option<String> {
    let mut candidates: Vec<String> = Vec::new();
    if index > 0 {
        candidates.push(format!("{label} {index:02}"));
        candidates.push(format!("{label} {index}"));
    } else {
        candidates.push(label.to_string());
    }
    candidates.extend(alias_labels.iter().cloned());

    candidates.into_iter().find(|c| input.contains_key(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(keys: &[&str]) -> BTreeMap<String, String> {
        keys.iter()
            .map(|k| ((*k).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn bare_label_at_index_zero() {
        let input = map(&["Name"]);
        assert_eq!(current_label("Name", &[], 0, &input).as_deref(), Some("Name"));
    }

    #[test]
    fn indexed_label_is_not_tried_at_index_zero() {
        let input = map(&["Name 1"]);
        assert_eq!(current_label("Name", &[], 0, &input), None);
    }

    #[test]
    fn zero_padded_form_wins_over_plain() {
        let input = map(&["Item 01", "Item 1"]);
        assert_eq!(
            current_label("Item", &[], 1, &input).as_deref(),
            Some("Item 01")
        );
    }

    #[test]
    fn plain_indexed_form_matches_when_unpadded() {
        let input = map(&["Item 1"]);
        assert_eq!(
            current_label("Item", &[], 1, &input).as_deref(),
            Some("Item 1")
        );
    }

    #[test]
    fn padding_collapses_past_index_nine() {
        let input = map(&["Item 10"]);
        assert_eq!(
            current_label("Item", &[], 10, &input).as_deref(),
            Some("Item 10")
        );
    }

    #[test]
    fn aliases_follow_primary_candidates() {
        let aliases = vec!["Full Name".to_string()];
        let input = map(&["Full Name"]);
        assert_eq!(
            current_label("Name", &aliases, 0, &input).as_deref(),
            Some("Full Name")
        );
    }

    #[test]
    fn canonical_label_beats_alias() {
        let aliases = vec!["Full Name".to_string()];
        let input = map(&["Full Name", "Name"]);
        assert_eq!(
            current_label("Name", &aliases, 0, &input).as_deref(),
            Some("Name")
        );
    }

    #[test]
    fn aliases_are_never_index_suffixed() {
        let aliases = vec!["Alt".to_string()];
        let input = map(&["Alt 1"]);
        assert_eq!(current_label("Name", &aliases, 1, &input), None);
        let input = map(&["Alt"]);
        assert_eq!(
            current_label("Name", &aliases, 1, &input).as_deref(),
            Some("Alt")
        );
    }

    #[test]
    fn no_partial_or_case_insensitive_matching() {
        let input = map(&["name", "Name Extra"]);
        assert_eq!(current_label("Name", &[], 0, &input), None);
    }
}
