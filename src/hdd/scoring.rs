use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::hdd::hypergeom::hyper;

/// How per-type hypergeometric estimates are grouped into one score per text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Plain sum over the text's types
    Sum,
    /// Sum divided by the text's token count
    /// No value for an empty text
    #[default]
    Mean,
    /// Sum divided by the square root of the token count
    /// No value for an empty text
    Root,
}

/// Score one tokenized text against corpus statistics.
///
/// Distinct types are collected in first-occurrence order (duplicates
/// collapse), each type contributes its at-least-once hypergeometric
/// estimate with the sample size capped at `max_sample_size`, and the
/// contributions are grouped per `aggregation`.
///
/// Types absent from the frequency table count as frequency 0, so ad-hoc
/// texts can be scored against a corpus that never saw them.
///
/// Returns `None` only for the degenerate case: an empty text under an
/// aggregation that divides by the token count.
pub fn score_text(
    tokens: &[String],
    token_counts: &IndexMap<String, u64>,
    total_tokens: u64,
    aggregation: Aggregation,
    max_sample_size: usize,
) -> Option<f64> {
    let ntokens = tokens.len();
    let sample_size = ntokens.min(max_sample_size) as u64;
    let types: IndexSet<&str> = tokens.iter().map(String::as_str).collect();

    let mut prob_sum = 0.0;
    for ty in &types {
        let freq = token_counts.get(*ty).copied().unwrap_or(0);
        prob_sum += hyper(0, sample_size, total_tokens, freq);
    }

    match aggregation {
        Aggregation::Sum => Some(prob_sum),
        Aggregation::Mean if ntokens == 0 => None,
        Aggregation::Mean => Some(prob_sum / ntokens as f64),
        Aggregation::Root if ntokens == 0 => None,
        Aggregation::Root => Some(prob_sum / (ntokens as f64).sqrt()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn counts(pairs: &[(&str, u64)]) -> IndexMap<String, u64> {
        pairs.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn aggregation_identities_hold() {
        let tokens = toks(&["a", "b", "a", "c", "b", "a"]);
        let table = counts(&[("a", 3), ("b", 2), ("c", 1), ("d", 4)]);
        let total = 10;
        let n = tokens.len() as f64;

        let sum = score_text(&tokens, &table, total, Aggregation::Sum, 75).unwrap();
        let mean = score_text(&tokens, &table, total, Aggregation::Mean, 75).unwrap();
        let root = score_text(&tokens, &table, total, Aggregation::Root, 75).unwrap();

        assert!((sum - mean * n).abs() < 1e-12);
        assert!((root - sum / n.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_text_is_none_under_mean_and_root() {
        let table = counts(&[("a", 3)]);
        assert_eq!(score_text(&[], &table, 3, Aggregation::Mean, 75), None);
        assert_eq!(score_text(&[], &table, 3, Aggregation::Root, 75), None);
        // sum of zero types is a valid zero
        assert_eq!(score_text(&[], &table, 3, Aggregation::Sum, 75), Some(0.0));
    }

    #[test]
    fn unseen_types_contribute_nothing() {
        // freq 0 makes the miss term equal the denominator, so 1 - 1 = 0
        let tokens = toks(&["nope", "never"]);
        let table = counts(&[("a", 5)]);
        let sum = score_text(&tokens, &table, 5, Aggregation::Sum, 75).unwrap();
        assert!(sum.abs() < 1e-12, "got {sum}");
    }

    #[test]
    fn sample_size_is_capped_by_max() {
        let tokens = toks(&["a", "b", "c", "d"]);
        let table = counts(&[("a", 2), ("b", 2), ("c", 2), ("d", 2)]);
        let capped = score_text(&tokens, &table, 8, Aggregation::Sum, 2).unwrap();
        // four types, each scored at the capped sample size of 2
        let expected = 4.0 * crate::hdd::hypergeom::hyper(0, 2, 8, 2);
        assert!((capped - expected).abs() < 1e-12, "got {capped}");
        let uncapped = score_text(&tokens, &table, 8, Aggregation::Sum, 75).unwrap();
        assert!((capped - uncapped).abs() > 1e-6, "cap had no effect");
    }

    #[test]
    fn duplicate_tokens_collapse_to_one_type() {
        let table = counts(&[("a", 4)]);
        let once = score_text(&toks(&["a"]), &table, 4, Aggregation::Sum, 75).unwrap();
        let thrice = score_text(&toks(&["a", "a", "a"]), &table, 4, Aggregation::Sum, 75).unwrap();
        // same single type; only the sample size differs between the two
        let expected = crate::hdd::hypergeom::hyper(0, 3, 4, 4);
        assert!((thrice - expected).abs() < 1e-12);
        assert!(once > 0.0 && thrice > 0.0);
    }
}
