//! Similarity metrics: token-set overlap and character-bigram string similarity.
//!
//! All functions are pure and symmetric where the metric is symmetric.

use crate::analysis::tokenizer::TokenSet;

/// Jaccard index of two token sets as a percentage in [0, 100].
/// Returns 0 when both sets are empty.
pub fn jaccard_percent(a: &TokenSet, b: &TokenSet) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64 * 100.0
}

/// Share of `target` tokens also present in `found`, as a percentage in [0, 100].
/// Returns 0 when `target` is empty.
pub fn coverage_percent(found: &TokenSet, target: &TokenSet) -> f64 {
    if target.is_empty() {
        return 0.0;
    }
    target.intersection(found).count() as f64 / target.len() as f64 * 100.0
}

/// Dice coefficient over character bigrams, in [0, 1].
///
/// Whitespace is ignored. Identical strings score 1.0; a string shorter than
/// two characters cannot form a bigram and scores 0.0 against anything else.
/// Comparison is case-sensitive, so callers lower-case first.
pub fn string_similarity(first: &str, second: &str) -> f64 {
    strsim::sorensen_dice(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::preprocess;

    #[test]
    fn test_jaccard_identical_sets_is_100() {
        let a = preprocess("rust tokio axum");
        assert!((jaccard_percent(&a, &a) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jaccard_empty_union_is_zero() {
        let empty = TokenSet::default();
        assert_eq!(jaccard_percent(&empty, &empty), 0.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // {react, redux} vs {react, typescript}: 1 shared / 3 total
        let a = preprocess("react redux");
        let b = preprocess("react typescript");
        let score = jaccard_percent(&a, &b);
        assert!((score - 100.0 / 3.0).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_jaccard_is_symmetric() {
        let pairs = [
            ("Senior Rust engineer", "Rust engineer wanted, senior level"),
            ("", "anything at all"),
            ("python sql", "css html"),
        ];
        for (x, y) in pairs {
            let (a, b) = (preprocess(x), preprocess(y));
            assert_eq!(jaccard_percent(&a, &b), jaccard_percent(&b, &a));
        }
    }

    #[test]
    fn test_coverage_empty_target_is_zero() {
        let found = preprocess("rust");
        assert_eq!(coverage_percent(&found, &TokenSet::default()), 0.0);
    }

    #[test]
    fn test_coverage_counts_target_share() {
        let found = preprocess("react");
        let target = preprocess("react typescript");
        assert!((coverage_percent(&found, &target) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_string_similarity_identical_is_one() {
        assert_eq!(string_similarity("closures", "closures"), 1.0);
        assert_eq!(string_similarity("", ""), 1.0);
    }

    #[test]
    fn test_string_similarity_short_input_is_zero() {
        assert_eq!(string_similarity("a", "abc"), 0.0);
        assert_eq!(string_similarity("", "abc"), 0.0);
    }

    #[test]
    fn test_string_similarity_known_value() {
        // "night" -> ni ig gh ht ; "nacht" -> na ac ch ht ; shared {ht}
        let score = string_similarity("night", "nacht");
        assert!((score - 0.25).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_string_similarity_ignores_whitespace() {
        assert_eq!(string_similarity("event loop", "eventloop"), 1.0);
    }

    #[test]
    fn test_string_similarity_counts_repeated_bigrams_once_each() {
        // "aaaa" has three "aa" bigrams, "aa" has one: 2*1 / (3+1)
        let score = string_similarity("aaaa", "aa");
        assert!((score - 0.5).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_string_similarity_agrees_with_sorensen_dice() {
        let pairs = [
            ("night", "nacht"),
            ("aaaa", "aa"),
            ("event loop", "eventloop"),
            ("", ""),
            ("i handled the conflict calmly", "describe a conflict with a colleague"),
        ];
        for (x, y) in pairs {
            assert_eq!(string_similarity(x, y), strsim::sorensen_dice(x, y));
        }
    }

    #[test]
    fn test_string_similarity_is_symmetric_and_bounded() {
        let pairs = [
            ("i used hooks to manage state", "what are react hooks"),
            ("explain the virtual dom", "the dom is virtual"),
            ("xyz", "abcdef"),
        ];
        for (x, y) in pairs {
            let forward = string_similarity(x, y);
            assert_eq!(forward, string_similarity(y, x));
            assert!((0.0..=1.0).contains(&forward));
        }
    }
}
