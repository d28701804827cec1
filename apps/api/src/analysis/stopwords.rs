//! Built-in English stopword list.

use std::collections::HashSet;
use std::sync::OnceLock;

/// High-frequency, low-information English words plus single letters and digits.
const ENGLISH_STOPWORDS: &[&str] = &[
    "about", "after", "all", "also", "am", "an", "and", "another", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "between", "both", "but", "by", "came", "can",
    "come", "could", "did", "do", "each", "for", "from", "get", "got", "has", "had", "he",
    "have", "her", "here", "him", "himself", "his", "how", "if", "in", "into", "is", "it",
    "like", "make", "many", "me", "might", "more", "most", "much", "must", "my", "never", "now",
    "of", "on", "only", "or", "other", "our", "out", "over", "said", "same", "see", "should",
    "since", "some", "still", "such", "take", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "up", "very",
    "was", "way", "we", "well", "were", "what", "where", "which", "while", "who", "with",
    "would", "you", "your", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
    "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "_", "$", "0", "1", "2",
    "3", "4", "5", "6", "7", "8", "9",
];

fn stopword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH_STOPWORDS.iter().copied().collect())
}

pub fn is_stopword(token: &str) -> bool {
    stopword_set().contains(token)
}

/// Drops stopwords, keeping the remaining tokens in their original order.
pub fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| !is_stopword(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_removes_function_words() {
        let kept = remove_stopwords(owned(&["the", "rust", "and", "is", "fast"]));
        assert_eq!(kept, owned(&["rust", "fast"]));
    }

    #[test]
    fn test_preserves_order() {
        let kept = remove_stopwords(owned(&["sql", "of", "css", "python"]));
        assert_eq!(kept, owned(&["sql", "css", "python"]));
    }

    #[test]
    fn test_technology_keys_are_not_stopwords() {
        for key in ["javascript", "react", "node", "python", "sql", "css"] {
            assert!(!is_stopword(key), "{key} must survive stopword filtering");
        }
    }

    #[test]
    fn test_single_letters_are_stopwords() {
        assert!(is_stopword("a"));
        assert!(is_stopword("x"));
    }

    #[test]
    fn test_single_digits_are_stopwords() {
        let kept = remove_stopwords(owned(&["5", "years", "6", "10"]));
        assert_eq!(kept, owned(&["years", "10"]));
    }

    #[test]
    fn test_empty_input() {
        assert!(remove_stopwords(Vec::new()).is_empty());
    }
}
