//! Word tokenizer and the ordered token set built on top of it.

use std::collections::HashSet;

use crate::analysis::stopwords::remove_stopwords;

/// Splits text into lower-cased word tokens.
///
/// A token is a maximal run of alphanumeric characters or `_`; everything else
/// separates tokens. Empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Set of tokens that remembers first-encounter order.
///
/// Keyword lists are cut at "first N", so iteration order has to be stable
/// across runs. A bare `HashSet` would not give us that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl TokenSet {
    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Tokens of `self` that also appear in `other`, in `self`'s order.
    pub fn intersection<'a>(&'a self, other: &'a TokenSet) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |t| other.contains(t))
    }

    /// Tokens of `self` absent from `other`, in `self`'s order.
    pub fn difference<'a>(&'a self, other: &'a TokenSet) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |t| !other.contains(t))
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TokenSet::default();
        for token in iter {
            if set.members.insert(token.clone()) {
                set.ordered.push(token);
            }
        }
        set
    }
}

/// Tokenize, drop stopwords, collapse duplicates.
pub fn preprocess(text: &str) -> TokenSet {
    remove_stopwords(tokenize(text)).into_iter().collect()
}
