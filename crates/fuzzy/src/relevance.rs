//! Relevance tiers for search-as-you-type.
//!
//! A tier says how a query relates to a text; it does not sort anything.

use crate::score::normalized_score;
use crate::text::{normalize, TextInput};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Relevance score levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceScore {
    /// No match
    None = 0,
    /// Whole text or one of its words is within the fuzzy threshold
    Fuzzy = 10,
    /// Contains substring
    Contains = 20,
    /// A word starts with the query
    WordBoundary = 30,
    /// Starts with query
    StartsWith = 40,
    /// Exact match
    Exact = 50,
}

impl RelevanceScore {
    /// Numeric weight of the tier (0-50).
    #[inline]
    pub fn weight(self) -> u32 {
        self as u32
    }
}

/// Classify how well `query` matches `text`.
///
/// Both sides are lower-cased and trimmed. An empty query never matches.
///
/// # Arguments
/// * `text` - The text to score (e.g. a product title)
/// * `query` - The search query
/// * `threshold` - Maximum fuzzy score for the [`RelevanceScore::Fuzzy`] tier
///
/// # Example
/// ```
/// use techtrend_fuzzy::{calculate_relevance, RelevanceScore, DEFAULT_THRESHOLD};
///
/// let tier = calculate_relevance("Wireless Mouse", "mouse", DEFAULT_THRESHOLD);
/// assert_eq!(tier, RelevanceScore::WordBoundary);
/// ```
pub fn calculate_relevance<T, Q>(text: &T, query: &Q, threshold: f64) -> RelevanceScore
where
    T: TextInput + ?Sized,
    Q: TextInput + ?Sized,
{
    let text = normalize(text);
    let query = normalize(query);

    if query.is_empty() {
        return RelevanceScore::None;
    }

    if text == query {
        return RelevanceScore::Exact;
    }

    if text.starts_with(&query) {
        return RelevanceScore::StartsWith;
    }

    let mut words = text.unicode_word_indices();
    if words.any(|(offset, _)| text[offset..].starts_with(&query)) {
        return RelevanceScore::WordBoundary;
    }

    if text.contains(&query) {
        return RelevanceScore::Contains;
    }

    let fuzzy = normalized_score(&text, &query) <= threshold
        || text
            .unicode_words()
            .any(|word| normalized_score(word, &query) <= threshold);
    if fuzzy {
        return RelevanceScore::Fuzzy;
    }

    RelevanceScore::None
}
