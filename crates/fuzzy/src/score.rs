//! Normalized fuzzy scores and match decisions.

use crate::distance::edit_distance;
use crate::text::{normalize, TextInput};
use serde::{Deserialize, Serialize};

/// Default maximum score for two strings to be considered a match.
pub const DEFAULT_THRESHOLD: f64 = 0.35;

/// A match decision together with the score it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchDecision {
    /// Whether `score <= threshold`
    pub matched: bool,
    /// Normalized score in `[0, 1]` (0 is identical)
    pub score: f64,
}

/// Calculate the normalized fuzzy score between two strings.
///
/// Both inputs are lower-cased and trimmed first, then the edit distance is
/// divided by the longer normalized length (at least 1).
///
/// # Returns
/// A score in `[0, 1]`: `0.0` for strings that are identical after
/// normalization, approaching `1.0` as they share nothing.
///
/// # Example
/// ```
/// use techtrend_fuzzy::fuzzy_score;
///
/// assert_eq!(fuzzy_score("Laptop", "  laptop "), 0.0);
/// assert_eq!(fuzzy_score("abc", "xyz"), 1.0);
/// ```
pub fn fuzzy_score<A, B>(source: &A, target: &B) -> f64
where
    A: TextInput + ?Sized,
    B: TextInput + ?Sized,
{
    let source = normalize(source);
    let target = normalize(target);
    normalized_score(&source, &target)
}

/// Score two strings that are already normalized.
pub(crate) fn normalized_score(source: &str, target: &str) -> f64 {
    let distance = edit_distance(source, target);
    let longest = source.chars().count().max(target.chars().count()).max(1);
    distance as f64 / longest as f64
}

/// Check whether two strings look alike under `threshold`.
///
/// Thresholds are taken as-is: anything `>= 1.0` always matches, anything
/// below `0.0` (or NaN) never does.
///
/// # Example
/// ```
/// use techtrend_fuzzy::is_fuzzy_match;
///
/// assert!(is_fuzzy_match("Bluetooth Speaker", "bluetooth speakr", 0.35));
/// assert!(!is_fuzzy_match("Bluetooth Speaker", "Wireless Mouse", 0.35));
/// ```
pub fn is_fuzzy_match<A, B>(source: &A, target: &B, threshold: f64) -> bool
where
    A: TextInput + ?Sized,
    B: TextInput + ?Sized,
{
    fuzzy_score(source, target) <= threshold
}

/// [`is_fuzzy_match`] with [`DEFAULT_THRESHOLD`].
pub fn looks_like<A, B>(source: &A, target: &B) -> bool
where
    A: TextInput + ?Sized,
    B: TextInput + ?Sized,
{
    is_fuzzy_match(source, target, DEFAULT_THRESHOLD)
}

/// Score two strings and decide whether they match under `threshold`.
pub fn decide<A, B>(source: &A, target: &B, threshold: f64) -> MatchDecision
where
    A: TextInput + ?Sized,
    B: TextInput + ?Sized,
{
    let score = fuzzy_score(source, target);
    MatchDecision {
        matched: score <= threshold,
        score,
    }
}
