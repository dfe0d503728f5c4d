//! Configured matcher and batch scoring over candidate lists.
//!
//! Batch results always come back in input order. Sorting or ranking is left
//! to the caller.

use crate::error::{MatchError, Result};
use crate::score::{normalized_score, MatchDecision, DEFAULT_THRESHOLD};
use crate::text::{normalize, TextInput};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Maximum normalized score that still counts as a match
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl MatcherConfig {
    /// Reject thresholds that cannot be compared meaningfully.
    ///
    /// Finite values outside `[0, 1]` are allowed.
    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_finite() {
            Ok(())
        } else {
            Err(MatchError::InvalidThreshold(self.threshold))
        }
    }
}

/// Score of a single candidate from a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Position of the candidate in the input slice
    pub index: usize,
    /// Normalized score in `[0, 1]`
    pub score: f64,
    /// Whether the score is within the matcher's threshold
    pub matched: bool,
}

/// Fuzzy matcher bound to a threshold.
///
/// # Example
/// ```
/// use techtrend_fuzzy::FuzzyMatcher;
///
/// let matcher = FuzzyMatcher::default();
/// let titles = ["Bluetooth Speaker", "Wireless Mouse", "Bluetooth Speakers"];
///
/// let hits = matcher.filter_candidates("bluetooth speakr", &titles);
/// let indices: Vec<usize> = hits.iter().map(|c| c.index).collect();
/// assert_eq!(indices, vec![0, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FuzzyMatcher {
    config: MatcherConfig,
}

impl FuzzyMatcher {
    /// Create a matcher from configuration.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Create a matcher with an explicit threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self::new(MatcherConfig { threshold })
    }

    /// The configured threshold.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// The configuration this matcher was built from.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Normalized score between two strings.
    pub fn score<A, B>(&self, source: &A, target: &B) -> f64
    where
        A: TextInput + ?Sized,
        B: TextInput + ?Sized,
    {
        crate::fuzzy_score(source, target)
    }

    /// Whether two strings match under the configured threshold.
    pub fn is_match<A, B>(&self, source: &A, target: &B) -> bool
    where
        A: TextInput + ?Sized,
        B: TextInput + ?Sized,
    {
        crate::is_fuzzy_match(source, target, self.threshold())
    }

    /// Score and decide in one call.
    pub fn decide<A, B>(&self, source: &A, target: &B) -> MatchDecision
    where
        A: TextInput + ?Sized,
        B: TextInput + ?Sized,
    {
        crate::decide(source, target, self.threshold())
    }

    /// Score every candidate against `query`.
    ///
    /// The query is normalized once. Uses rayon when the `parallel` feature is
    /// enabled; the output is identical either way.
    ///
    /// # Returns
    /// One entry per candidate, in input order.
    pub fn score_candidates<Q, T>(&self, query: &Q, candidates: &[T]) -> Vec<ScoredCandidate>
    where
        Q: TextInput + ?Sized,
        T: TextInput + Sync,
    {
        let query = normalize(query);
        let threshold = self.threshold();

        let score_one = |(index, candidate): (usize, &T)| {
            let score = normalized_score(&query, &normalize(candidate));
            ScoredCandidate {
                index,
                score,
                matched: score <= threshold,
            }
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            candidates.par_iter().enumerate().map(score_one).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            candidates.iter().enumerate().map(score_one).collect()
        }
    }

    /// Keep only the candidates that match `query`.
    ///
    /// # Returns
    /// Matching entries, in input order.
    pub fn filter_candidates<Q, T>(&self, query: &Q, candidates: &[T]) -> Vec<ScoredCandidate>
    where
        Q: TextInput + ?Sized,
        T: TextInput + Sync,
    {
        let mut results = self.score_candidates(query, candidates);
        results.retain(|c| c.matched);

        debug!(
            candidates = candidates.len(),
            matched = results.len(),
            threshold = self.threshold(),
            "Fuzzy filter complete"
        );

        results
    }
}

/// Input item for JSON batch filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateItem {
    /// Caller-side identifier, echoed back
    pub id: String,
    /// Text to match against
    pub text: String,
}

impl TextInput for CandidateItem {
    fn as_text(&self) -> &str {
        &self.text
    }
}

/// Matching item from JSON batch filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemScore {
    /// Identifier of the matched item
    pub id: String,
    /// Normalized score in `[0, 1]`
    pub score: f64,
}

/// Filter items by fuzzy match against `query`.
///
/// # Returns
/// Matching items with their scores, in input order.
pub fn filter_items<Q>(query: &Q, items: &[CandidateItem], threshold: f64) -> Vec<ItemScore>
where
    Q: TextInput + ?Sized,
{
    FuzzyMatcher::with_threshold(threshold)
        .filter_candidates(query, items)
        .into_iter()
        .map(|c| ItemScore {
            id: items[c.index].id.clone(),
            score: c.score,
        })
        .collect()
}

/// Filter a JSON array of `{ "id", "text" }` items.
///
/// # Returns
/// JSON array of `{ "id", "score" }` for matching items, in input order.
///
/// # Errors
/// Returns [`MatchError::Json`] if `items_json` is not a valid item array.
pub fn filter_items_json(query: &str, items_json: &str, threshold: f64) -> Result<String> {
    let items: Vec<CandidateItem> = serde_json::from_str(items_json)?;
    let results = filter_items(query, &items, threshold);
    Ok(serde_json::to_string(&results)?)
}
