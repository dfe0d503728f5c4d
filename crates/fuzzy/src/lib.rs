//! Typo-tolerant text matching for the TechTrend storefront.
//!
//! This crate provides:
//! - Levenshtein edit distance in `O(min(m, n))` memory
//! - Normalized fuzzy scores and threshold-based match decisions
//! - Batch scoring of candidate lists with optional parallelism
//! - Relevance tiers for search-as-you-type
//! - WASM bindings for browser usage
//!
//! Everything here is pure computation over in-memory text: no I/O, no
//! timers, no global state. Ordering results is left to the caller.
//!
//! # Example
//!
//! ```
//! use techtrend_fuzzy::{edit_distance, fuzzy_score, is_fuzzy_match};
//!
//! assert_eq!(edit_distance("kitten", "sitting"), 3);
//! assert_eq!(fuzzy_score("Laptop", "  laptop "), 0.0);
//! assert!(is_fuzzy_match("Bluetooth Speaker", "bluetooth speakr", 0.35));
//! ```

mod distance;
mod error;
pub mod matcher;
mod relevance;
mod score;
mod text;

#[cfg(feature = "wasm")]
mod wasm;

pub use distance::{bounded_edit_distance, edit_distance};
pub use error::{MatchError, MatchErrorCode, Result};
pub use matcher::{filter_items, filter_items_json, FuzzyMatcher, MatcherConfig, ScoredCandidate};
pub use relevance::{calculate_relevance, RelevanceScore};
pub use score::{decide, fuzzy_score, is_fuzzy_match, looks_like, MatchDecision, DEFAULT_THRESHOLD};
pub use text::{normalize, TextInput};
