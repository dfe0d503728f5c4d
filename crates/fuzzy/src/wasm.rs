//! WASM bindings for the storefront search bar.

use crate::DEFAULT_THRESHOLD;
use wasm_bindgen::prelude::*;

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::edit_distance(a, b)
}

/// Normalized fuzzy score (0 = identical, 1 = nothing in common).
#[wasm_bindgen]
pub fn fuzzy_score(source: &str, target: &str) -> f64 {
    crate::fuzzy_score(source, target)
}

/// Check whether two strings look alike.
///
/// # Arguments
/// * `source` - First string
/// * `target` - Second string
/// * `max_ratio` - Maximum fuzzy score (defaults to 0.35 when omitted)
#[wasm_bindgen]
pub fn fuzzy_looks_like(source: &str, target: &str, max_ratio: Option<f64>) -> bool {
    crate::is_fuzzy_match(source, target, max_ratio.unwrap_or(DEFAULT_THRESHOLD))
}

/// Calculate relevance tier for a query against text.
///
/// # Returns
/// Relevance weight (0-50, higher is better)
#[wasm_bindgen]
pub fn relevance_score(query: &str, text: &str) -> u32 {
    crate::calculate_relevance(text, query, DEFAULT_THRESHOLD).weight()
}

/// Filter items by fuzzy match and return matches as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of items with `id` and `text` fields
/// * `threshold` - Maximum fuzzy score (defaults to 0.35 when omitted)
///
/// # Returns
/// JSON array of `{ id, score }` for matching items, in input order
#[wasm_bindgen]
pub fn filter_items(query: &str, items_json: &str, threshold: Option<f64>) -> Result<String, JsValue> {
    crate::filter_items_json(query, items_json, threshold.unwrap_or(DEFAULT_THRESHOLD))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
