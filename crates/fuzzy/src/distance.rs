//! Levenshtein edit distance.
//!
//! Both functions keep a single rolling DP row indexed by the shorter input
//! plus one scalar for the top-left neighbour, so working memory is
//! `O(min(m, n))` characters regardless of how long the other side is.
//! Lengths are counted in Unicode scalar values, not bytes.
//!
//! Time is `O(m * n)`. Very long inputs (tens of thousands of characters on
//! both sides) are slow but never fail.

use crate::text::TextInput;

/// Calculate the Levenshtein edit distance between two strings.
///
/// No normalization is applied; use [`crate::fuzzy_score`] for a
/// case-insensitive, trimmed comparison.
///
/// # Arguments
/// * `source` - First string (`None` reads as empty)
/// * `target` - Second string (`None` reads as empty)
///
/// # Returns
/// Number of single-character insertions, deletions or substitutions needed
/// to transform `source` into `target`.
///
/// # Example
/// ```
/// use techtrend_fuzzy::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance<A, B>(source: &A, target: &B) -> usize
where
    A: TextInput + ?Sized,
    B: TextInput + ?Sized,
{
    let source = source.as_text();
    let target = target.as_text();

    let m = source.chars().count();
    let n = target.chars().count();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let (long, short) = if m >= n { (source, target) } else { (target, source) };
    let short: Vec<char> = short.chars().collect();
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.chars().enumerate() {
        advance_row(&mut row, &short, i + 1, lc);
    }

    row[short.len()]
}

/// Calculate the edit distance only if it does not exceed `max`.
///
/// Exits early when the length difference alone exceeds `max`, or when every
/// cell of a DP row is already above `max` (distances never shrink further
/// down the grid).
///
/// # Returns
/// `Some(distance)` when `distance <= max`, otherwise `None`.
///
/// # Example
/// ```
/// use techtrend_fuzzy::bounded_edit_distance;
///
/// assert_eq!(bounded_edit_distance("flaw", "lawn", 2), Some(2));
/// assert_eq!(bounded_edit_distance("flaw", "lawn", 1), None);
/// ```
pub fn bounded_edit_distance<A, B>(source: &A, target: &B, max: usize) -> Option<usize>
where
    A: TextInput + ?Sized,
    B: TextInput + ?Sized,
{
    let source = source.as_text();
    let target = target.as_text();

    let m = source.chars().count();
    let n = target.chars().count();

    if m.abs_diff(n) > max {
        return None;
    }
    if m == 0 || n == 0 {
        // Length difference already checked against max
        return Some(m.max(n));
    }

    let (long, short) = if m >= n { (source, target) } else { (target, source) };
    let short: Vec<char> = short.chars().collect();
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.chars().enumerate() {
        let row_min = advance_row(&mut row, &short, i + 1, lc);
        if row_min > max {
            return None;
        }
    }

    let distance = row[short.len()];
    (distance <= max).then_some(distance)
}

/// Overwrite `row` (holding DP row `i - 1`) with row `i` for character `lc`.
///
/// Returns the minimum value of the new row.
#[inline]
fn advance_row(row: &mut [usize], short: &[char], i: usize, lc: char) -> usize {
    let mut diagonal = row[0];
    row[0] = i;
    let mut row_min = i;

    for (j, &sc) in short.iter().enumerate() {
        let above = row[j + 1];
        let cost = usize::from(lc != sc);
        let cell = (above + 1).min(row[j] + 1).min(diagonal + cost);
        row[j + 1] = cell;
        diagonal = above;
        row_min = row_min.min(cell);
    }

    row_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(edit_distance("hello", "hello"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(edit_distance("hello", "hallo"), 1);
    }

    #[test]
    fn test_levenshtein_insert() {
        assert_eq!(edit_distance("helo", "hello"), 1);
    }

    #[test]
    fn test_levenshtein_delete() {
        assert_eq!(edit_distance("hello", "helo"), 1);
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("sitting", "kitten"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn test_absent_inputs_read_as_empty() {
        let absent: Option<&str> = None;
        assert_eq!(edit_distance(&absent, "abc"), 3);
        assert_eq!(edit_distance(&absent, &absent), 0);
        assert_eq!(edit_distance(&Some("abc"), "abd"), 1);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(edit_distance("", "日本語"), 3);
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("naïve", "naive"), 1);
    }

    #[test]
    fn test_is_case_sensitive() {
        assert_eq!(edit_distance("Laptop", "laptop"), 1);
        assert_eq!(edit_distance(" a", "a"), 1);
    }

    #[test]
    fn test_disjoint_is_longer_length() {
        assert_eq!(edit_distance("abc", "xyz"), 3);
        assert_eq!(edit_distance("ab", "wxyz"), 4);
    }

    #[test]
    fn test_bounded_within() {
        assert_eq!(bounded_edit_distance("kitten", "sitting", 3), Some(3));
        assert_eq!(bounded_edit_distance("kitten", "sitting", 10), Some(3));
        assert_eq!(bounded_edit_distance("same", "same", 0), Some(0));
    }

    #[test]
    fn test_bounded_exceeded() {
        assert_eq!(bounded_edit_distance("kitten", "sitting", 2), None);
        assert_eq!(bounded_edit_distance("a", "abcdef", 2), None);
    }

    #[test]
    fn test_bounded_empty() {
        assert_eq!(bounded_edit_distance("", "abc", 3), Some(3));
        assert_eq!(bounded_edit_distance("", "abc", 2), None);
        assert_eq!(bounded_edit_distance("", "", 0), Some(0));
    }
}
