//! Edit-distance checking command

use crate::core::Word;
use crate::search::{edit_distance_within, is_adjacent};

/// Result of an edit-distance check between two words
pub struct DistanceResult {
    pub word_a: String,
    pub word_b: String,
    pub adjacent: bool,
    pub bound: Option<usize>,
    pub within_bound: Option<bool>,
}

/// Check adjacency and, optionally, a bounded edit distance
///
/// # Errors
///
/// Returns an error if either word is malformed (empty or not ASCII letters).
pub fn check_distance(
    word_a: &str,
    word_b: &str,
    bound: Option<usize>,
) -> Result<DistanceResult, String> {
    let a = Word::new(word_a).map_err(|e| format!("Invalid word '{word_a}': {e}"))?;
    let b = Word::new(word_b).map_err(|e| format!("Invalid word '{word_b}': {e}"))?;

    Ok(DistanceResult {
        word_a: a.text().to_string(),
        word_b: b.text().to_string(),
        adjacent: is_adjacent(&a, &b),
        bound,
        within_bound: bound.map(|d| edit_distance_within(&a, &b, d)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_only() {
        let result = check_distance("cat", "cot", None).unwrap();
        assert!(result.adjacent);
        assert!(result.within_bound.is_none());
    }

    #[test]
    fn bounded_check() {
        let result = check_distance("cat", "dog", Some(3)).unwrap();
        assert!(!result.adjacent);
        assert_eq!(result.within_bound, Some(true));

        let result = check_distance("cat", "dog", Some(2)).unwrap();
        assert_eq!(result.within_bound, Some(false));
    }

    #[test]
    fn case_normalized_before_comparison() {
        let result = check_distance("CAT", "cat", None).unwrap();
        assert!(result.adjacent); // identical after normalization
        assert_eq!(result.word_a, "cat");
    }

    #[test]
    fn malformed_words_are_errors() {
        assert!(check_distance("", "cat", None).is_err());
        assert!(check_distance("cat", "d0g", None).is_err());
    }
}
