//! Ladder search algorithms
//!
//! The algorithmic core: the edit-adjacency predicate, the bounded edit-distance
//! check, dictionary neighbor generation, and two shortest-ladder searches.
//! `shortest_ladder` (bidirectional BFS) is the reference search;
//! `shortest_ladder_bfs` is the canonical single-direction form kept as an
//! independent cross-check.

mod bfs;
mod bidirectional;
mod edit;
mod neighbors;

pub use bfs::shortest_ladder_bfs;
pub use bidirectional::shortest_ladder;
pub use edit::{edit_distance_within, is_adjacent};
pub use neighbors::neighbors;

use crate::core::{Dictionary, Word};
use std::fmt;

/// Usage errors for a ladder search
///
/// Both are caller-input errors reported back to the caller, never a panic or
/// process exit: render the message and treat the ladder as empty. A search
/// that simply finds no path is not an error and returns an empty ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start and end words are the same word
    SameStartAndEnd { start: String, end: String },
    /// The end word is not a member of the dictionary
    EndNotInDictionary { start: String, end: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameStartAndEnd { start, end } => write!(
                f,
                "The start and end words must be different ({start}, {end})"
            ),
            Self::EndNotInDictionary { start, end } => write!(
                f,
                "The end word is not in the dictionary ({start}, {end})"
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Check the search preconditions shared by both algorithms
///
/// The start word may be outside the dictionary; the end word must be a member,
/// otherwise no valid ladder can terminate at it.
fn validate(start: &Word, end: &Word, dictionary: &Dictionary) -> Result<(), SearchError> {
    if start == end {
        return Err(SearchError::SameStartAndEnd {
            start: start.text().to_string(),
            end: end.text().to_string(),
        });
    }

    if !dictionary.contains(end.text()) {
        return Err(SearchError::EndNotInDictionary {
            start: start.text().to_string(),
            end: end.text().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().filter_map(|w| Word::new(*w).ok()).collect()
    }

    #[test]
    fn validate_accepts_good_input() {
        let d = dict(&["cat", "dog"]);
        let start = Word::new("cat").unwrap();
        let end = Word::new("dog").unwrap();
        assert!(validate(&start, &end, &d).is_ok());
    }

    #[test]
    fn validate_rejects_identical_endpoints() {
        let d = dict(&["cat"]);
        let cat = Word::new("cat").unwrap();
        let err = validate(&cat, &cat, &d).unwrap_err();
        assert!(matches!(err, SearchError::SameStartAndEnd { .. }));
    }

    #[test]
    fn validate_rejects_missing_end_word() {
        let d = dict(&["cat"]);
        let start = Word::new("cat").unwrap();
        let end = Word::new("dog").unwrap();
        let err = validate(&start, &end, &d).unwrap_err();
        assert!(matches!(err, SearchError::EndNotInDictionary { .. }));
    }

    #[test]
    fn validate_allows_start_outside_dictionary() {
        let d = dict(&["dog"]);
        let start = Word::new("cat").unwrap();
        let end = Word::new("dog").unwrap();
        assert!(validate(&start, &end, &d).is_ok());
    }

    #[test]
    fn search_error_messages_name_both_words() {
        let same = SearchError::SameStartAndEnd {
            start: "cat".to_string(),
            end: "cat".to_string(),
        };
        assert_eq!(
            same.to_string(),
            "The start and end words must be different (cat, cat)"
        );

        let missing = SearchError::EndNotInDictionary {
            start: "cat".to_string(),
            end: "dgo".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "The end word is not in the dictionary (cat, dgo)"
        );
    }
}
