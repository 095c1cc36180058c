//! Neighbor listing command
//!
//! Lists every dictionary word one edit from a given word.

use crate::core::{Dictionary, Word};
use crate::search::neighbors;

/// Result of listing neighbors
pub struct NeighborsResult {
    pub word: String,
    pub neighbors: Vec<Word>,
    pub dictionary_size: usize,
}

/// List the dictionary neighbors of a word
///
/// # Errors
///
/// Returns an error if the word is malformed (empty or not ASCII letters).
pub fn list_neighbors(word: &str, dictionary: &Dictionary) -> Result<NeighborsResult, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let mut found = neighbors(&word, dictionary);
    found.sort_unstable_by(|a, b| a.text().cmp(b.text()));

    Ok(NeighborsResult {
        word: word.text().to_string(),
        neighbors: found,
        dictionary_size: dictionary.len(),
    })
}
