//! Word list loading utilities
//!
//! Builds a searchable `Dictionary` from the embedded list or from a text
//! file of whitespace-separated tokens.

use crate::core::{Dictionary, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file of whitespace-separated tokens
///
/// Tokens are case-normalized; tokens that are not pure ASCII letters are
/// skipped rather than treated as fatal. Duplicates collapse into one entry.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;

    let dictionary = content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect();

    Ok(dictionary)
}

/// Convert a string slice list to a dictionary
///
/// # Examples
/// ```
/// use word_ladder::wordlists::WORDS;
/// use word_ladder::wordlists::loader::dictionary_from_slice;
///
/// let dictionary = dictionary_from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_from_slice_converts_valid_words() {
        let input = &["cat", "cot", "dog"];
        let dictionary = dictionary_from_slice(input);

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("cot"));
        assert!(dictionary.contains("dog"));
    }

    #[test]
    fn dictionary_from_slice_skips_invalid() {
        let input = &["cat", "c4t", "", "dog"];
        let dictionary = dictionary_from_slice(input);

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("dog"));
    }

    #[test]
    fn dictionary_from_slice_normalizes_case() {
        let input = &["CAT", "Cat", "cat"];
        let dictionary = dictionary_from_slice(input);

        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains("cat"));
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let input: &[&str] = &[];
        let dictionary = dictionary_from_slice(input);
        assert!(dictionary.is_empty());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let dictionary = dictionary_from_slice(WORDS);
        assert_eq!(dictionary.len(), WORDS.len());
    }

    #[test]
    fn load_from_file_splits_on_whitespace() {
        use std::io::Write;

        let dir = std::env::temp_dir().join("word_ladder_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "cat cot\n  cog\tdog\n\ncat").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        assert_eq!(dictionary.len(), 4);
        assert!(dictionary.contains("cog"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(result.is_err());
    }
}
