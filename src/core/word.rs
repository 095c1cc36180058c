//! Dictionary word representation
//!
//! A Word stores a lowercase ASCII word of any length. Unlike fixed-width puzzle
//! words, ladder words may grow and shrink by one character per step, so length is
//! validated only as non-empty.

use std::borrow::Borrow;
use std::fmt;

/// A lowercase ASCII dictionary word
///
/// Case-normalized on construction; equality and hashing are by contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation, so `"Cat"` and `"cat"` produce
    /// equal words.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// Lets a hash set of Words be probed with a &str candidate without
// allocating a Word first.
impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.as_bytes(), b"cat");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");

        let word2 = Word::new("CaT").unwrap();
        assert_eq!(word2.text(), "cat");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("sleep").unwrap().len(), 5);
        assert_eq!(Word::new("ladders").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("c4t").is_err()); // Number
        assert!(Word::new("ca t").is_err()); // Space
        assert!(Word::new("cat!").is_err()); // Punctuation
    }

    #[test]
    fn word_creation_non_ascii() {
        assert!(matches!(Word::new("cät"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_display() {
        let word = Word::new("cat").unwrap();
        assert_eq!(format!("{word}"), "cat");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cat").unwrap();
        let word2 = Word::new("cat").unwrap();
        let word3 = Word::new("CAT").unwrap();
        let word4 = Word::new("dog").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }

    #[test]
    fn word_never_empty() {
        let word = Word::new("cat").unwrap();
        assert!(!word.is_empty());
    }
}
