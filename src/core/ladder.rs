//! Ladder: an ordered word-transformation path

use super::Word;
use std::fmt;

/// An ordered sequence of words forming a transformation path
///
/// Consecutive words are one edit apart, the first word is the search's start
/// word, and the last is its end word. An empty ladder signals "no ladder
/// exists" and is the only other valid shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    /// The empty ladder: no transformation path exists
    #[must_use]
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Build a ladder from an already-ordered word sequence
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The words of the ladder in start-to-end order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words (rungs) in the ladder
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no ladder was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of edits from start to end (one less than the word count)
    #[must_use]
    pub fn edits(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// The start word, if the ladder is non-empty
    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    /// The end word, if the ladder is non-empty
    #[must_use]
    pub fn last(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Iterate over the words in order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl fmt::Display for Ladder {
    /// Space-separated word sequence, empty string for the empty ladder
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in &self.words {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{word}")?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
