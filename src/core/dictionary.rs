//! Dictionary of searchable words
//!
//! A thin wrapper over a hashed word set: built once from input, probed by
//! membership during neighbor generation, and erased from as a search marks
//! words visited.

use super::Word;
use rustc_hash::FxHashSet;

/// A set of distinct dictionary words with O(1) membership tests
///
/// Searches never mutate the dictionary they are handed; each search that needs
/// to mark words visited works on its own clone. Callers can therefore reuse
/// one `Dictionary` across any number of searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, returning true if it was not already present
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    /// Membership test by string contents
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Look up the stored word equal to `candidate`
    #[inline]
    #[must_use]
    pub fn get(&self, candidate: &str) -> Option<&Word> {
        self.words.get(candidate)
    }

    /// Remove a word, returning true if it was present
    pub fn remove(&mut self, word: &Word) -> bool {
        self.words.remove(word)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<Word> for Dictionary {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}
