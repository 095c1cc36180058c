//! Neighbor generation
//!
//! Enumerates every dictionary word one edit away from a given word by
//! generating all candidate edits and probing the dictionary, rather than
//! scanning the dictionary and testing adjacency. O(alphabet × length)
//! probes against the hashed set.

use crate::core::{Dictionary, Word};
use rustc_hash::FxHashSet;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// All distinct dictionary words one edit from `word`
///
/// Candidates come from three edit families: substituting each position,
/// deleting each position, and inserting each letter at each position
/// (including past the final character). The same word can be reachable
/// through more than one family, so results are deduplicated; the input word
/// itself never appears. Order follows generation order and is deterministic
/// for a given word.
#[must_use]
pub fn neighbors(word: &Word, dictionary: &Dictionary) -> Vec<Word> {
    let bytes = word.as_bytes();
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut found = Vec::new();
    let mut candidate = Vec::with_capacity(bytes.len() + 1);

    // Substitutions
    for i in 0..bytes.len() {
        for &letter in ALPHABET {
            if letter == bytes[i] {
                continue;
            }
            candidate.clear();
            candidate.extend_from_slice(bytes);
            candidate[i] = letter;
            probe(&candidate, dictionary, &mut seen, &mut found);
        }
    }

    // Deletions
    for i in 0..bytes.len() {
        candidate.clear();
        candidate.extend_from_slice(&bytes[..i]);
        candidate.extend_from_slice(&bytes[i + 1..]);
        probe(&candidate, dictionary, &mut seen, &mut found);
    }

    // Insertions
    for i in 0..=bytes.len() {
        for &letter in ALPHABET {
            candidate.clear();
            candidate.extend_from_slice(&bytes[..i]);
            candidate.push(letter);
            candidate.extend_from_slice(&bytes[i..]);
            probe(&candidate, dictionary, &mut seen, &mut found);
        }
    }

    found
}

fn probe(
    candidate: &[u8],
    dictionary: &Dictionary,
    seen: &mut FxHashSet<Word>,
    found: &mut Vec<Word>,
) {
    // Candidates are built from ASCII letters only
    let Ok(text) = std::str::from_utf8(candidate) else {
        return;
    };
    if let Some(member) = dictionary.get(text) {
        if seen.insert(member.clone()) {
            found.push(member.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::is_adjacent;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().filter_map(|t| Word::new(*t).ok()).collect()
    }

    #[test]
    fn neighbors_finds_all_edit_families() {
        let d = dict(&["cot", "bat", "at", "cart", "scat", "dog"]);
        let result = neighbors(&w("cat"), &d);

        let texts: Vec<&str> = result.iter().map(Word::text).collect();
        assert!(texts.contains(&"cot")); // substitution
        assert!(texts.contains(&"bat")); // substitution
        assert!(texts.contains(&"at")); // deletion
        assert!(texts.contains(&"cart")); // insertion
        assert!(texts.contains(&"scat")); // insertion
        assert!(!texts.contains(&"dog"));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn neighbors_never_contains_the_word_itself() {
        let d = dict(&["cat", "cot"]);
        let result = neighbors(&w("cat"), &d);
        assert!(result.iter().all(|n| n.text() != "cat"));
    }

    #[test]
    fn neighbors_all_adjacent_and_in_dictionary() {
        let d = dict(&["cot", "coat", "ca", "cab", "cats", "dot", "dog"]);
        let cat = w("cat");

        for neighbor in neighbors(&cat, &d) {
            assert!(is_adjacent(&cat, &neighbor), "{neighbor} not one edit away");
            assert!(d.contains(neighbor.text()), "{neighbor} not in dictionary");
        }
    }

    #[test]
    fn neighbors_are_distinct() {
        // "aa" reaches "aaa" by inserting 'a' at three different positions
        let d = dict(&["aaa", "ab", "a"]);
        let result = neighbors(&w("aa"), &d);

        let mut texts: Vec<&str> = result.iter().map(Word::text).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), result.len(), "duplicate neighbors returned");
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn neighbors_empty_dictionary() {
        let d = Dictionary::new();
        assert!(neighbors(&w("cat"), &d).is_empty());
    }

    #[test]
    fn neighbors_of_single_letter_word() {
        let d = dict(&["a", "i", "at", "it", "an"]);
        let result = neighbors(&w("a"), &d);

        let texts: Vec<&str> = result.iter().map(Word::text).collect();
        assert!(texts.contains(&"i")); // substitution
        assert!(texts.contains(&"at")); // insertion after
        assert!(texts.contains(&"an")); // insertion after
        assert!(!texts.contains(&"it")); // two edits away
    }

    #[test]
    fn neighbors_deterministic_order() {
        let d = dict(&["cot", "bat", "at", "cart"]);
        let first = neighbors(&w("cat"), &d);
        let second = neighbors(&w("cat"), &d);
        assert_eq!(first, second);
    }
}
