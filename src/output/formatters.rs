//! Formatting utilities for terminal output

use crate::core::Ladder;

/// Format a ladder as a space-separated word sequence
#[must_use]
pub fn format_ladder(ladder: &Ladder) -> String {
    ladder.to_string()
}

/// Format a ladder as an arrow-separated chain
#[must_use]
pub fn format_ladder_arrows(ladder: &Ladder) -> String {
    let texts: Vec<&str> = ladder.iter().map(crate::core::Word::text).collect();
    texts.join(" → ")
}

/// Summary line for a found ladder: word and edit counts
#[must_use]
pub fn ladder_summary(ladder: &Ladder) -> String {
    let words = ladder.len();
    let edits = ladder.edits();
    format!(
        "{words} {}, {edits} {}",
        if words == 1 { "word" } else { "words" },
        if edits == 1 { "edit" } else { "edits" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn ladder(words: &[&str]) -> Ladder {
        Ladder::from_words(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn format_space_separated() {
        let l = ladder(&["cat", "cot", "dog"]);
        assert_eq!(format_ladder(&l), "cat cot dog");
    }

    #[test]
    fn format_arrows() {
        let l = ladder(&["cat", "cot"]);
        assert_eq!(format_ladder_arrows(&l), "cat → cot");
    }

    #[test]
    fn format_empty_ladder() {
        let l = Ladder::empty();
        assert_eq!(format_ladder(&l), "");
        assert_eq!(format_ladder_arrows(&l), "");
    }

    #[test]
    fn summary_counts() {
        let l = ladder(&["cat", "cot", "cog", "dog"]);
        assert_eq!(ladder_summary(&l), "4 words, 3 edits");

        let single = ladder(&["cat", "bat"]);
        assert_eq!(ladder_summary(&single), "2 words, 1 edit");
    }
}
