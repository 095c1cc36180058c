//! Single-direction breadth-first ladder search
//!
//! The canonical form: a FIFO queue of partial ladders grown one word per
//! level. Kept alongside the bidirectional search as an independent
//! implementation for cross-checking minimality.

use super::{SearchError, neighbors, validate};
use crate::core::{Dictionary, Ladder, Word};
use std::collections::VecDeque;

/// Shortest ladder from `start` to `end` by single-direction BFS
///
/// Works on a private clone of `dictionary`; the caller's set is untouched.
/// Words are erased from the working copy the moment they are discovered, so
/// no word is ever enqueued twice and the first ladder to reach `end` is
/// minimal in word count. An exhausted queue returns the empty ladder.
///
/// # Errors
///
/// Returns `SearchError` when `start == end` or `end` is not in the
/// dictionary. Callers should render the message and treat the ladder as
/// empty; neither condition is a defect.
pub fn shortest_ladder_bfs(
    start: &Word,
    end: &Word,
    dictionary: &Dictionary,
) -> Result<Ladder, SearchError> {
    validate(start, end, dictionary)?;

    let mut unvisited = dictionary.clone();
    unvisited.remove(start);

    let mut queue: VecDeque<Vec<Word>> = VecDeque::new();
    queue.push_back(vec![start.clone()]);

    while let Some(current) = queue.pop_front() {
        let Some(last_word) = current.last().cloned() else {
            continue;
        };

        for candidate in neighbors(&last_word, &unvisited) {
            // Mark visited at discovery time, not between levels
            unvisited.remove(&candidate);

            let mut extended = current.clone();
            extended.push(candidate.clone());

            if candidate == *end {
                return Ok(Ladder::from_words(extended));
            }
            queue.push_back(extended);
        }
    }

    Ok(Ladder::empty())
}
