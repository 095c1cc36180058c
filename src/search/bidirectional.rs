//! Bidirectional breadth-first ladder search
//!
//! Two frontiers grow toward each other, one from the start word and one from
//! the end word, always expanding the smaller frontier a full edit-layer at a
//! time. Each discovered word records its predecessor in a per-direction
//! parent map; the search stops at the first layer whose expansion collides
//! with the opposite visited set and reconstructs the ladder from the two
//! parent chains.

use super::{SearchError, neighbors, validate};
use crate::core::{Dictionary, Ladder, Word};
use rustc_hash::FxHashMap;

/// Predecessor map for one search direction; `None` marks the seed word
type ParentMap = FxHashMap<Word, Option<Word>>;

/// Shortest ladder from `start` to `end` by bidirectional BFS
///
/// Equivalent in result length to [`super::shortest_ladder_bfs`] but explores
/// far fewer words on large dictionaries, since two shallow frontiers cover
/// much less of the word graph than one deep one. The caller's dictionary is
/// never mutated. An exhausted frontier on either side returns the empty
/// ladder.
///
/// # Errors
///
/// Returns `SearchError` when `start == end` or `end` is not in the
/// dictionary. Callers should render the message and treat the ladder as
/// empty; neither condition is a defect.
pub fn shortest_ladder(
    start: &Word,
    end: &Word,
    dictionary: &Dictionary,
) -> Result<Ladder, SearchError> {
    validate(start, end, dictionary)?;

    let mut forward_parents = ParentMap::default();
    forward_parents.insert(start.clone(), None);
    let mut backward_parents = ParentMap::default();
    backward_parents.insert(end.clone(), None);

    let mut forward_frontier = vec![start.clone()];
    let mut backward_frontier = vec![end.clone()];

    while !forward_frontier.is_empty() && !backward_frontier.is_empty() {
        // Expanding the smaller frontier keeps the explored regions balanced
        let forward_turn = forward_frontier.len() <= backward_frontier.len();

        let (frontier, own, other) = if forward_turn {
            (&forward_frontier, &mut forward_parents, &backward_parents)
        } else {
            (&backward_frontier, &mut backward_parents, &forward_parents)
        };

        let (next_frontier, collisions) = expand_layer(frontier, dictionary, own, other);

        if let Some(meeting) = best_meeting(&collisions, other) {
            let ladder = reconstruct(&meeting, &forward_parents, &backward_parents);
            return Ok(ladder);
        }

        if forward_turn {
            forward_frontier = next_frontier;
        } else {
            backward_frontier = next_frontier;
        }
    }

    Ok(Ladder::empty())
}

/// Advance one frontier by a single edit-layer
///
/// Every neighbor not yet seen in this direction is recorded with its
/// predecessor. Words already present in the opposite parent map are
/// collected as collisions; the whole layer is still expanded so the caller
/// can pick the collision closest to the opposite seed.
fn expand_layer(
    frontier: &[Word],
    dictionary: &Dictionary,
    own: &mut ParentMap,
    other: &ParentMap,
) -> (Vec<Word>, Vec<Word>) {
    let mut next_frontier = Vec::new();
    let mut collisions = Vec::new();

    for word in frontier {
        for neighbor in neighbors(word, dictionary) {
            if own.contains_key(&neighbor) {
                continue;
            }
            own.insert(neighbor.clone(), Some(word.clone()));

            if other.contains_key(&neighbor) {
                collisions.push(neighbor);
            } else {
                next_frontier.push(neighbor);
            }
        }
    }

    (next_frontier, collisions)
}

/// Pick the collision whose chain to the opposite seed is shortest
///
/// Collisions found in one layer share the same depth on the expanding side
/// but can sit at different depths on the opposite side; taking the shallowest
/// one keeps the combined ladder minimal.
fn best_meeting(collisions: &[Word], other: &ParentMap) -> Option<Word> {
    collisions
        .iter()
        .min_by_key(|word| chain_depth(word, other))
        .cloned()
}

/// Number of edges from `word` back to the seed of `parents`
fn chain_depth(word: &Word, parents: &ParentMap) -> usize {
    let mut depth = 0;
    let mut cursor = parents.get(word).cloned().flatten();
    while let Some(current) = cursor {
        depth += 1;
        cursor = parents.get(&current).cloned().flatten();
    }
    depth
}

/// Stitch the two parent chains into a start-to-end ladder
///
/// The meeting word is present in both maps; it appears exactly once in the
/// result.
fn reconstruct(meeting: &Word, forward: &ParentMap, backward: &ParentMap) -> Ladder {
    let mut words = Vec::new();

    // Forward chain: meeting back to start, then flipped
    let mut cursor = Some(meeting.clone());
    while let Some(current) = cursor {
        cursor = forward.get(&current).cloned().flatten();
        words.push(current);
    }
    words.reverse();

    // Backward chain: meeting's successor out to end
    let mut cursor = backward.get(meeting).cloned().flatten();
    while let Some(current) = cursor {
        cursor = backward.get(&current).cloned().flatten();
        words.push(current);
    }

    Ladder::from_words(words)
}
