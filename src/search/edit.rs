//! Edit-distance predicates
//!
//! Two forms: `is_adjacent`, a two-cursor walk specialized to "distance at most
//! one", and `edit_distance_within`, the general dynamic-programming check with
//! an arbitrary bound. The search layer only needs the first; the second is the
//! reference for larger bounds.

use crate::core::Word;

/// True iff `a` equals `b` or `b` is one insert, delete, or substitute from `a`
///
/// O(length) two-cursor walk rather than a full edit-distance table: on a
/// mismatch the cursor of the longer word advances (both when lengths are
/// equal) and one difference is counted; a second difference rejects.
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::search::is_adjacent;
///
/// let cat = Word::new("cat").unwrap();
/// assert!(is_adjacent(&cat, &Word::new("cot").unwrap())); // substitute
/// assert!(is_adjacent(&cat, &Word::new("at").unwrap())); // delete
/// assert!(is_adjacent(&cat, &Word::new("cart").unwrap())); // insert
/// assert!(!is_adjacent(&cat, &Word::new("dog").unwrap()));
/// ```
#[must_use]
pub fn is_adjacent(a: &Word, b: &Word) -> bool {
    one_edit_apart(a.as_bytes(), b.as_bytes())
}

fn one_edit_apart(a: &[u8], b: &[u8]) -> bool {
    if a == b {
        return true;
    }
    if a.len().abs_diff(b.len()) > 1 {
        return false;
    }

    let mut differences = 0;
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            i += 1;
            j += 1;
            continue;
        }

        differences += 1;
        if differences > 1 {
            return false;
        }

        // Skip the extra character of the longer word; for equal lengths this
        // mismatch is a substitution, so both cursors move.
        if a.len() > b.len() {
            i += 1;
        } else if b.len() > a.len() {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }

    // One trailing character left over counts as an insert or delete
    if i < a.len() || j < b.len() {
        differences += 1;
    }

    differences == 1
}

/// True iff the edit distance between `a` and `b` is at most `bound`
///
/// Dynamic programming over rolling rows. A row whose minimum already exceeds
/// the bound can never recover, so the scan aborts there rather than filling
/// the rest of the table.
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::search::edit_distance_within;
///
/// let sleep = Word::new("sleep").unwrap();
/// let awake = Word::new("awake").unwrap();
/// assert!(!edit_distance_within(&sleep, &awake, 3));
/// assert!(edit_distance_within(&sleep, &awake, 5));
/// ```
#[must_use]
pub fn edit_distance_within(a: &Word, b: &Word, bound: usize) -> bool {
    within(a.as_bytes(), b.as_bytes(), bound)
}

fn within(a: &[u8], b: &[u8], bound: usize) -> bool {
    if a.len().abs_diff(b.len()) > bound {
        return false;
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        current[0] = i;
        let mut row_min = current[0];

        for j in 1..=b.len() {
            let substitution_cost = usize::from(a[i - 1] != b[j - 1]);
            current[j] = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + substitution_cost);
            row_min = row_min.min(current[j]);
        }

        if row_min > bound {
            return false;
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()] <= bound
}
