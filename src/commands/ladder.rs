//! Ladder search command
//!
//! Runs one shortest-ladder search and packages the outcome for display.

use crate::core::{Dictionary, Ladder, Word};
use crate::search::{shortest_ladder, shortest_ladder_bfs};

/// Which search implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Bidirectional BFS, the default
    Bidirectional,
    /// Single-direction BFS over a queue of partial ladders
    Bfs,
}

impl Algorithm {
    /// Parse an algorithm name, falling back to the default for unknown names
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "bfs" | "queue" => Self::Bfs,
            _ => Self::Bidirectional,
        }
    }
}

/// Configuration for a ladder search
pub struct LadderConfig {
    pub start: String,
    pub end: String,
    pub algorithm: Algorithm,
}

impl LadderConfig {
    #[must_use]
    pub const fn new(start: String, end: String) -> Self {
        Self {
            start,
            end,
            algorithm: Algorithm::Bidirectional,
        }
    }
}

/// Result of a ladder search
///
/// A usage error (same start and end, or end word missing from the
/// dictionary) is carried as a report alongside an empty ladder rather than
/// failing the command; an empty ladder with no report means no path exists.
pub struct LadderResult {
    pub start: String,
    pub end: String,
    pub ladder: Ladder,
    pub usage_error: Option<String>,
    pub dictionary_size: usize,
}

/// Run a shortest-ladder search over the dictionary
///
/// # Errors
///
/// Returns an error only when the start or end word itself is malformed
/// (empty or not ASCII letters). Search preconditions are reported in the
/// result, not as command failures.
pub fn run_ladder(config: &LadderConfig, dictionary: &Dictionary) -> Result<LadderResult, String> {
    let start = Word::new(&config.start).map_err(|e| format!("Invalid start word: {e}"))?;
    let end = Word::new(&config.end).map_err(|e| format!("Invalid end word: {e}"))?;

    let outcome = match config.algorithm {
        Algorithm::Bidirectional => shortest_ladder(&start, &end, dictionary),
        Algorithm::Bfs => shortest_ladder_bfs(&start, &end, dictionary),
    };

    let (ladder, usage_error) = match outcome {
        Ok(ladder) => (ladder, None),
        Err(e) => (Ladder::empty(), Some(e.to_string())),
    };

    Ok(LadderResult {
        start: start.text().to_string(),
        end: end.text().to_string(),
        ladder,
        usage_error,
        dictionary_size: dictionary.len(),
    })
}
