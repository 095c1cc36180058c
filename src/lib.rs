//! Word Ladder Solver
//!
//! Finds shortest word-transformation ladders: sequences of dictionary words where
//! consecutive words differ by a single character edit (insert, delete, or substitute).
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::{Dictionary, Word};
//! use word_ladder::search::shortest_ladder;
//!
//! let dictionary: Dictionary = ["cat", "cot", "cog", "dog"]
//!     .iter()
//!     .filter_map(|w| Word::new(*w).ok())
//!     .collect();
//!
//! let start = Word::new("cat").unwrap();
//! let end = Word::new("dog").unwrap();
//!
//! let ladder = shortest_ladder(&start, &end, &dictionary).unwrap();
//! assert_eq!(ladder.len(), 4);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
