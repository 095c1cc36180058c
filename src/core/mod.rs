//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear mathematical properties.

mod dictionary;
mod ladder;
mod word;

pub use dictionary::Dictionary;
pub use ladder::Ladder;
pub use word::{Word, WordError};
