//! Symmetric-delete approximate matching engine.
//!
//! Builds a precomputed delete-neighborhood index over a vocabulary and
//! answers "closest term within a maximum edit distance" queries without
//! scanning the whole vocabulary.
//!
//! # Design
//!
//! - Build once per vocabulary; the engine is immutable afterwards.
//! - Delete variants are generated from the first `prefix_length`
//!   characters only, up to `max_edit_distance` deletions.
//! - Candidate recall goes through the delete map; every candidate is
//!   verified with true Levenshtein distance before it can win.
//! - Ties on distance resolve to the first-seen vocabulary term, so
//!   lookups are deterministic regardless of hash iteration order.

mod config;
mod engine;

pub use config::SearchConfig;
pub use engine::{BuildError, SearchEngine, Suggestion};
