//! Fuzzy column generation for approximate (edit-distance) table joins.
//!
//! Appends a `fuzzy_<column>` column to a left table whose values are the
//! closest right-table entries by edit distance, so the tables can then be
//! joined exactly on the generated column. Avoids quadratic pairwise
//! comparison by indexing the right column once per pair.
//!
//! # Design
//!
//! - [`Normalizer`] canonicalizes raw cell text (lowercase, screened
//!   characters, word-order and whitespace insensitive).
//! - [`ReverseIndex`] maps each canonical form back to one original
//!   right-side string, first-seen wins; collisions surface as
//!   [`ConflictNotice`] diagnostics, never as logging.
//! - [`QueryEngine`] holds the pair-scoped index plus the
//!   `fuzzyjoin_search` engine and applies the inclusive distance
//!   threshold.
//! - [`FuzzyJoin`] drives one or more column pairs against the
//!   [`ColumnSource`]/[`ColumnSink`] table capabilities;
//!   [`generate_fuzzy_columns`] is the convenience entry point.

pub mod error;
pub(crate) mod index;
pub mod normalize;
pub(crate) mod pipeline;
pub(crate) mod query;
pub mod types;

pub use error::{ConfigError, Error, LookupError, Result, Side, StateError};
pub use index::{ConflictNotice, ReverseIndex};
pub use normalize::{DefaultNormalizer, Normalizer};
pub use pipeline::{FUZZY_PREFIX, FuzzyJoin, fuzzy_column_name, generate_fuzzy_columns};
pub use query::{MatchResult, QueryEngine};
pub use types::{ColumnPair, ColumnSink, ColumnSource, JoinConfig, Table};
