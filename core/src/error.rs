use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("state error: {0}")]
    State(#[from] StateError),

    #[error("match engine build failed: {0}")]
    Build(#[from] fuzzyjoin_search::BuildError),
}

/// Rejected before any processing begins.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("max_edit_distance must be at least 1, got {0}")]
    MaxEditDistance(usize),

    #[error("left_columns has {left} entries but right_columns has {right}")]
    ColumnCountMismatch { left: usize, right: usize },
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("column {name:?} not found in {side} table; available columns: {available:?}")]
    ColumnNotFound {
        side: Side,
        name: String,
        available: Vec<String>,
    },
}

/// Programmer errors; always fatal, never silently ignored.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("canonical form {0:?} is not in the reverse index")]
    UnindexedCanonical(String),
}

/// Which table a lookup error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
