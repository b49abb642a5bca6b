use serde::{Deserialize, Serialize};

/// One (left column, right column) association for which a fuzzy output
/// column is generated. Pairs are independent; their order only decides
/// output-column placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPair {
    pub left: String,
    pub right: String,
    /// Overrides the run-level miss sentinel when set.
    #[serde(default)]
    pub null_return: Option<String>,
}

impl ColumnPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            null_return: None,
        }
    }

    pub fn with_null_return(mut self, sentinel: impl Into<String>) -> Self {
        self.null_return = Some(sentinel.into());
        self
    }
}
