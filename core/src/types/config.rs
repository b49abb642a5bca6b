use serde::{Deserialize, Serialize};

/// Run-level configuration for fuzzy column generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    /// Maximum edit distance accepted as a match. Inclusive bound;
    /// values below 1 are a configuration error.
    pub max_edit_distance: usize,
    /// Delete-variant prefix length passed through to the engine build.
    pub prefix_length: usize,
    /// Sentinel written on a miss. `None` echoes the queried value.
    pub null_return: Option<String>,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            prefix_length: 7,
            null_return: None,
        }
    }
}
