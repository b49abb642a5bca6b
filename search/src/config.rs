#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum edit distance a suggestion may have. Inclusive bound.
    pub max_edit_distance: usize,
    /// Only the first `prefix_length` characters generate delete variants.
    pub prefix_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            prefix_length: 7,
        }
    }
}
