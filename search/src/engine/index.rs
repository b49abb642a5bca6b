use std::collections::{HashMap, HashSet};

/// Maps delete variants to the vocabulary entries they could have come
/// from. Entry ids are vocabulary positions, so the smallest id in a
/// bucket is always the first-seen term.
pub(crate) struct DeleteMap {
    variants: HashMap<String, Vec<u32>>,
    prefix_length: usize,
    max_edit_distance: usize,
}

impl DeleteMap {
    pub(crate) fn new(max_edit_distance: usize, prefix_length: usize) -> Self {
        Self {
            variants: HashMap::new(),
            prefix_length,
            max_edit_distance,
        }
    }

    pub(crate) fn insert(&mut self, term: &str, id: u32) {
        // delete_variants is a set, so each (variant, id) pair is
        // recorded at most once.
        for variant in self.delete_variants(term) {
            self.variants.entry(variant).or_default().push(id);
        }
    }

    /// Ids of every vocabulary entry sharing at least one delete variant
    /// with `query`. Recall only; distances are verified by the caller.
    pub(crate) fn candidates(&self, query: &str) -> HashSet<u32> {
        let mut ids = HashSet::new();
        for variant in self.delete_variants(query) {
            if let Some(bucket) = self.variants.get(&variant) {
                ids.extend(bucket.iter().copied());
            }
        }
        ids
    }

    /// All strings reachable from the first `prefix_length` characters of
    /// `term` by at most `max_edit_distance` single-character deletions,
    /// including the truncated term itself.
    fn delete_variants(&self, term: &str) -> HashSet<String> {
        let prefix: String = term.chars().take(self.prefix_length).collect();

        let mut variants = HashSet::new();
        variants.insert(prefix.clone());

        let mut frontier = vec![prefix];
        for _ in 0..self.max_edit_distance {
            let mut next = Vec::new();
            for current in &frontier {
                let chars: Vec<char> = current.chars().collect();
                for skip in 0..chars.len() {
                    let deleted: String = chars
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| *i != skip)
                        .map(|(_, c)| *c)
                        .collect();
                    if variants.insert(deleted.clone()) {
                        next.push(deleted);
                    }
                }
            }
            frontier = next;
        }

        variants
    }
}
