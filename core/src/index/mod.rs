use crate::normalize::Normalizer;
use serde::Serialize;
use std::collections::HashMap;

/// A canonical-form collision observed while building a [`ReverseIndex`].
///
/// Non-fatal: the first-seen original is kept and processing continues.
/// Returned alongside the index so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictNotice {
    pub canonical: String,
    pub kept: String,
    pub discarded: String,
}

/// Maps canonical forms back to the original right-side strings.
///
/// Immutable after build, scoped to one column pair.
pub struct ReverseIndex {
    map: HashMap<String, String>,
    // Canonical keys in first-seen order, so downstream vocabulary
    // construction is deterministic.
    keys: Vec<String>,
}

impl ReverseIndex {
    /// Indexes `originals` in input order. When two originals collapse to
    /// the same canonical form, the first-seen mapping wins and a notice
    /// is recorded for each later, differing original. Identical
    /// duplicates are silent.
    pub fn build<'a>(
        originals: impl IntoIterator<Item = &'a str>,
        normalizer: &dyn Normalizer,
    ) -> (Self, Vec<ConflictNotice>) {
        let mut map: HashMap<String, String> = HashMap::new();
        let mut keys = Vec::new();
        let mut conflicts = Vec::new();

        for original in originals {
            let canonical = normalizer.normalize(original);
            match map.get(&canonical) {
                None => {
                    keys.push(canonical.clone());
                    map.insert(canonical, original.to_owned());
                }
                Some(kept) if kept != original => {
                    conflicts.push(ConflictNotice {
                        canonical,
                        kept: kept.clone(),
                        discarded: original.to_owned(),
                    });
                }
                Some(_) => {}
            }
        }

        (Self { map, keys }, conflicts)
    }

    /// The original string behind `canonical`, if it was indexed.
    pub fn resolve(&self, canonical: &str) -> Option<&str> {
        self.map.get(canonical).map(String::as_str)
    }

    /// Canonical keys in first-seen order.
    pub fn canonicals(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests;
