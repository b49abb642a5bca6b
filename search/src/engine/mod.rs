mod index;

use crate::config::SearchConfig;
use index::DeleteMap;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("max_edit_distance must be at least 1, got {0}")]
    InvalidMaxDistance(usize),
}

/// A single lookup hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub term: String,
    pub distance: usize,
}

/// Precomputed nearest-term index over a fixed vocabulary.
///
/// Immutable after `build`; lookups are read-only.
pub struct SearchEngine {
    terms: Vec<String>,
    exact: HashMap<String, u32>,
    deletes: DeleteMap,
    config: SearchConfig,
}

impl SearchEngine {
    /// Builds the delete-neighborhood index over `vocabulary`.
    ///
    /// Duplicate terms are indexed once, keeping their first position.
    pub fn build(
        vocabulary: impl IntoIterator<Item = String>,
        config: SearchConfig,
    ) -> Result<Self, BuildError> {
        if config.max_edit_distance < 1 {
            return Err(BuildError::InvalidMaxDistance(config.max_edit_distance));
        }

        let mut terms = Vec::new();
        let mut exact = HashMap::new();
        let mut deletes = DeleteMap::new(config.max_edit_distance, config.prefix_length);

        for term in vocabulary {
            if exact.contains_key(&term) {
                continue;
            }
            let id = terms.len() as u32;
            exact.insert(term.clone(), id);
            deletes.insert(&term, id);
            terms.push(term);
        }

        if terms.is_empty() {
            return Err(BuildError::EmptyVocabulary);
        }

        Ok(Self {
            terms,
            exact,
            deletes,
            config,
        })
    }

    /// Returns the closest vocabulary term within `max_edit_distance` of
    /// `query`, or `None` if nothing lies within the bound.
    ///
    /// Equal-distance candidates resolve to the first-seen term.
    pub fn lookup(&self, query: &str) -> Option<Suggestion> {
        if self.exact.contains_key(query) {
            return Some(Suggestion {
                term: query.to_owned(),
                distance: 0,
            });
        }

        let mut best: Option<(u32, usize)> = None;
        for id in self.deletes.candidates(query) {
            let term = &self.terms[id as usize];
            let distance = strsim::levenshtein(query, term);
            if distance > self.config.max_edit_distance {
                continue;
            }
            let closer = match best {
                Some((best_id, best_distance)) => {
                    distance < best_distance || (distance == best_distance && id < best_id)
                }
                None => true,
            };
            if closer {
                best = Some((id, distance));
            }
        }

        best.map(|(id, distance)| Suggestion {
            term: self.terms[id as usize].clone(),
            distance,
        })
    }

    /// Number of distinct terms in the vocabulary.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
