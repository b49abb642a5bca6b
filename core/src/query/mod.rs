use crate::error::{Result, StateError};
use crate::index::{ConflictNotice, ReverseIndex};
use crate::normalize::Normalizer;
use crate::types::JoinConfig;
use fuzzyjoin_search::{SearchConfig, SearchEngine};

/// Outcome of a single fuzzy query.
///
/// On a miss, `matched` is the original (un-normalized) query input,
/// never the canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: String,
    pub found: bool,
}

/// Pair-scoped matcher state: the reverse index and the engine built
/// from one right-side column.
///
/// The engine's vocabulary is the index's canonical key set, so every
/// hit the engine can return is resolvable.
pub struct QueryEngine<'a> {
    normalizer: &'a dyn Normalizer,
    index: ReverseIndex,
    engine: SearchEngine,
    max_edit_distance: usize,
}

impl<'a> QueryEngine<'a> {
    /// Builds the reverse index and the engine for one column pair.
    ///
    /// Fails if the vocabulary ends up empty or the configured distance
    /// bound is invalid.
    pub fn build<'o>(
        originals: impl IntoIterator<Item = &'o str>,
        normalizer: &'a dyn Normalizer,
        config: &JoinConfig,
    ) -> Result<(Self, Vec<ConflictNotice>)> {
        let (index, conflicts) = ReverseIndex::build(originals, normalizer);
        let engine = SearchEngine::build(
            index.canonicals().map(str::to_owned),
            SearchConfig {
                max_edit_distance: config.max_edit_distance,
                prefix_length: config.prefix_length,
            },
        )?;

        let query_engine = Self {
            normalizer,
            index,
            engine,
            max_edit_distance: config.max_edit_distance,
        };
        Ok((query_engine, conflicts))
    }

    /// Canonicalizes `raw`, looks up the nearest vocabulary term and
    /// back-maps it to the original right-side string.
    ///
    /// The distance threshold is inclusive: a hit at exactly
    /// `max_edit_distance` is accepted.
    pub fn query(&self, raw: &str) -> Result<MatchResult> {
        let canonical = self.normalizer.normalize(raw);

        let hit = match self.engine.lookup(&canonical) {
            Some(hit) if hit.distance <= self.max_edit_distance => hit,
            _ => {
                return Ok(MatchResult {
                    matched: raw.to_owned(),
                    found: false,
                });
            }
        };

        let matched = self
            .index
            .resolve(&hit.term)
            .ok_or_else(|| StateError::UnindexedCanonical(hit.term.clone()))?;

        Ok(MatchResult {
            matched: matched.to_owned(),
            found: true,
        })
    }
}
