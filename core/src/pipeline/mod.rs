use crate::error::{ConfigError, Error, LookupError, Result, Side};
use crate::index::ConflictNotice;
use crate::normalize::{DefaultNormalizer, Normalizer};
use crate::query::QueryEngine;
use crate::types::{ColumnPair, ColumnSink, ColumnSource, JoinConfig};

/// Prefix of every generated output column.
pub const FUZZY_PREFIX: &str = "fuzzy_";

/// Name of the output column generated for `left_column`.
pub fn fuzzy_column_name(left_column: &str) -> String {
    format!("{FUZZY_PREFIX}{left_column}")
}

/// Batch driver appending one fuzzy output column per requested pair.
pub struct FuzzyJoin {
    config: JoinConfig,
    normalizer: Box<dyn Normalizer>,
}

impl FuzzyJoin {
    /// Fails eagerly on invalid configuration, before any processing.
    pub fn new(config: JoinConfig) -> Result<Self> {
        if config.max_edit_distance < 1 {
            return Err(ConfigError::MaxEditDistance(config.max_edit_distance).into());
        }
        Ok(Self {
            config,
            normalizer: Box::new(DefaultNormalizer::new()),
        })
    }

    /// Substitutes the canonicalization policy wholesale. The
    /// replacement must keep the no-whitespace output contract.
    pub fn with_normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    /// Processes `pairs` in request order, appending a
    /// `fuzzy_<left column>` column to `left` for each.
    ///
    /// Pairs are independent; each gets a fresh index and engine built
    /// from its right column, dropped before the next pair. Columns
    /// written before a failing pair stay in place and the failure is
    /// returned. Conflict notices from all processed pairs accumulate
    /// into the returned diagnostics.
    pub fn run(
        &self,
        left: &mut impl ColumnSink,
        right: &impl ColumnSource,
        pairs: &[ColumnPair],
    ) -> Result<Vec<ConflictNotice>> {
        let mut notices = Vec::new();
        for pair in pairs {
            notices.extend(self.run_pair(left, right, pair)?);
        }
        Ok(notices)
    }

    fn run_pair(
        &self,
        left: &mut impl ColumnSink,
        right: &impl ColumnSource,
        pair: &ColumnPair,
    ) -> Result<Vec<ConflictNotice>> {
        let left_values = left
            .column(&pair.left)
            .ok_or_else(|| column_not_found(Side::Left, &pair.left, left))?;
        let vocabulary = right
            .column(&pair.right)
            .ok_or_else(|| column_not_found(Side::Right, &pair.right, right))?;

        let (engine, conflicts) = QueryEngine::build(
            vocabulary.iter().map(String::as_str),
            self.normalizer.as_ref(),
            &self.config,
        )?;

        let sentinel = pair
            .null_return
            .as_deref()
            .or(self.config.null_return.as_deref());

        let mut output = Vec::with_capacity(left_values.len());
        for value in left_values {
            let result = engine.query(value)?;
            let cell = match (result.found, sentinel) {
                (false, Some(sentinel)) => sentinel.to_owned(),
                _ => result.matched,
            };
            output.push(cell);
        }

        left.append_column(&fuzzy_column_name(&pair.left), output);
        Ok(conflicts)
    }
}

/// Builds one fuzzy output column per entry in `left_columns`, appended
/// to `left` in place.
///
/// `right_columns: None` pairs each left column with the right column of
/// the same name; when given, the lists pair positionally and must have
/// equal length. Use [`FuzzyJoin`] directly to substitute the normalizer
/// or to set per-pair miss sentinels.
pub fn generate_fuzzy_columns(
    left: &mut impl ColumnSink,
    right: &impl ColumnSource,
    left_columns: &[&str],
    right_columns: Option<&[&str]>,
    config: &JoinConfig,
) -> Result<Vec<ConflictNotice>> {
    let right_columns = right_columns.unwrap_or(left_columns);
    if left_columns.len() != right_columns.len() {
        return Err(ConfigError::ColumnCountMismatch {
            left: left_columns.len(),
            right: right_columns.len(),
        }
        .into());
    }

    let pairs: Vec<ColumnPair> = left_columns
        .iter()
        .zip(right_columns)
        .map(|(l, r)| ColumnPair::new(*l, *r))
        .collect();

    FuzzyJoin::new(config.clone())?.run(left, right, &pairs)
}

fn column_not_found(side: Side, name: &str, table: &impl ColumnSource) -> Error {
    LookupError::ColumnNotFound {
        side,
        name: name.to_owned(),
        available: table.column_names(),
    }
    .into()
}
