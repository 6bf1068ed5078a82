//! Corpus-level analysis
//!
//! Ties the stages together: tagged tokens are windowed into n-grams,
//! the n-grams are counted, and the counts feed the richness estimator.
//! Each stage is also usable on its own; this module is the convenience
//! path for the common extract → count → estimate flow.

use rustc_hash::FxHashMap;

use crate::errors::{Error, Result};
use crate::ngram::{count_ngrams, NGramConfig, NGramExtractor};
use crate::richness::{estimate_richness, RichnessStats};
use crate::types::TaggedToken;

/// Enter a tracing span for an analysis stage (when the `tracing`
/// feature is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("analysis_stage", stage = $name).entered();
    };
}

/// Runs the full extract → count → estimate flow over one token stream
#[derive(Debug, Clone, Default)]
pub struct CorpusAnalyzer {
    config: NGramConfig,
}

impl CorpusAnalyzer {
    /// Create an analyzer with default settings (lemma unigrams, the
    /// configuration the richness measures were defined on)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom n-gram settings
    pub fn with_config(config: NGramConfig) -> Self {
        Self { config }
    }

    /// The active n-gram configuration
    pub fn config(&self) -> &NGramConfig {
        &self.config
    }

    /// Count the configured n-grams of `tokens`.
    ///
    /// Rejects `n == 0`, which cannot produce a meaningful frequency
    /// map.
    pub fn count(&self, tokens: &[TaggedToken]) -> Result<FxHashMap<String, u64>> {
        if self.config.n == 0 {
            return Err(Error::invalid_argument("n", "must be at least 1"));
        }

        trace_stage!("extract");
        let n_grams = NGramExtractor::with_config(self.config.clone()).extract(tokens);

        trace_stage!("count");
        Ok(count_ngrams(n_grams))
    }

    /// Estimate vocabulary richness over the configured n-grams of
    /// `tokens`
    pub fn analyze(&self, tokens: &[TaggedToken]) -> Result<RichnessStats> {
        let counts = self.count(tokens)?;

        trace_stage!("estimate");
        Ok(estimate_richness(&counts))
    }
}
