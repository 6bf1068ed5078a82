//! N-gram extraction and counting
//!
//! Produces n-gram string keys from a tagged-token stream. Tokens are
//! first segmented into sentences, then every contiguous window of `n`
//! tokens within a sentence is rendered as a joined key. Counting is a
//! separate step so callers can merge n-grams across documents before
//! estimating statistics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::segment::SentenceSegmenter;
use crate::types::TaggedToken;

/// Separator between token fields inside one n-gram key
const TOKEN_SEPARATOR: char = '_';
/// Separator between the word part and the tag part of a key
const TAG_SEPARATOR: char = '/';

/// N-gram extraction settings.
///
/// The defaults produce lemma unigrams without punctuation or tags,
/// e.g. `{"be": 16, "he": 14}` rather than `{"be/V": 16, "he/P": 14}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NGramConfig {
    /// Window size; sentences shorter than `n` contribute nothing
    #[serde(default = "default_n")]
    pub n: usize,

    /// Drop punctuation-class tokens before windowing
    #[serde(default = "default_true")]
    pub remove_punctuation: bool,

    /// Render lemmas rather than surface forms (void when `tags_only`)
    #[serde(default = "default_true")]
    pub use_lemmas: bool,

    /// Render words alone, without the `/`-joined tag part
    #[serde(default = "default_true")]
    pub tokens_only: bool,

    /// Render the tag sequence alone, e.g. `P_V`
    #[serde(default)]
    pub tags_only: bool,
}

fn default_n() -> usize {
    1
}

fn default_true() -> bool {
    true
}

impl Default for NGramConfig {
    fn default() -> Self {
        Self {
            n: 1,
            remove_punctuation: true,
            use_lemmas: true,
            tokens_only: true,
            tags_only: false,
        }
    }
}

/// Extracts n-gram keys from tagged tokens
#[derive(Debug, Clone, Default)]
pub struct NGramExtractor {
    config: NGramConfig,
}

impl NGramExtractor {
    /// Create an extractor with default config (lemma unigrams)
    pub fn new(n: usize) -> Self {
        Self {
            config: NGramConfig {
                n,
                ..NGramConfig::default()
            },
        }
    }

    /// Create an extractor with custom config
    pub fn with_config(config: NGramConfig) -> Self {
        Self { config }
    }

    /// Set whether punctuation tokens are dropped
    pub fn with_remove_punctuation(mut self, remove_punctuation: bool) -> Self {
        self.config.remove_punctuation = remove_punctuation;
        self
    }

    /// Set whether lemmas or surface forms are rendered
    pub fn with_use_lemmas(mut self, use_lemmas: bool) -> Self {
        self.config.use_lemmas = use_lemmas;
        self
    }

    /// Set whether keys carry only the word part
    pub fn with_tokens_only(mut self, tokens_only: bool) -> Self {
        self.config.tokens_only = tokens_only;
        self
    }

    /// Set whether keys carry only the tag part
    pub fn with_tags_only(mut self, tags_only: bool) -> Self {
        self.config.tags_only = tags_only;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &NGramConfig {
        &self.config
    }

    /// Extract n-gram keys in encounter order: sentence order, then
    /// window start order within each sentence.
    ///
    /// Windows never cross a sentence boundary, and a sentence shorter
    /// than `n` contributes nothing. The contract is `n >= 1`; `n == 0`
    /// yields an empty result.
    pub fn extract(&self, tokens: &[TaggedToken]) -> Vec<String> {
        let cfg = &self.config;
        if cfg.n == 0 {
            return Vec::new();
        }

        let segmenter =
            SentenceSegmenter::new().with_remove_punctuation(cfg.remove_punctuation);
        let sentences = segmenter.segment(tokens);

        let mut n_grams = Vec::new();
        for sentence in &sentences {
            if sentence.len() < cfg.n {
                continue;
            }
            for window in sentence.windows(cfg.n) {
                n_grams.push(self.render(window));
            }
        }

        n_grams
    }

    /// Extract and count in one step
    pub fn extract_counts(&self, tokens: &[TaggedToken]) -> FxHashMap<String, u64> {
        count_ngrams(self.extract(tokens))
    }

    /// Render one window as a key
    fn render(&self, window: &[&TaggedToken]) -> String {
        let cfg = &self.config;

        let mut tag_part = String::new();
        for (j, token) in window.iter().enumerate() {
            if j > 0 {
                tag_part.push(TOKEN_SEPARATOR);
            }
            tag_part.push_str(&token.tag);
        }
        if cfg.tags_only {
            return tag_part;
        }

        let mut word_part = String::new();
        for (j, token) in window.iter().enumerate() {
            if j > 0 {
                word_part.push(TOKEN_SEPARATOR);
            }
            if cfg.use_lemmas {
                word_part.push_str(&token.lemma);
            } else {
                word_part.push_str(&token.original);
            }
        }
        if cfg.tokens_only {
            return word_part;
        }

        word_part.push(TAG_SEPARATOR);
        word_part.push_str(&tag_part);
        word_part
    }
}

/// Count occurrences of each n-gram key.
///
/// The multiset counter consumed by
/// [`estimate_richness`](crate::richness::estimate_richness). Insertion
/// order is irrelevant; only counts matter.
pub fn count_ngrams<I>(n_grams: I) -> FxHashMap<String, u64>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = FxHashMap::default();
    for n_gram in n_grams {
        *counts.entry(n_gram).or_insert(0) += 1;
    }
    counts
}
