//! N-gram statistics, vocabulary-richness measures, and disfluency
//! cleanup for POS-tagged corpora.
//!
//! The crate consumes already-tagged tokens (from FreeLing or any other
//! tagger adapted into [`TaggedToken`]) and offers three independent
//! capabilities:
//!
//! - **Segmentation and n-gram extraction**: [`SentenceSegmenter`]
//!   splits a token stream on the terminator lemma `"."`, and
//!   [`NGramExtractor`] renders sliding windows within each sentence as
//!   joined string keys.
//! - **Vocabulary richness**: [`estimate_richness`] computes hapax
//!   counts, Brunet, Honoré, TTR, Sichel, Yule, and entropy from an
//!   n-gram frequency map.
//! - **Repetition cleanup**: [`RepetitionCleaner`] strips disfluent
//!   immediate n-gram repetitions from raw transcript sentences,
//!   preserving French reflexive constructions on request.
//!
//! # Quick start
//!
//! ```rust
//! use lexgram::{CorpusAnalyzer, NGramExtractor, TaggedToken};
//!
//! let tokens = vec![
//!     TaggedToken::new("He", "he", "P"),
//!     TaggedToken::new("runs", "run", "V"),
//!     TaggedToken::new(".", ".", "Fp"),
//! ];
//!
//! let unigrams = NGramExtractor::new(1).extract(&tokens);
//! assert_eq!(unigrams, vec!["he", "run"]);
//!
//! let stats = CorpusAnalyzer::new().analyze(&tokens).unwrap();
//! assert_eq!(stats.v, 2);
//! ```
//!
//! Tagging itself is out of scope: the crate begins where the tagger
//! ends.

pub mod corpus;
pub mod disfluency;
pub mod errors;
pub mod io;
pub mod ngram;
pub mod richness;
pub mod segment;
pub mod types;

pub use corpus::CorpusAnalyzer;
pub use disfluency::{CleanedSentence, RepetitionCleaner};
pub use errors::{Error, Result};
pub use ngram::{count_ngrams, NGramConfig, NGramExtractor};
pub use richness::{estimate_richness, RichnessStats};
pub use segment::{Sentence, SentenceSegmenter};
pub use types::{TaggedToken, PUNCTUATION_TAG_PREFIX, SENTENCE_TERMINATOR};
