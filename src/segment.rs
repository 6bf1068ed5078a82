//! Sentence segmentation
//!
//! Splits a flat tagged-token stream into sentences on the terminator
//! lemma `"."`. N-gram extraction later operates on each sentence
//! independently, so windows never cross a boundary.

use crate::types::TaggedToken;

/// A segmented sentence: borrowed tokens in their original order, with
/// the terminator excluded.
pub type Sentence<'a> = Vec<&'a TaggedToken>;

/// Configuration-carrying sentence splitter
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    /// Whether punctuation-class tokens are dropped from sentences
    pub remove_punctuation: bool,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self {
            remove_punctuation: true,
        }
    }
}

impl SentenceSegmenter {
    /// Create a segmenter that drops punctuation tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether punctuation-class tokens are dropped
    pub fn with_remove_punctuation(mut self, remove_punctuation: bool) -> Self {
        self.remove_punctuation = remove_punctuation;
        self
    }

    /// Split `tokens` into sentences.
    ///
    /// A token whose lemma is `"."` closes the current sentence (even an
    /// empty one) and is itself discarded. A trailing run of tokens with
    /// no terminator still forms a final sentence. Empty input yields no
    /// sentences.
    pub fn segment<'a>(&self, tokens: &'a [TaggedToken]) -> Vec<Sentence<'a>> {
        let mut sentences = Vec::new();
        let mut current: Sentence<'a> = Vec::new();

        for token in tokens {
            if token.is_sentence_terminator() {
                sentences.push(std::mem::take(&mut current));
            } else if token.is_punctuation() {
                if !self.remove_punctuation {
                    current.push(token);
                }
            } else {
                current.push(token);
            }
        }
        if !current.is_empty() {
            sentences.push(current);
        }

        sentences
    }
}
