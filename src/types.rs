//! Core token types
//!
//! A [`TaggedToken`] is the unit of input for segmentation and n-gram
//! extraction: one surface word with its lemma, POS tag, and optional
//! tagger confidence. Tokens are produced by an external tagger (FreeLing
//! or any other) and are read-only to this crate.

use serde::{Deserialize, Serialize};

/// Lemma that terminates a sentence. The terminator token itself is
/// discarded during segmentation.
pub const SENTENCE_TERMINATOR: &str = ".";

/// First letter of punctuation-class POS tags in the EAGLES tagset
/// (e.g. `Fc` for comma, `Fp` for period).
pub const PUNCTUATION_TAG_PREFIX: char = 'F';

/// A POS-tagged token.
///
/// Value type with no identity beyond field equality. An empty `tag` is
/// tolerated everywhere: it never matches the punctuation-class prefix
/// and the token is treated as a regular word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface form as it appeared in the text
    pub original: String,
    /// Dictionary base form
    pub lemma: String,
    /// POS tag code; punctuation classes start with [`PUNCTUATION_TAG_PREFIX`]
    pub tag: String,
    /// Tagger confidence in `[0, 1]`, or `None` when the tagger does not
    /// report one
    #[serde(default)]
    pub certainty: Option<f64>,
}

impl TaggedToken {
    /// Create a token with no certainty value
    pub fn new(
        original: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            lemma: lemma.into(),
            tag: tag.into(),
            certainty: None,
        }
    }

    /// Set the tagger confidence
    pub fn with_certainty(mut self, certainty: f64) -> Self {
        self.certainty = Some(certainty);
        self
    }

    /// Whether this token closes a sentence
    pub fn is_sentence_terminator(&self) -> bool {
        self.lemma == SENTENCE_TERMINATOR
    }

    /// Whether the tag marks a punctuation class
    pub fn is_punctuation(&self) -> bool {
        self.tag.starts_with(PUNCTUATION_TAG_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_has_no_certainty() {
        let token = TaggedToken::new("Dogs", "dog", "N");
        assert_eq!(token.original, "Dogs");
        assert_eq!(token.lemma, "dog");
        assert_eq!(token.tag, "N");
        assert!(token.certainty.is_none());
    }

    #[test]
    fn test_with_certainty() {
        let token = TaggedToken::new("Dogs", "dog", "N").with_certainty(0.93);
        assert_eq!(token.certainty, Some(0.93));
    }

    #[test]
    fn test_default_is_fresh_empty_token() {
        let token = TaggedToken::default();
        assert!(token.original.is_empty());
        assert!(token.lemma.is_empty());
        assert!(token.tag.is_empty());
        assert!(token.certainty.is_none());
    }

    #[test]
    fn test_terminator_detection() {
        assert!(TaggedToken::new(".", ".", "Fp").is_sentence_terminator());
        assert!(!TaggedToken::new("dog", "dog", "N").is_sentence_terminator());
    }

    #[test]
    fn test_punctuation_detection() {
        assert!(TaggedToken::new(",", ",", "Fc").is_punctuation());
        assert!(!TaggedToken::new("dog", "dog", "N").is_punctuation());
        // Empty tag is a regular token, not punctuation
        assert!(!TaggedToken::new("dog", "dog", "").is_punctuation());
    }

    #[test]
    fn test_serde_round_trip() {
        let token = TaggedToken::new("Perro", "perro", "N").with_certainty(0.87);
        let json = serde_json::to_string(&token).unwrap();
        let back: TaggedToken = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }

    #[test]
    fn test_certainty_defaults_when_absent_in_json() {
        let token: TaggedToken =
            serde_json::from_str(r#"{"original":"y","lemma":"y","tag":"CC"}"#).unwrap();
        assert!(token.certainty.is_none());
    }
}
