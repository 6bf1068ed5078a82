//! Disfluent repetition cleanup
//!
//! Speakers in dialogs and other spontaneous speech repeat n-grams out
//! of hesitation, retracing, or emphasis ("yes yes yes I know"). Left
//! in place, these repetitions hinder downstream taggers and parsers,
//! so cleanup strips every immediate duplicate of an n-word run while
//! reproducing the original delimiters exactly.
//!
//! French gets a carve-out: reflexive constructions legitimately repeat
//! a pronoun ("nous nous levons tôt") and must survive.

use rayon::prelude::*;

/// Stand-in for apostrophes during word splitting, so contractions like
/// "c'est" stay one word token. Word characters only.
const APOSTROPHE_PLACEHOLDER: &str = "0apostrophe0";

/// Reflexive pronouns whose repetition is regular French syntax
const FRENCH_REFLEXIVES: [&str; 2] = ["vous", "nous"];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A sentence split into word tokens and the delimiter runs between
/// them, in strict alternation: `words[0], delimiters[0], words[1], ...`
///
/// `words.len() == delimiters.len() + 1` always holds; when the sentence
/// starts or ends with a delimiter run, the corresponding boundary word
/// is empty. Joining the two back in alternation reproduces the input
/// byte for byte.
#[derive(Debug)]
struct SplitSentence<'a> {
    words: Vec<&'a str>,
    delimiters: Vec<&'a str>,
}

/// Split on runs of non-word characters, keeping the runs.
fn split_words(sentence: &str) -> SplitSentence<'_> {
    let mut words = Vec::new();
    let mut delimiters = Vec::new();

    let mut start = 0;
    let mut in_word = true;
    for (position, c) in sentence.char_indices() {
        if is_word_char(c) != in_word {
            if in_word {
                words.push(&sentence[start..position]);
            } else {
                delimiters.push(&sentence[start..position]);
            }
            start = position;
            in_word = !in_word;
        }
    }
    if in_word {
        words.push(&sentence[start..]);
    } else {
        delimiters.push(&sentence[start..]);
        words.push("");
    }

    SplitSentence { words, delimiters }
}

/// Result of cleaning one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedSentence {
    /// The sentence with duplicated n-grams dropped
    pub text: String,
    /// Number of whole repeated n-grams removed
    pub removed: usize,
}

/// Detects and strips immediately-repeated n-grams from raw sentences
#[derive(Debug, Clone)]
pub struct RepetitionCleaner {
    /// Size of the repeated run to look for
    pub n: usize,
    /// Preserve French reflexive pronoun-verb repetitions
    pub french: bool,
}

impl RepetitionCleaner {
    /// Create a cleaner for runs of `n` words, with the French exception
    /// disabled
    pub fn new(n: usize) -> Self {
        Self { n, french: false }
    }

    /// Enable or disable the French reflexive exception
    pub fn with_french(mut self, french: bool) -> Self {
        self.french = french;
        self
    }

    /// Remove every n-word run that immediately repeats the preceding
    /// one.
    ///
    /// Delimiter runs are re-emitted verbatim, so a sentence with no
    /// repetitions comes back unchanged. The window only ever compares
    /// against the immediately preceding n-gram, so a chain of `k`
    /// identical runs loses `k - 1` of them. Sentences with fewer than
    /// `n + 1` words (and `n == 0`) are returned untouched.
    pub fn clean(&self, sentence: &str) -> CleanedSentence {
        let n = self.n;
        if n == 0 {
            return CleanedSentence {
                text: sentence.to_string(),
                removed: 0,
            };
        }

        // Word splitting would cut contractions at the apostrophe;
        // substitute a word-character stand-in for the duration.
        let substituted = sentence.replace('\'', APOSTROPHE_PLACEHOLDER);
        let split = split_words(&substituted);

        let word_count = split.words.len();
        let mut remove = vec![false; word_count];

        if word_count > n {
            let mut position = 0;
            while position + 2 * n <= word_count {
                let current = &split.words[position..position + n];
                let next = &split.words[position + n..position + 2 * n];
                if current == next && !self.is_reflexive(next[0]) {
                    for slot in &mut remove[position + n..position + 2 * n] {
                        *slot = true;
                    }
                }
                position += 1;
            }
        }

        // Walk the alternation: delimiters verbatim, masked words dropped
        let mut text = String::with_capacity(substituted.len());
        let mut dropped = 0;
        for (index, word) in split.words.iter().enumerate() {
            if remove[index] {
                dropped += 1;
            } else {
                text.push_str(word);
            }
            if let Some(delimiter) = split.delimiters.get(index) {
                text.push_str(delimiter);
            }
        }

        CleanedSentence {
            text: text.replace(APOSTROPHE_PLACEHOLDER, "'"),
            removed: dropped / n,
        }
    }

    /// Clean a batch of independent sentences in parallel
    pub fn clean_all<S>(&self, sentences: &[S]) -> Vec<CleanedSentence>
    where
        S: AsRef<str> + Sync,
    {
        sentences
            .par_iter()
            .map(|sentence| self.clean(sentence.as_ref()))
            .collect()
    }

    fn is_reflexive(&self, word: &str) -> bool {
        self.french && FRENCH_REFLEXIVES.contains(&word.to_lowercase().as_str())
    }
}
