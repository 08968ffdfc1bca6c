//! Tokenizers for glosses and sentences.
//!
//! Two extraction styles are provided:
//!
//! - [`GlossTokenizer`] turns definition text into an unordered set of
//!   content tokens for gloss-overlap scoring: lowercase, maximal runs of
//!   letters (ASCII plus the Latin Extended-A block used by Romanian
//!   orthography), stop words removed, tokens of two characters or fewer
//!   removed.
//! - [`sentence_words`] extracts the ordered word sequence of a sentence,
//!   keeping every word (stop words included) so the caller decides what to
//!   keep after lemmatization.
//!
//! # Examples
//!
//! ```
//! use synsim::analysis::tokenizer::GlossTokenizer;
//!
//! let tokenizer = GlossTokenizer::new().unwrap();
//! let tokens = tokenizer.token_set("The quick brown fox is an animal");
//! assert!(tokens.contains("quick"));
//! assert!(tokens.contains("animal"));
//! assert!(!tokens.contains("the")); // stop word
//! assert!(!tokens.contains("is"));  // stop word, and too short anyway
//! ```

use ahash::AHashSet;
use regex::Regex;

use crate::analysis::stop::is_stop_word;
use crate::error::{Result, SynsimError};

/// Letter runs over ASCII plus Latin Extended-A (covers ș, ț, ă and friends).
const GLOSS_TOKEN_PATTERN: &str = r"[a-zA-Z\u{0100}-\u{017F}]+";

/// Word runs for sentence input, including the Romanian diacritics that live
/// outside Latin Extended-A (â and î are in the Latin-1 Supplement).
const SENTENCE_WORD_PATTERN: &str = r"[a-zA-ZăâîșțĂÂÎȘȚ]+";

/// Minimum token length (in characters) kept by the gloss tokenizer.
const MIN_TOKEN_CHARS: usize = 3;

/// A tokenizer that reduces gloss text to a set of content tokens.
#[derive(Clone, Debug)]
pub struct GlossTokenizer {
    pattern: Regex,
}

impl GlossTokenizer {
    /// Create a gloss tokenizer with the default letter-run pattern.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(GLOSS_TOKEN_PATTERN)
            .map_err(|e| SynsimError::analysis(format!("Invalid token pattern: {e}")))?;
        Ok(GlossTokenizer { pattern })
    }

    /// Tokenize text into a set of lowercased content tokens.
    ///
    /// Stop words and tokens shorter than three characters are dropped.
    /// Empty input yields an empty set.
    pub fn token_set(&self, text: &str) -> AHashSet<String> {
        if text.is_empty() {
            return AHashSet::new();
        }

        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS && !is_stop_word(t))
            .map(|t| t.to_string())
            .collect()
    }

    /// Extend an existing token set with the tokens of `text`.
    pub fn extend_token_set(&self, tokens: &mut AHashSet<String>, text: &str) {
        if text.is_empty() {
            return;
        }
        let lowered = text.to_lowercase();
        for m in self.pattern.find_iter(&lowered) {
            let t = m.as_str();
            if t.chars().count() >= MIN_TOKEN_CHARS && !is_stop_word(t) {
                tokens.insert(t.to_string());
            }
        }
    }
}

impl Default for GlossTokenizer {
    fn default() -> Self {
        Self::new().expect("Default gloss token pattern should be valid")
    }
}

/// Extract the ordered, lowercased word sequence of a sentence.
pub fn sentence_words(text: &str) -> Vec<String> {
    static PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(SENTENCE_WORD_PATTERN).expect("Sentence word pattern should be valid")
    });

    let lowered = text.to_lowercase();
    PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
