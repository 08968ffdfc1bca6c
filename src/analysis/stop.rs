//! Stop-word lists for gloss and sentence analysis.
//!
//! Gloss overlap scoring is only meaningful over content words, so the
//! tokenizer drops common function words before building token sets. Two
//! default lists are provided, one for English and one for Romanian, and the
//! combined set used by the default gloss tokenizer covers both languages
//! (glosses in bilingual wordnet resources routinely mix them).
//!
//! # Examples
//!
//! ```
//! use synsim::analysis::stop::{DEFAULT_STOP_WORDS_SET, is_stop_word};
//!
//! assert!(is_stop_word("the"));
//! assert!(is_stop_word("pentru"));
//! assert!(!is_stop_word("taxonomy"));
//! assert!(DEFAULT_STOP_WORDS_SET.contains("despre"));
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default English stop words list.
///
/// Common English function words that carry no gloss-overlap signal.
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
    "can", "of", "in", "to", "for", "with", "on", "at", "by", "from", "as", "into", "through",
    "during", "before", "after", "above", "below", "between", "under", "again", "further",
    "then", "once", "here", "there", "when", "where", "why", "how", "all", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "just", "and", "but", "if", "or", "because", "while", "although",
    "this", "that", "these", "those", "it", "its", "i", "you", "he", "she", "we", "they",
    "what", "which", "who", "whom", "whose",
];

/// Default Romanian stop words list.
///
/// Articles, prepositions, pronouns, and common auxiliary forms.
pub const DEFAULT_ROMANIAN_STOP_WORDS: &[&str] = &[
    "un", "o", "una", "este", "sunt", "era", "fost", "fi", "fiind", "avea", "are", "au", "de",
    "la", "cu", "pe", "in", "pentru", "din", "ca", "prin", "despre", "spre", "intre", "sub",
    "peste", "dupa", "inainte", "aici", "acolo", "cand", "unde", "cum", "toti", "toate",
    "fiecare", "mai", "cel", "cea", "cei", "cele", "alt", "alta", "alti", "alte", "nici",
    "numai", "doar", "si", "dar", "daca", "sau", "aceasta", "acest", "aceste", "acestea",
    "el", "ea", "ei", "ele", "noi", "voi", "ce", "care", "cine", "cui",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_ENGLISH_STOP_WORDS.iter().copied().collect());

/// Default Romanian stop words as a HashSet.
pub static DEFAULT_ROMANIAN_STOP_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_ROMANIAN_STOP_WORDS.iter().copied().collect());

/// Combined bilingual stop-word set used by the default gloss tokenizer.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .chain(DEFAULT_ROMANIAN_STOP_WORDS.iter())
        .copied()
        .collect()
});

/// Check whether a (lowercased) token is in the combined default list.
pub fn is_stop_word(token: &str) -> bool {
    DEFAULT_STOP_WORDS_SET.contains(token)
}
