//! Rule-based Romanian lemmatizer.
//!
//! Maps inflected surface forms to dictionary forms by stripping common
//! inflectional suffixes. An irregular-form table is consulted first; after
//! that, candidate base forms are generated (longest suffixes first, with
//! the common feminine/plural endings re-attached) and validated against a
//! [`WordLookup`], typically the taxonomy's word index. Without a lookup,
//! the longest plausible suffix is stripped blindly.
//!
//! # Examples
//!
//! ```
//! use synsim::lemma::Lemmatizer;
//!
//! let lemmatizer = Lemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize("câinele"), "câine");
//! assert_eq!(lemmatizer.lemmatize("florile"), "floare");
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::analysis::sentence_words;
use crate::taxonomy::TaxonomyGraph;

/// A dictionary the lemmatizer can validate candidate forms against.
pub trait WordLookup: Send + Sync {
    /// Whether the dictionary contains the given (lowercased) form.
    fn contains(&self, word: &str) -> bool;
}

impl WordLookup for TaxonomyGraph {
    fn contains(&self, word: &str) -> bool {
        self.contains_word(word)
    }
}

/// Common noun suffixes: definite articles and plural endings.
const NOUN_SUFFIXES: &[&str] = &[
    "ul", "le", "a", "ua", "ului", "ilor", "elor", "i", "e", "uri", "ele", "ii", "iile", "urile",
];

/// Common verb suffixes: present, past, participle, and infinitive endings.
const VERB_SUFFIXES: &[&str] = &[
    "ez", "ezi", "ează", "ăm", "ați", "esc", "ești", "ește", "im", "iți", "am", "ai", "a",
    "ară", "au", "eam", "eai", "ea", "eau", "iam", "iai", "ia", "iau", "at", "it", "ut", "ât",
    "e", "i", "î",
];

/// Common adjective suffixes.
const ADJ_SUFFIXES: &[&str] = &["ă", "e", "i", "ul", "a", "ei", "ului", "ilor"];

/// Endings tried when re-attaching a base vowel after stripping.
const BASE_ENDINGS: &[&str] = &["ă", "e", "a"];

/// All suffixes, deduplicated and sorted longest first.
static ALL_SUFFIXES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut suffixes: Vec<&'static str> = NOUN_SUFFIXES
        .iter()
        .chain(VERB_SUFFIXES.iter())
        .chain(ADJ_SUFFIXES.iter())
        .copied()
        .collect();
    suffixes.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    suffixes.dedup();
    suffixes
});

/// Irregular inflected forms and their lemmas.
static IRREGULAR_FORMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("câinele", "câine"),
        ("câinelui", "câine"),
        ("câini", "câine"),
        ("câinii", "câine"),
        ("pisica", "pisică"),
        ("pisicii", "pisică"),
        ("pisici", "pisică"),
        ("oameni", "om"),
        ("oamenii", "om"),
        ("omul", "om"),
        ("copii", "copil"),
        ("copiii", "copil"),
        ("copilul", "copil"),
        ("femei", "femeie"),
        ("femeile", "femeie"),
        ("bărbați", "bărbat"),
        ("bărbații", "bărbat"),
        ("case", "casă"),
        ("casele", "casă"),
        ("casei", "casă"),
        ("mașini", "mașină"),
        ("mașinile", "mașină"),
        ("copaci", "copac"),
        ("copacii", "copac"),
        ("flori", "floare"),
        ("florile", "floare"),
        ("cărți", "carte"),
        ("cărțile", "carte"),
    ])
});

/// Minimum number of characters a stripped base must keep.
const MIN_BASE_CHARS: usize = 3;

/// Rule-based Romanian lemmatizer.
#[derive(Default)]
pub struct Lemmatizer<'a> {
    lookup: Option<&'a dyn WordLookup>,
}

impl<'a> Lemmatizer<'a> {
    /// Create a lemmatizer without dictionary validation.
    pub fn new() -> Self {
        Lemmatizer { lookup: None }
    }

    /// Create a lemmatizer that validates candidates against a dictionary.
    pub fn with_lookup(lookup: &'a dyn WordLookup) -> Self {
        Lemmatizer {
            lookup: Some(lookup),
        }
    }

    /// Find the base form of a word.
    ///
    /// Falls back to the (lowercased) input when no better form is found.
    pub fn lemmatize(&self, word: &str) -> String {
        let word = word.trim().to_lowercase();

        if let Some(lemma) = IRREGULAR_FORMS.get(word.as_str()) {
            return (*lemma).to_string();
        }

        if let Some(lookup) = self.lookup {
            if lookup.contains(&word) {
                return word;
            }
            for candidate in self.candidates(&word) {
                if lookup.contains(&candidate) {
                    return candidate;
                }
            }
            return word;
        }

        self.strip_longest_suffix(&word)
    }

    /// Lemmatize every word of a sentence, in order.
    pub fn lemmatize_sentence(&self, sentence: &str) -> Vec<String> {
        sentence_words(sentence)
            .iter()
            .map(|w| self.lemmatize(w))
            .collect()
    }

    /// Candidate base forms: stripped bases, each also re-extended with the
    /// common endings, longest suffixes first.
    fn candidates(&self, word: &str) -> Vec<String> {
        let mut candidates = Vec::new();
        for suffix in ALL_SUFFIXES.iter() {
            if let Some(base) = Self::strip(word, suffix) {
                candidates.push(base.clone());
                for ending in BASE_ENDINGS {
                    candidates.push(format!("{base}{ending}"));
                }
            }
        }
        candidates
    }

    /// Strip `suffix` from `word` when the remaining base keeps enough
    /// characters to stay a plausible stem.
    fn strip(word: &str, suffix: &str) -> Option<String> {
        let base = word.strip_suffix(suffix)?;
        if base.chars().count() >= MIN_BASE_CHARS {
            Some(base.to_string())
        } else {
            None
        }
    }

    fn strip_longest_suffix(&self, word: &str) -> String {
        for suffix in ALL_SUFFIXES.iter() {
            if let Some(base) = Self::strip(word, suffix) {
                return base;
            }
        }
        word.to_string()
    }
}
