//! Sentence-level similarity.
//!
//! Scores two sentences by comparing their content words pairwise with a
//! word-level measure: each sentence is tokenized, lemmatized against the
//! taxonomy, and deduplicated (keeping order); the full word-pair similarity
//! matrix is then computed (rows in parallel) and the final score is the
//! harmonic mean of the two directional best-match averages (for every word
//! of one sentence, the best score against any word of the other).
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use synsim::similarity::{MeasureKind, SimilarityEngine};
//! use synsim::sentence::sentence_similarity;
//! use synsim::taxonomy::TaxonomyGraph;
//!
//! # fn load() -> Arc<TaxonomyGraph> { unimplemented!() }
//! let engine = SimilarityEngine::new(load());
//! let result = sentence_similarity(&engine, MeasureKind::Wup, "câinele aleargă", "pisica doarme");
//! println!("{}", result.score);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::sentence_words;
use crate::lemma::Lemmatizer;
use crate::similarity::{MeasureKind, SimilarityEngine};

/// Result of scoring two sentences.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentenceScore {
    /// Overall similarity: harmonic mean of the directional averages.
    pub score: f64,
    /// Lemmatized, deduplicated content words of the first sentence.
    pub words1: Vec<String>,
    /// Lemmatized, deduplicated content words of the second sentence.
    pub words2: Vec<String>,
    /// Word-pair similarity matrix, `words1` rows by `words2` columns.
    pub matrix: Vec<Vec<f64>>,
}

impl SentenceScore {
    fn empty(words1: Vec<String>, words2: Vec<String>) -> Self {
        SentenceScore {
            score: 0.0,
            words1,
            words2,
            matrix: Vec::new(),
        }
    }
}

/// Score two sentences with the given measure.
///
/// Words missing from the taxonomy (after lemmatization) are dropped; when
/// either sentence keeps no words, the score is 0.0 and the matrix is empty.
pub fn sentence_similarity(
    engine: &SimilarityEngine,
    kind: MeasureKind,
    sentence1: &str,
    sentence2: &str,
) -> SentenceScore {
    let words1 = resolve_words(engine, sentence1);
    let words2 = resolve_words(engine, sentence2);

    if words1.is_empty() || words2.is_empty() {
        return SentenceScore::empty(words1, words2);
    }

    let matrix: Vec<Vec<f64>> = words1
        .par_iter()
        .map(|w1| {
            words2
                .iter()
                .map(|w2| {
                    if w1 == w2 {
                        1.0
                    } else {
                        engine.max_similarity(kind, w1, w2)
                    }
                })
                .collect()
        })
        .collect();

    let avg1 = matrix
        .iter()
        .map(|row| row.iter().copied().fold(0.0, f64::max))
        .sum::<f64>()
        / words1.len() as f64;

    let avg2 = (0..words2.len())
        .map(|j| matrix.iter().map(|row| row[j]).fold(0.0, f64::max))
        .sum::<f64>()
        / words2.len() as f64;

    let score = if avg1 + avg2 == 0.0 {
        0.0
    } else {
        2.0 * avg1 * avg2 / (avg1 + avg2)
    };

    SentenceScore {
        score,
        words1,
        words2,
        matrix,
    }
}

/// Tokenize a sentence and keep the taxonomy-resolvable form of every word:
/// the lemma when indexed, else the raw form when indexed, else nothing.
/// Duplicates are removed, first occurrence wins.
fn resolve_words(engine: &SimilarityEngine, sentence: &str) -> Vec<String> {
    let graph = engine.graph();
    let lemmatizer = Lemmatizer::with_lookup(graph.as_ref());

    let mut words = Vec::new();
    for word in sentence_words(sentence) {
        let lemma = lemmatizer.lemmatize(&word);
        let resolved = if graph.contains_word(&lemma) {
            lemma
        } else if graph.contains_word(&word) {
            word
        } else {
            continue;
        };
        if !words.contains(&resolved) {
            words.push(resolved);
        }
    }
    words
}
