//! The similarity measure trait and word-level scoring helpers.
//!
//! Every measure implements [`SimilarityMeasure::synset_score`] as a thin
//! formula over [`TraversalEngine`] primitives. Word-level scoring, the best
//! pair across all senses of two words, is shared across measures and
//! provided by the trait: candidate synsets are resolved through the word
//! index, every candidate pair is scored, and the maximal score (or the pair
//! achieving it) is returned.
//!
//! Most measures only compare synsets of the same part of speech, so the
//! pair enumeration skips POS-mismatched pairs. Gloss overlap (LESK) and
//! Hirst-St-Onge (HSO) are the documented exceptions: they override
//! [`SimilarityMeasure::pos_sensitive`] to `false` and score every pair.

use serde::{Deserialize, Serialize};

use crate::traversal::TraversalEngine;

/// A scored pair of synsets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    /// Identifier of the first synset.
    pub synset1: String,
    /// Identifier of the second synset.
    pub synset2: String,
    /// The measure's score for the pair.
    pub score: f64,
}

/// A relatedness measure between two synsets.
pub trait SimilarityMeasure: Send + Sync {
    /// The lowercase name of this measure (for registry lookup and display).
    fn name(&self) -> &'static str;

    /// The traversal engine this measure scores through.
    fn engine(&self) -> &TraversalEngine;

    /// Whether word-level scoring should skip POS-mismatched synset pairs.
    ///
    /// Defaults to `true`; LESK and HSO return `false`.
    fn pos_sensitive(&self) -> bool {
        true
    }

    /// Score a pair of synsets.
    ///
    /// POS agreement is the caller's responsibility; the formula itself
    /// never checks it. Unknown identifiers score as unrelated (the
    /// measure's no-relation value), never as errors.
    fn synset_score(&self, a: &str, b: &str) -> f64;

    /// Score every candidate synset pair of two surface forms.
    ///
    /// Pairs are enumerated in sense-rank order (all senses of `word1`
    /// crossed with all senses of `word2`); POS-mismatched pairs are skipped
    /// when [`Self::pos_sensitive`] holds. Either word unknown yields an
    /// empty vector.
    fn pair_scores(&self, word1: &str, word2: &str) -> Vec<PairScore> {
        let graph = self.engine().graph();
        let synsets1 = graph.synsets_for_word(word1);
        let synsets2 = graph.synsets_for_word(word2);

        let mut results = Vec::new();
        for s1 in &synsets1 {
            for s2 in &synsets2 {
                if self.pos_sensitive() && s1.pos != s2.pos {
                    continue;
                }
                results.push(PairScore {
                    synset1: s1.id.clone(),
                    synset2: s2.id.clone(),
                    score: self.synset_score(&s1.id, &s2.id),
                });
            }
        }
        results
    }

    /// The maximum score over all candidate pairs; 0.0 when there are none.
    fn max_similarity(&self, word1: &str, word2: &str) -> f64 {
        self.pair_scores(word1, word2)
            .iter()
            .map(|p| p.score)
            .fold(0.0, f64::max)
    }

    /// The candidate pair achieving the maximum score.
    ///
    /// Ties break by enumeration order: the first maximum wins.
    fn best_pair(&self, word1: &str, word2: &str) -> Option<PairScore> {
        let mut best: Option<PairScore> = None;
        for pair in self.pair_scores(word1, word2) {
            match &best {
                Some(b) if pair.score <= b.score => {}
                _ => best = Some(pair),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::taxonomy::{PartOfSpeech, Synset, TaxonomyBuilder};

    /// A toy measure: depth difference, to exercise the provided methods.
    struct DepthGap {
        engine: TraversalEngine,
    }

    impl SimilarityMeasure for DepthGap {
        fn name(&self) -> &'static str {
            "depth_gap"
        }

        fn engine(&self) -> &TraversalEngine {
            &self.engine
        }

        fn synset_score(&self, a: &str, b: &str) -> f64 {
            let da = self.engine.depth(a) as f64;
            let db = self.engine.depth(b) as f64;
            1.0 / (1.0 + (da - db).abs())
        }
    }

    fn toy_measure() -> DepthGap {
        let mut builder = TaxonomyBuilder::new();
        builder.add_synset(
            Synset::new("thing-n-1", PartOfSpeech::Noun)
                .with_literals(vec!["thing".to_string()]),
        );
        builder.add_synset(
            Synset::new("tool-n-1", PartOfSpeech::Noun)
                .with_literals(vec!["tool".to_string()]),
        );
        builder.add_synset(
            Synset::new("tool-v-1", PartOfSpeech::Verb)
                .with_literals(vec!["tool".to_string()]),
        );
        builder.add_relation("tool-n-1", "thing-n-1", "hypernym");
        builder.add_relation("thing-n-1", "tool-n-1", "hyponym");
        DepthGap {
            engine: TraversalEngine::new(Arc::new(builder.build())),
        }
    }

    #[test]
    fn test_pair_scores_skip_pos_mismatch() {
        let measure = toy_measure();
        // "tool" has a noun and a verb sense; only the noun pairs with "thing"
        let pairs = measure.pair_scores("tool", "thing");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].synset1, "tool-n-1");
    }

    #[test]
    fn test_unknown_word_yields_no_pairs() {
        let measure = toy_measure();
        assert!(measure.pair_scores("tool", "widget").is_empty());
        assert_eq!(measure.max_similarity("tool", "widget"), 0.0);
        assert!(measure.best_pair("tool", "widget").is_none());
    }

    #[test]
    fn test_best_pair_first_max_wins() {
        let measure = toy_measure();
        let best = measure.best_pair("tool", "thing").unwrap();
        assert_eq!(best.synset1, "tool-n-1");
        assert_eq!(best.synset2, "thing-n-1");
        assert_eq!(best.score, measure.max_similarity("tool", "thing"));
    }
}
