//! Similarity engine facade.
//!
//! [`SimilarityEngine`] is the narrow contract the outer service layer
//! consumes: it owns the taxonomy graph, one traversal engine (and thus one
//! set of memoization caches shared by all measures), and one instance of
//! each of the eight measures, built up front.
//!
//! "Not found" outcomes are values, not errors: an unknown word resolves to
//! an empty vector, an unresolvable pair to 0.0, a missing best pair to
//! `None`. Only an unknown measure name is an error, and that is caught when
//! parsing [`MeasureKind`], before this engine is reached.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use synsim::similarity::{MeasureKind, SimilarityEngine};
//! use synsim::taxonomy::{PartOfSpeech, Synset, TaxonomyBuilder};
//!
//! let mut builder = TaxonomyBuilder::new();
//! builder.add_synset(
//!     Synset::new("animal-n-1", PartOfSpeech::Noun)
//!         .with_literals(vec!["animal".to_string()]),
//! );
//! builder.add_synset(
//!     Synset::new("dog-n-1", PartOfSpeech::Noun)
//!         .with_literals(vec!["dog".to_string()]),
//! );
//! builder.add_relation("dog-n-1", "animal-n-1", "hypernym");
//! builder.add_relation("animal-n-1", "dog-n-1", "hyponym");
//!
//! let engine = SimilarityEngine::new(Arc::new(builder.build()));
//! let score = engine.max_similarity(MeasureKind::Wup, "dog", "animal");
//! assert!(score > 0.0);
//! assert_eq!(engine.max_similarity(MeasureKind::Wup, "dog", "unicorn"), 0.0);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::similarity::measure::{PairScore, SimilarityMeasure};
use crate::similarity::MeasureKind;
use crate::taxonomy::{PartOfSpeech, Synset, TaxonomyGraph};
use crate::traversal::TraversalEngine;

/// Facade over the graph, the traversal engine, and all eight measures.
pub struct SimilarityEngine {
    graph: Arc<TaxonomyGraph>,
    traversal: Arc<TraversalEngine>,
    measures: HashMap<MeasureKind, Box<dyn SimilarityMeasure>>,
}

impl SimilarityEngine {
    /// Create an engine over the given graph, building every measure once.
    pub fn new(graph: Arc<TaxonomyGraph>) -> Self {
        let traversal = Arc::new(TraversalEngine::new(graph.clone()));
        let measures = MeasureKind::ALL
            .iter()
            .map(|kind| (*kind, kind.build(traversal.clone())))
            .collect();

        SimilarityEngine {
            graph,
            traversal,
            measures,
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Arc<TaxonomyGraph> {
        &self.graph
    }

    /// The shared traversal engine (and its caches).
    pub fn traversal(&self) -> &Arc<TraversalEngine> {
        &self.traversal
    }

    /// Access a measure instance by kind.
    pub fn measure(&self, kind: MeasureKind) -> &dyn SimilarityMeasure {
        self.measures
            .get(&kind)
            .expect("every MeasureKind is built in new()")
            .as_ref()
    }

    /// All candidate synsets of a surface form, in sense-rank order.
    ///
    /// Empty when the word is unknown.
    pub fn resolve_synsets(&self, word: &str) -> Vec<&Synset> {
        self.graph.synsets_for_word(word)
    }

    /// Select one candidate synset of a word by optional POS filter and
    /// optional 1-based sense index.
    ///
    /// Candidates are first narrowed to the requested POS; the sense index
    /// then picks within the narrowed list, falling back to the first sense
    /// when absent or out of range. `None` when nothing matches.
    pub fn select_synset(
        &self,
        word: &str,
        pos: Option<PartOfSpeech>,
        sense: Option<usize>,
    ) -> Option<&Synset> {
        let candidates: Vec<&Synset> = self
            .resolve_synsets(word)
            .into_iter()
            .filter(|s| pos.is_none_or(|p| s.pos == p))
            .collect();

        match sense {
            Some(n) if n >= 1 && n <= candidates.len() => Some(candidates[n - 1]),
            _ => candidates.first().copied(),
        }
    }

    /// Raw measure score for a pair of synset identifiers.
    ///
    /// No POS gate is applied; the caller owns that policy.
    pub fn score(&self, kind: MeasureKind, id_a: &str, id_b: &str) -> f64 {
        self.measure(kind).synset_score(id_a, id_b)
    }

    /// Score a specific pair of synsets with the POS gate applied.
    ///
    /// POS-mismatched pairs score 0.0 unless the measure is POS-insensitive
    /// (LESK and HSO). A pair involving an unknown synset is treated as
    /// mismatched for POS-sensitive measures.
    pub fn score_pair(&self, kind: MeasureKind, id_a: &str, id_b: &str) -> f64 {
        let measure = self.measure(kind);
        if measure.pos_sensitive() {
            let pos_a = self.graph.synset(id_a).map(|s| s.pos);
            let pos_b = self.graph.synset(id_b).map(|s| s.pos);
            match (pos_a, pos_b) {
                (Some(a), Some(b)) if a == b => {}
                _ => return 0.0,
            }
        }
        measure.synset_score(id_a, id_b)
    }

    /// The best-scoring candidate pair for two words, or `None` when either
    /// word is unknown (or every pair was POS-filtered out).
    pub fn best_pair(&self, kind: MeasureKind, word1: &str, word2: &str) -> Option<PairScore> {
        self.measure(kind).best_pair(word1, word2)
    }

    /// The maximum score over all candidate pairs; 0.0 when either word is
    /// unresolvable.
    pub fn max_similarity(&self, kind: MeasureKind, word1: &str, word2: &str) -> f64 {
        self.measure(kind).max_similarity(word1, word2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TaxonomyBuilder;

    fn sample_engine() -> SimilarityEngine {
        let mut builder = TaxonomyBuilder::new();
        builder.add_synset(
            Synset::new("animal-n-1", PartOfSpeech::Noun)
                .with_literals(vec!["animal".to_string()])
                .with_definition("a living organism"),
        );
        builder.add_synset(
            Synset::new("dog-n-1", PartOfSpeech::Noun)
                .with_literals(vec!["dog".to_string()])
                .with_definition("a domesticated carnivorous mammal"),
        );
        builder.add_synset(
            Synset::new("dog-v-1", PartOfSpeech::Verb)
                .with_literals(vec!["dog".to_string()])
                .with_definition("to follow persistently"),
        );
        builder.add_relation("dog-n-1", "animal-n-1", "hypernym");
        builder.add_relation("animal-n-1", "dog-n-1", "hyponym");
        SimilarityEngine::new(Arc::new(builder.build()))
    }

    #[test]
    fn test_resolve_synsets() {
        let engine = sample_engine();
        assert_eq!(engine.resolve_synsets("dog").len(), 2);
        assert!(engine.resolve_synsets("unicorn").is_empty());
    }

    #[test]
    fn test_select_synset_by_pos_and_sense() {
        let engine = sample_engine();
        let verb = engine
            .select_synset("dog", Some(PartOfSpeech::Verb), None)
            .unwrap();
        assert_eq!(verb.id, "dog-v-1");

        // sense 2 of unfiltered "dog" is the verb
        let second = engine.select_synset("dog", None, Some(2)).unwrap();
        assert_eq!(second.id, "dog-v-1");

        // out-of-range sense falls back to the first
        let first = engine.select_synset("dog", None, Some(9)).unwrap();
        assert_eq!(first.id, "dog-n-1");

        assert!(
            engine
                .select_synset("animal", Some(PartOfSpeech::Verb), None)
                .is_none()
        );
    }

    #[test]
    fn test_score_pair_pos_gate() {
        let engine = sample_engine();
        // noun vs verb: gated to zero for a POS-sensitive measure
        assert_eq!(engine.score_pair(MeasureKind::Wup, "dog-n-1", "dog-v-1"), 0.0);
        // LESK passes through the gate
        let lesk = engine.score_pair(MeasureKind::Lesk, "dog-n-1", "dog-v-1");
        assert_eq!(lesk, engine.score(MeasureKind::Lesk, "dog-n-1", "dog-v-1"));
    }

    #[test]
    fn test_score_pair_unknown_synset() {
        let engine = sample_engine();
        assert_eq!(engine.score_pair(MeasureKind::Wup, "dog-n-1", "ghost"), 0.0);
    }

    #[test]
    fn test_best_pair_and_max_similarity() {
        let engine = sample_engine();
        let best = engine.best_pair(MeasureKind::Path, "dog", "animal").unwrap();
        assert_eq!(best.synset1, "dog-n-1");
        assert_eq!(best.synset2, "animal-n-1");
        assert_eq!(best.score, 0.5);
        assert_eq!(engine.max_similarity(MeasureKind::Path, "dog", "animal"), 0.5);
        assert_eq!(engine.max_similarity(MeasureKind::Path, "dog", "unicorn"), 0.0);
    }

    #[test]
    fn test_measures_share_caches() {
        let engine = sample_engine();
        engine.max_similarity(MeasureKind::Wup, "dog", "animal");
        // depth of both synsets is now memoized in the shared traversal engine
        assert_eq!(engine.traversal().depth("dog-n-1"), 2);
    }
}
