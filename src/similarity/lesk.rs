//! Lesk similarity: extended gloss overlap.
//!
//! The extended gloss of a synset is the token set of its own definition,
//! plus the tokens of its own literals, plus the tokens of the definitions
//! of up to [`LESK_RELATED_LIMIT`] directly related synsets (upward then
//! downward neighbors, in graph order). The cross-synset score is the size
//! of the intersection of the two extended gloss sets.
//!
//! The same-synset score is deliberately NOT a self-intersection: it returns
//! the size of the synset's own extended gloss set. The asymmetry is part of
//! the scoring contract and pinned by a test.
//!
//! LESK is POS-insensitive: gloss overlap is meaningful across categories,
//! so word-level scoring does not skip POS-mismatched pairs.

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::GlossTokenizer;
use crate::similarity::measure::SimilarityMeasure;
use crate::traversal::TraversalEngine;

/// Number of related synsets whose definitions extend a gloss.
pub const LESK_RELATED_LIMIT: usize = 5;

/// Gloss-overlap similarity measure.
pub struct LeskMeasure {
    engine: Arc<TraversalEngine>,
    tokenizer: GlossTokenizer,
}

impl LeskMeasure {
    /// Create a LESK measure over the given engine with the default
    /// tokenizer.
    pub fn new(engine: Arc<TraversalEngine>) -> Self {
        LeskMeasure {
            engine,
            tokenizer: GlossTokenizer::default(),
        }
    }

    /// The extended gloss token set of a synset.
    pub fn extended_gloss(&self, id: &str) -> AHashSet<String> {
        let graph = self.engine.graph();
        let mut tokens = AHashSet::new();

        if let Some(synset) = graph.synset(id) {
            self.tokenizer.extend_token_set(&mut tokens, &synset.definition);
            for literal in &synset.literals {
                self.tokenizer.extend_token_set(&mut tokens, literal);
            }
        }

        for related in graph.related_neighbors(id).iter().take(LESK_RELATED_LIMIT) {
            if let Some(synset) = graph.synset(related) {
                self.tokenizer.extend_token_set(&mut tokens, &synset.definition);
            }
        }

        tokens
    }
}

impl SimilarityMeasure for LeskMeasure {
    fn name(&self) -> &'static str {
        "lesk"
    }

    fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    fn pos_sensitive(&self) -> bool {
        false
    }

    fn synset_score(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return self.extended_gloss(a).len() as f64;
        }

        let tokens_a = self.extended_gloss(a);
        let tokens_b = self.extended_gloss(b);
        if tokens_a.is_empty() || tokens_b.is_empty() {
            return 0.0;
        }

        tokens_a.intersection(&tokens_b).count() as f64
    }
}
