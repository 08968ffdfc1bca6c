//! Resnik similarity: information content of the least common subsumer.
//!
//! `RES(a, b) = IC(lcs(a, b))`; identical synsets score their own IC, and
//! synsets with no common ancestor score 0.0.

use std::sync::Arc;

use crate::similarity::measure::SimilarityMeasure;
use crate::traversal::TraversalEngine;

/// Resnik similarity measure.
pub struct ResMeasure {
    engine: Arc<TraversalEngine>,
}

impl ResMeasure {
    /// Create a RES measure over the given engine.
    pub fn new(engine: Arc<TraversalEngine>) -> Self {
        ResMeasure { engine }
    }
}

impl SimilarityMeasure for ResMeasure {
    fn name(&self) -> &'static str {
        "res"
    }

    fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    fn synset_score(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return self.engine.information_content(a);
        }

        match self.engine.least_common_subsumer(a, b) {
            Some(lcs) => self.engine.information_content(&lcs),
            None => 0.0,
        }
    }
}
