//! Lin similarity: normalized information content of the least common
//! subsumer.
//!
//! `LIN(a, b) = 2 * IC(lcs) / (IC(a) + IC(b))`; identical synsets score 1.0,
//! and the measure falls back to 0.0 when there is no common ancestor or the
//! denominator is zero (two root-like synsets with zero IC).

use std::sync::Arc;

use crate::similarity::measure::SimilarityMeasure;
use crate::traversal::TraversalEngine;

/// Lin similarity measure.
pub struct LinMeasure {
    engine: Arc<TraversalEngine>,
}

impl LinMeasure {
    /// Create a LIN measure over the given engine.
    pub fn new(engine: Arc<TraversalEngine>) -> Self {
        LinMeasure { engine }
    }
}

impl SimilarityMeasure for LinMeasure {
    fn name(&self) -> &'static str {
        "lin"
    }

    fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    fn synset_score(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }

        let Some(lcs) = self.engine.least_common_subsumer(a, b) else {
            return 0.0;
        };

        let denominator =
            self.engine.information_content(a) + self.engine.information_content(b);
        if denominator == 0.0 {
            return 0.0;
        }

        2.0 * self.engine.information_content(&lcs) / denominator
    }
}
