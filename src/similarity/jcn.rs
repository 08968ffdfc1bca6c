//! Jiang-Conrath similarity: inverse information-content distance.
//!
//! `distance = IC(a) + IC(b) - 2 * IC(lcs)`, `JCN(a, b) = 1 / distance`.
//! Identical synsets (and pairs at zero distance) score the cap value;
//! synsets with no common ancestor score 0.0.

use std::sync::Arc;

use crate::similarity::measure::SimilarityMeasure;
use crate::traversal::TraversalEngine;

/// Cap applied when the IC distance collapses to zero.
pub const JCN_MAX_SIMILARITY: f64 = 1e10;

/// Jiang-Conrath similarity measure.
pub struct JcnMeasure {
    engine: Arc<TraversalEngine>,
}

impl JcnMeasure {
    /// Create a JCN measure over the given engine.
    pub fn new(engine: Arc<TraversalEngine>) -> Self {
        JcnMeasure { engine }
    }
}

impl SimilarityMeasure for JcnMeasure {
    fn name(&self) -> &'static str {
        "jcn"
    }

    fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    fn synset_score(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return JCN_MAX_SIMILARITY;
        }

        let Some(lcs) = self.engine.least_common_subsumer(a, b) else {
            return 0.0;
        };

        let distance = self.engine.information_content(a) + self.engine.information_content(b)
            - 2.0 * self.engine.information_content(&lcs);

        if distance <= 0.0 {
            return JCN_MAX_SIMILARITY;
        }

        1.0 / distance
    }
}
