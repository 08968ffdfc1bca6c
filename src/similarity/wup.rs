//! Wu-Palmer similarity: depth of the least common subsumer scaled by the
//! depths of the two synsets.
//!
//! `WUP(a, b) = 2 * depth(lcs) / (depth(a) + depth(b))`; identical synsets
//! score 1.0, synsets with no common ancestor score 0.0.

use std::sync::Arc;

use crate::similarity::measure::SimilarityMeasure;
use crate::traversal::TraversalEngine;

/// Wu-Palmer similarity measure.
pub struct WupMeasure {
    engine: Arc<TraversalEngine>,
}

impl WupMeasure {
    /// Create a WUP measure over the given engine.
    pub fn new(engine: Arc<TraversalEngine>) -> Self {
        WupMeasure { engine }
    }
}

impl SimilarityMeasure for WupMeasure {
    fn name(&self) -> &'static str {
        "wup"
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

        let depth_lcs = self.engine.depth(&lcs) as f64;
        let denominator = (self.engine.depth(a) + self.engine.depth(b)) as f64;
        if denominator == 0.0 {
            return 0.0;
        }

        2.0 * depth_lcs / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::test_fixture::five_node_engine;

    #[test]
    fn test_identity_scores_one() {
        let measure = WupMeasure::new(five_node_engine());
        assert_eq!(measure.synset_score("B1", "B1"), 1.0);
    }

    #[test]
    fn test_scenario_value() {
        let measure = WupMeasure::new(five_node_engine());
        // lcs(A1, B) = R at depth 1; depths 3 and 2
        assert_eq!(measure.synset_score("A1", "B"), 0.4);
    }

    #[test]
    fn test_symmetry_and_range() {
        let measure = WupMeasure::new(five_node_engine());
        let ab = measure.synset_score("A", "B1");
        assert_eq!(ab, measure.synset_score("B1", "A"));
        assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn test_no_lcs_scores_zero() {
        let measure = WupMeasure::new(five_node_engine());
        assert_eq!(measure.synset_score("A1", "ghost"), 0.0);
    }
}
