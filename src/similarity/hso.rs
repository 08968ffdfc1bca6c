//! Hirst-St-Onge similarity: path strength with direction-change penalty.
//!
//! `HSO(a, b) = max(0, C - path_length - k * direction_changes)` over the
//! strongest path found by the constrained directional search, with `C = 16`
//! and `k = 1`. Two concepts are related when a path connects them that is
//! not too long and does not reverse between upward and downward travel too
//! often. Identical synsets score the full constant; no in-bound path scores
//! 0.0. Values lie in `[0, 16]`.
//!
//! HSO is POS-insensitive: its path may cross categories, so word-level
//! scoring does not skip POS-mismatched pairs.

use std::sync::Arc;

use crate::similarity::measure::SimilarityMeasure;
use crate::traversal::{
    HSO_CONST_C, HSO_MAX_DIRECTION_CHANGES, HSO_MAX_PATH_LENGTH, TraversalEngine,
};

/// Hirst-St-Onge similarity measure.
pub struct HsoMeasure {
    engine: Arc<TraversalEngine>,
}

impl HsoMeasure {
    /// Create an HSO measure over the given engine with the default bounds.
    pub fn new(engine: Arc<TraversalEngine>) -> Self {
        HsoMeasure { engine }
    }
}

impl SimilarityMeasure for HsoMeasure {
    fn name(&self) -> &'static str {
        "hso"
    }

    fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    fn pos_sensitive(&self) -> bool {
        false
    }

    fn synset_score(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return HSO_CONST_C as f64;
        }

        match self
            .engine
            .constrained_path(a, b, HSO_MAX_PATH_LENGTH, HSO_MAX_DIRECTION_CHANGES)
        {
            Some(path) => path.strength().max(0.0),
            None => 0.0,
        }
    }
}
