//! PATH similarity: inverse shortest-path length.
//!
//! `PATH(a, b) = 1 / (shortest_path_length(a, b) + 1)`; identical synsets
//! score 1.0 and disconnected synsets score 0.0, so values lie in `[0, 1]`.

use std::sync::Arc;

use crate::similarity::measure::SimilarityMeasure;
use crate::traversal::TraversalEngine;

/// Path-based similarity measure.
pub struct PathMeasure {
    engine: Arc<TraversalEngine>,
}

impl PathMeasure {
    /// Create a PATH measure over the given engine.
    pub fn new(engine: Arc<TraversalEngine>) -> Self {
        PathMeasure { engine }
    }
}

impl SimilarityMeasure for PathMeasure {
    fn name(&self) -> &'static str {
        "path"
    }

    fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    fn synset_score(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }

        match self.engine.shortest_path_length(a, b) {
            Some(length) if length > 0 => 1.0 / (length as f64 + 1.0),
            _ => 0.0,
        }
    }
}
