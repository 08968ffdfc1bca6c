//! Leacock-Chodorow similarity: negative log of the path length scaled by
//! the maximum taxonomy depth.
//!
//! `LCH(a, b) = -ln((path_length + 1) / (2 * max_depth + 1))` where
//! `max_depth` is the fixed per-POS table value for synset `a`'s category
//! (noun when `a` is unknown). Identical synsets score the formula's
//! maximum, `-ln(1 / (2 * max_depth + 1))`; a path at or beyond the scaling
//! window and disconnected synsets score 0.0.

use std::sync::Arc;

use crate::similarity::measure::SimilarityMeasure;
use crate::taxonomy::PartOfSpeech;
use crate::traversal::TraversalEngine;

/// Leacock-Chodorow similarity measure.
pub struct LchMeasure {
    engine: Arc<TraversalEngine>,
}

impl LchMeasure {
    /// Create an LCH measure over the given engine.
    pub fn new(engine: Arc<TraversalEngine>) -> Self {
        LchMeasure { engine }
    }

    /// The scaling denominator `2 * max_depth + 1` for synset `id`.
    fn scale(&self, id: &str) -> f64 {
        let pos = self
            .engine
            .graph()
            .synset(id)
            .map(|s| s.pos)
            .unwrap_or(PartOfSpeech::Noun);
        (2 * self.engine.max_depth(pos) + 1) as f64
    }
}

impl SimilarityMeasure for LchMeasure {
    fn name(&self) -> &'static str {
        "lch"
    }

    fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    fn synset_score(&self, a: &str, b: &str) -> f64 {
        let scale = self.scale(a);

        if a == b {
            return -(1.0 / scale).ln();
        }

        let Some(length) = self.engine.shortest_path_length(a, b) else {
            return 0.0;
        };

        let numerator = (length + 1) as f64;
        if numerator >= scale {
            return 0.0;
        }

        -(numerator / scale).ln()
    }
}
