//! Similarity measures over the taxonomy.
//!
//! Eight classical relatedness measures, each a thin formula on top of the
//! traversal primitives:
//!
//! | name   | idea                                            | range        |
//! |--------|-------------------------------------------------|--------------|
//! | `path` | inverse shortest-path length                    | 0..=1        |
//! | `wup`  | Wu-Palmer, depth of the common subsumer         | 0..=1        |
//! | `lch`  | Leacock-Chodorow, log-scaled path length        | 0..~3.7      |
//! | `res`  | Resnik, IC of the common subsumer               | 0..max IC    |
//! | `jcn`  | Jiang-Conrath, inverse IC distance              | 0..1e10      |
//! | `lin`  | Lin, normalized IC of the common subsumer       | 0..=1        |
//! | `lesk` | extended gloss overlap                          | 0..gloss size|
//! | `hso`  | Hirst-St-Onge, path length + direction changes  | 0..=16       |
//!
//! [`MeasureKind`] names the measures and builds them; [`SimilarityEngine`]
//! is the facade that owns a graph, a traversal engine, and one instance of
//! every measure.

pub mod engine;
pub mod hso;
pub mod jcn;
pub mod lch;
pub mod lesk;
pub mod lin;
pub mod measure;
pub mod path;
pub mod res;
pub mod wup;

// Re-export commonly used types
pub use engine::SimilarityEngine;
pub use hso::HsoMeasure;
pub use jcn::{JCN_MAX_SIMILARITY, JcnMeasure};
pub use lch::LchMeasure;
pub use lesk::{LESK_RELATED_LIMIT, LeskMeasure};
pub use lin::LinMeasure;
pub use measure::{PairScore, SimilarityMeasure};
pub use path::PathMeasure;
pub use res::ResMeasure;
pub use wup::WupMeasure;

use std::str::FromStr;
use std::sync::Arc;

use crate::error::SynsimError;
use crate::traversal::TraversalEngine;

/// The eight supported measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasureKind {
    Path,
    Wup,
    Lch,
    Res,
    Jcn,
    Lin,
    Lesk,
    Hso,
}

impl MeasureKind {
    /// All measure kinds, in display order.
    pub const ALL: [MeasureKind; 8] = [
        MeasureKind::Path,
        MeasureKind::Wup,
        MeasureKind::Lch,
        MeasureKind::Res,
        MeasureKind::Jcn,
        MeasureKind::Lin,
        MeasureKind::Lesk,
        MeasureKind::Hso,
    ];

    /// The lowercase registry name of this measure.
    pub fn name(&self) -> &'static str {
        match self {
            MeasureKind::Path => "path",
            MeasureKind::Wup => "wup",
            MeasureKind::Lch => "lch",
            MeasureKind::Res => "res",
            MeasureKind::Jcn => "jcn",
            MeasureKind::Lin => "lin",
            MeasureKind::Lesk => "lesk",
            MeasureKind::Hso => "hso",
        }
    }

    /// Build an instance of this measure over the given traversal engine.
    pub fn build(&self, engine: Arc<TraversalEngine>) -> Box<dyn SimilarityMeasure> {
        match self {
            MeasureKind::Path => Box::new(PathMeasure::new(engine)),
            MeasureKind::Wup => Box::new(WupMeasure::new(engine)),
            MeasureKind::Lch => Box::new(LchMeasure::new(engine)),
            MeasureKind::Res => Box::new(ResMeasure::new(engine)),
            MeasureKind::Jcn => Box::new(JcnMeasure::new(engine)),
            MeasureKind::Lin => Box::new(LinMeasure::new(engine)),
            MeasureKind::Lesk => Box::new(LeskMeasure::new(engine)),
            MeasureKind::Hso => Box::new(HsoMeasure::new(engine)),
        }
    }
}

impl FromStr for MeasureKind {
    type Err = SynsimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "path" => Ok(MeasureKind::Path),
            "wup" => Ok(MeasureKind::Wup),
            "lch" => Ok(MeasureKind::Lch),
            "res" => Ok(MeasureKind::Res),
            "jcn" => Ok(MeasureKind::Jcn),
            "lin" => Ok(MeasureKind::Lin),
            "lesk" => Ok(MeasureKind::Lesk),
            "hso" => Ok(MeasureKind::Hso),
            other => Err(SynsimError::measure(format!("unknown measure: {other}"))),
        }
    }
}

impl std::fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_fixture::five_node_engine;

    #[test]
    fn test_measure_kind_parse() {
        assert_eq!("wup".parse::<MeasureKind>().unwrap(), MeasureKind::Wup);
        assert_eq!("LESK".parse::<MeasureKind>().unwrap(), MeasureKind::Lesk);
        assert!("cosine".parse::<MeasureKind>().is_err());
    }

    #[test]
    fn test_measure_kind_name_round_trip() {
        for kind in MeasureKind::ALL {
            assert_eq!(kind.name().parse::<MeasureKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_build_all_measures() {
        let engine = five_node_engine();
        for kind in MeasureKind::ALL {
            let measure = kind.build(engine.clone());
            assert_eq!(measure.name(), kind.name());
        }
    }

    #[test]
    fn test_pos_exemption_list() {
        let engine = five_node_engine();
        for kind in MeasureKind::ALL {
            let measure = kind.build(engine.clone());
            let exempt = matches!(kind, MeasureKind::Lesk | MeasureKind::Hso);
            assert_eq!(measure.pos_sensitive(), !exempt);
        }
    }
}
