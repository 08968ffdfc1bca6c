//! Graph traversal primitives and their memoization.
//!
//! Everything the similarity measures need from the taxonomy lives here:
//! depth from root, descendant counting, information content, shortest
//! paths, ancestor sets, least-common-subsumer discovery, and the
//! direction-constrained search behind Hirst-St-Onge. The engine memoizes
//! depth, descendant counts, and information content; the graph never
//! changes, so the caches are valid for its whole lifetime.

pub mod cache;
pub mod engine;

// Re-export commonly used types
pub use cache::MemoCache;
pub use engine::{
    DirectedPath, HSO_CONST_C, HSO_CONST_K, HSO_MAX_DIRECTION_CHANGES, HSO_MAX_PATH_LENGTH,
    TraversalEngine,
};
