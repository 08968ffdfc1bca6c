//! Taxonomy graph: synsets, typed relations, and the word index.
//!
//! The taxonomy is an in-memory, read-only graph of word senses connected by
//! hypernym (upward) and hyponym (downward) edges. It is constructed once,
//! through [`TaxonomyBuilder`] or from a JSON [`TaxonomyDocument`], and then
//! only read; every traversal and similarity computation is a pure function
//! of it.

pub mod document;
pub mod graph;
pub mod synset;

// Re-export commonly used types
pub use document::{RelationRecord, TaxonomyDocument};
pub use graph::{TaxonomyBuilder, TaxonomyGraph};
pub use synset::{PartOfSpeech, Relation, RelationDirection, Synset};
