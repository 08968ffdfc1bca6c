//! # Synsim
//!
//! Semantic relatedness between word senses organized in a wordnet-style
//! hypernym/hyponym taxonomy.
//!
//! ## Features
//!
//! - In-memory, read-only taxonomy graph with a surface-form word index
//! - Traversal primitives: depth, shortest path, ancestor sets,
//!   least common subsumer, information content
//! - Lazy per-synset memoization shared across all measures
//! - Eight classical measures: PATH, WUP, LCH, RES, JCN, LIN, LESK, HSO
//! - Word-level "best pair across all senses" scoring
//! - Rule-based Romanian lemmatization and sentence-level similarity
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use synsim::similarity::{MeasureKind, SimilarityEngine};
//! use synsim::taxonomy::{PartOfSpeech, Synset, TaxonomyBuilder};
//!
//! let mut builder = TaxonomyBuilder::new();
//! builder.add_synset(
//!     Synset::new("animal-n-1", PartOfSpeech::Noun)
//!         .with_literals(vec!["animal".to_string()]),
//! );
//! builder.add_synset(
//!     Synset::new("dog-n-1", PartOfSpeech::Noun)
//!         .with_literals(vec!["dog".to_string()]),
//! );
//! builder.add_relation("dog-n-1", "animal-n-1", "hypernym");
//! builder.add_relation("animal-n-1", "dog-n-1", "hyponym");
//!
//! let engine = SimilarityEngine::new(Arc::new(builder.build()));
//! assert!(engine.max_similarity(MeasureKind::Wup, "dog", "animal") > 0.0);
//! ```

pub mod analysis;
pub mod error;
pub mod lemma;
pub mod sentence;
pub mod similarity;
pub mod taxonomy;
pub mod traversal;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
