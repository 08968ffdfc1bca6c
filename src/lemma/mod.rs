//! Surface-form normalization (lemmatization).
//!
//! The taxonomy indexes dictionary forms; sentence input arrives inflected.
//! This module bridges the two with a rule-based Romanian lemmatizer that
//! consumes a single capability from the graph: "does this candidate form
//! exist" (the [`WordLookup`] trait).

pub mod lemmatizer;

// Re-export commonly used types
pub use lemmatizer::{Lemmatizer, WordLookup};
