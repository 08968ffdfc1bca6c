//! Text analysis for gloss overlap and sentence scoring.
//!
//! This module provides the tokenization and stop-word filtering used by the
//! LESK gloss-overlap measure and by sentence-level similarity: a gloss
//! tokenizer that reduces definition text to content-token sets, and a
//! sentence word extractor that preserves order for lemmatization.

pub mod stop;
pub mod tokenizer;

// Re-export commonly used types
pub use stop::{DEFAULT_STOP_WORDS_SET, is_stop_word};
pub use tokenizer::{GlossTokenizer, sentence_words};
