//! Serializable document form of a taxonomy.
//!
//! The persisted wordnet resource format is owned by external loaders; this
//! module only provides a minimal JSON document shape so a graph can be
//! constructed from a file or embedded fixture:
//!
//! ```json
//! {
//!   "synsets": [
//!     {"id": "dog-n-1", "pos": "n", "literals": ["dog"], "definition": "..."}
//!   ],
//!   "relations": [
//!     {"source": "dog-n-1", "target": "animal-n-1", "label": "hypernym"}
//!   ]
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::taxonomy::graph::{TaxonomyBuilder, TaxonomyGraph};
use crate::taxonomy::synset::Synset;

/// One relation record of a taxonomy document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelationRecord {
    /// Source synset identifier.
    pub source: String,
    /// Target synset identifier.
    pub target: String,
    /// Relation-type label (classified by the builder).
    pub label: String,
}

/// A complete taxonomy document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyDocument {
    /// All synsets.
    #[serde(default)]
    pub synsets: Vec<Synset>,
    /// All relation edges.
    #[serde(default)]
    pub relations: Vec<RelationRecord>,
}

impl TaxonomyGraph {
    /// Build a graph from a parsed document.
    pub fn from_document(document: TaxonomyDocument) -> Self {
        let mut builder = TaxonomyBuilder::new();
        for synset in document.synsets {
            builder.add_synset(synset);
        }
        for relation in document.relations {
            builder.add_relation(relation.source, relation.target, relation.label);
        }
        builder.build()
    }

    /// Parse a JSON document string and build a graph from it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: TaxonomyDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Read a JSON document from a reader and build a graph from it.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let document: TaxonomyDocument = serde_json::from_reader(reader)?;
        Ok(Self::from_document(document))
    }
}
