//! In-memory taxonomy graph and word index.
//!
//! [`TaxonomyGraph`] owns every synset and its outbound relation edges, plus
//! a reverse index from lowercased surface form to candidate synsets. The
//! graph is built once through [`TaxonomyBuilder`] and is read-only
//! afterwards; all traversal state lives outside it.
//!
//! Absence is never an error here: looking up an unknown word yields an
//! empty slice, neighbor queries on an unknown identifier yield an empty
//! vector, and an edge pointing at a missing synset is simply a dead end.
//!
//! # Examples
//!
//! ```
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
//! let graph = builder.build();
//!
//! assert_eq!(graph.synset_count(), 2);
//! assert!(graph.contains_word("Dog"));
//! assert_eq!(graph.upward_neighbors("dog-n-1"), vec!["animal-n-1"]);
//! ```

use ahash::AHashMap;

use crate::taxonomy::synset::{Relation, RelationDirection, Synset};

/// The read-only taxonomy: synsets, typed edges, and the word index.
#[derive(Debug, Default)]
pub struct TaxonomyGraph {
    synsets: AHashMap<String, Synset>,
    relations: AHashMap<String, Vec<Relation>>,
    word_index: AHashMap<String, Vec<String>>,
}

impl TaxonomyGraph {
    /// Look up a synset by identifier.
    pub fn synset(&self, id: &str) -> Option<&Synset> {
        self.synsets.get(id)
    }

    /// All synsets containing the given surface form, in sense-rank order.
    ///
    /// The lookup is case-insensitive. Unknown words yield an empty vector.
    pub fn synsets_for_word(&self, word: &str) -> Vec<&Synset> {
        self.synset_ids_for_word(word)
            .iter()
            .filter_map(|id| self.synsets.get(id))
            .collect()
    }

    /// Identifiers of the synsets containing the given surface form.
    pub fn synset_ids_for_word(&self, word: &str) -> &[String] {
        self.word_index
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any synset contains the given surface form.
    ///
    /// This is the single capability the lemmatizer consumes to validate
    /// stripped-suffix candidates.
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_index.contains_key(&word.to_lowercase())
    }

    /// Targets of the upward (hypernym) edges of `id`.
    pub fn upward_neighbors(&self, id: &str) -> Vec<String> {
        self.neighbors(id, RelationDirection::Upward)
    }

    /// Targets of the downward (hyponym) edges of `id`.
    pub fn downward_neighbors(&self, id: &str) -> Vec<String> {
        self.neighbors(id, RelationDirection::Downward)
    }

    /// Upward neighbors followed by downward neighbors.
    ///
    /// The enumeration order matters: the gloss-overlap measure extends a
    /// synset's gloss with the definitions of the first few related synsets
    /// in exactly this order.
    pub fn related_neighbors(&self, id: &str) -> Vec<String> {
        let mut related = self.upward_neighbors(id);
        related.extend(self.downward_neighbors(id));
        related
    }

    fn neighbors(&self, id: &str, direction: RelationDirection) -> Vec<String> {
        self.relations
            .get(id)
            .map(|edges| {
                edges
                    .iter()
                    .filter(|r| r.direction == direction)
                    .map(|r| r.target.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of synsets in the graph.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Number of distinct indexed surface forms.
    pub fn word_count(&self) -> usize {
        self.word_index.len()
    }

    /// Iterate over all synset identifiers (unordered).
    pub fn synset_ids(&self) -> impl Iterator<Item = &str> {
        self.synsets.keys().map(String::as_str)
    }
}

/// Builder for [`TaxonomyGraph`]; the only mutation point of the taxonomy.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    synsets: Vec<Synset>,
    relations: AHashMap<String, Vec<Relation>>,
}

impl TaxonomyBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        TaxonomyBuilder::default()
    }

    /// Add a synset. A later synset with the same id replaces the earlier
    /// one in the graph, but the earlier one keeps its word-index slots.
    pub fn add_synset(&mut self, synset: Synset) -> &mut Self {
        self.synsets.push(synset);
        self
    }

    /// Add a directed relation edge.
    ///
    /// Precondition (unchecked): hypernym and hyponym edges in the source
    /// resource are mutual inverses. The engine trusts the resource and
    /// never verifies symmetry.
    pub fn add_relation<S, T, L>(&mut self, source: S, target: T, label: L) -> &mut Self
    where
        S: Into<String>,
        T: Into<String>,
        L: Into<String>,
    {
        self.relations
            .entry(source.into())
            .or_default()
            .push(Relation::new(target, label));
        self
    }

    /// Build the graph and its word index.
    ///
    /// The word index records, per lowercased literal, the synsets that
    /// contain it in insertion order; that order defines sense rank (sense 1
    /// is the first synset added for the word).
    pub fn build(self) -> TaxonomyGraph {
        let mut word_index: AHashMap<String, Vec<String>> = AHashMap::new();
        let mut synsets = AHashMap::with_capacity(self.synsets.len());

        for synset in self.synsets {
            for literal in &synset.literals {
                let key = literal.to_lowercase();
                let ids = word_index.entry(key).or_default();
                if !ids.contains(&synset.id) {
                    ids.push(synset.id.clone());
                }
            }
            synsets.insert(synset.id.clone(), synset);
        }

        TaxonomyGraph {
            synsets,
            relations: self.relations,
            word_index,
        }
    }
}
