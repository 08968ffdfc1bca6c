//! Synset and relation types.
//!
//! A [`Synset`] is one node of the taxonomy: an identifier, a part of
//! speech, the literal surface forms that express the sense, and a gloss
//! (definition text). A [`Relation`] is a directed, labeled edge between two
//! synset identifiers; the engine only distinguishes upward (hypernym) and
//! downward (hyponym) edges, classified once at build time from the label.
//!
//! # Examples
//!
//! ```
//! use synsim::taxonomy::{PartOfSpeech, Synset};
//!
//! let synset = Synset::new("dog-n-1", PartOfSpeech::Noun)
//!     .with_literals(vec!["dog".to_string(), "domestic dog".to_string()])
//!     .with_definition("a domesticated carnivorous mammal");
//!
//! assert_eq!(synset.pos, PartOfSpeech::Noun);
//! assert_eq!(synset.pos.as_str(), "n");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SynsimError;

/// Part-of-speech category of a synset.
///
/// Serialized with the conventional single-letter wordnet codes:
/// `n` (noun), `v` (verb), `a` (adjective), `r` (adverb).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "r")]
    Adverb,
}

impl PartOfSpeech {
    /// The single-letter code for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::Adverb => "r",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = SynsimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" | "noun" => Ok(PartOfSpeech::Noun),
            "v" | "verb" => Ok(PartOfSpeech::Verb),
            "a" | "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "r" | "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            other => Err(SynsimError::taxonomy(format!(
                "unknown part of speech: {other}"
            ))),
        }
    }
}

/// A taxonomy node: one word sense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    /// Unique identifier of the synset.
    pub id: String,

    /// Part-of-speech category.
    pub pos: PartOfSpeech,

    /// Surface forms (literals) expressing this sense.
    #[serde(default)]
    pub literals: Vec<String>,

    /// Definition text; may be empty.
    #[serde(default)]
    pub definition: String,
}

impl Synset {
    /// Create a new synset with no literals and an empty definition.
    pub fn new<S: Into<String>>(id: S, pos: PartOfSpeech) -> Self {
        Synset {
            id: id.into(),
            pos,
            literals: Vec::new(),
            definition: String::new(),
        }
    }

    /// Set the literals of this synset.
    pub fn with_literals(mut self, literals: Vec<String>) -> Self {
        self.literals = literals;
        self
    }

    /// Set the definition of this synset.
    pub fn with_definition<S: Into<String>>(mut self, definition: S) -> Self {
        self.definition = definition.into();
        self
    }
}

/// Semantic direction of a relation edge, derived from its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationDirection {
    /// Hypernym: points at a more general concept.
    Upward,
    /// Hyponym: points at a more specific concept.
    Downward,
    /// Any other relation kind; ignored by the traversal engine.
    Other,
}

impl RelationDirection {
    /// Classify a relation label by case-insensitive substring match.
    ///
    /// Labels containing "hypernym" are upward, labels containing "hyponym"
    /// are downward, everything else is [`RelationDirection::Other`]. The
    /// hyponym check runs first so that a label matching both (none do in
    /// practice) stays deterministic.
    pub fn from_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        if lowered.contains("hyponym") {
            RelationDirection::Downward
        } else if lowered.contains("hypernym") {
            RelationDirection::Upward
        } else {
            RelationDirection::Other
        }
    }
}

/// A directed, labeled edge from one synset to another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Identifier of the target synset.
    pub target: String,

    /// The relation-type label from the source resource.
    pub label: String,

    /// Direction classified from the label at build time.
    pub direction: RelationDirection,
}

impl Relation {
    /// Create a relation, classifying its direction from the label.
    pub fn new<T: Into<String>, L: Into<String>>(target: T, label: L) -> Self {
        let label = label.into();
        let direction = RelationDirection::from_label(&label);
        Relation {
            target: target.into(),
            label,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_round_trip() {
        for (code, pos) in [
            ("n", PartOfSpeech::Noun),
            ("v", PartOfSpeech::Verb),
            ("a", PartOfSpeech::Adjective),
            ("r", PartOfSpeech::Adverb),
        ] {
            assert_eq!(code.parse::<PartOfSpeech>().unwrap(), pos);
            assert_eq!(pos.as_str(), code);
        }
        assert!("x".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn test_pos_serde_codes() {
        let json = serde_json::to_string(&PartOfSpeech::Adverb).unwrap();
        assert_eq!(json, "\"r\"");
        let pos: PartOfSpeech = serde_json::from_str("\"v\"").unwrap();
        assert_eq!(pos, PartOfSpeech::Verb);
    }

    #[test]
    fn test_relation_direction_from_label() {
        assert_eq!(
            RelationDirection::from_label("hypernym"),
            RelationDirection::Upward
        );
        assert_eq!(
            RelationDirection::from_label("instance_hypernym"),
            RelationDirection::Upward
        );
        assert_eq!(
            RelationDirection::from_label("Hyponym"),
            RelationDirection::Downward
        );
        assert_eq!(
            RelationDirection::from_label("meronym"),
            RelationDirection::Other
        );
    }

    #[test]
    fn test_synset_builders() {
        let synset = Synset::new("cat-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["cat".to_string()])
            .with_definition("a small domesticated feline");
        assert_eq!(synset.id, "cat-n-1");
        assert_eq!(synset.literals, vec!["cat"]);
        assert!(!synset.definition.is_empty());
    }
}
