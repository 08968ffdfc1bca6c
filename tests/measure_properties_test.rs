//! Property tests over all eight measures on a small animal taxonomy.

use std::sync::Arc;

use synsim::similarity::{LeskMeasure, MeasureKind, SimilarityEngine, SimilarityMeasure};
use synsim::taxonomy::{PartOfSpeech, Synset, TaxonomyBuilder, TaxonomyGraph};
use synsim::traversal::TraversalEngine;

/// entity > animal > {dog > puppy, cat}; plus an unrelated verb sense.
fn animal_graph() -> Arc<TaxonomyGraph> {
    let mut builder = TaxonomyBuilder::new();
    builder.add_synset(
        Synset::new("entity-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["entity".to_string()])
            .with_definition("something that exists"),
    );
    builder.add_synset(
        Synset::new("animal-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["animal".to_string()])
            .with_definition("a living organism that feeds and moves"),
    );
    builder.add_synset(
        Synset::new("dog-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["dog".to_string()])
            .with_definition("a domesticated carnivorous mammal kept as a companion"),
    );
    builder.add_synset(
        Synset::new("puppy-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["puppy".to_string()])
            .with_definition("a young domesticated dog"),
    );
    builder.add_synset(
        Synset::new("cat-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["cat".to_string()])
            .with_definition("a small domesticated mammal that hunts mice"),
    );
    builder.add_synset(
        Synset::new("bark-v-1", PartOfSpeech::Verb)
            .with_literals(vec!["bark".to_string()])
            .with_definition("to make the cry of a dog"),
    );
    for (child, parent) in [
        ("animal-n-1", "entity-n-1"),
        ("dog-n-1", "animal-n-1"),
        ("cat-n-1", "animal-n-1"),
        ("puppy-n-1", "dog-n-1"),
    ] {
        builder.add_relation(child, parent, "hypernym");
        builder.add_relation(parent, child, "hyponym");
    }
    Arc::new(builder.build())
}

const SYNSETS: [&str; 5] = ["entity-n-1", "animal-n-1", "dog-n-1", "puppy-n-1", "cat-n-1"];

#[test]
fn test_depth_and_descendants_invariants() {
    let engine = TraversalEngine::new(animal_graph());
    for id in SYNSETS {
        assert!(engine.depth(id) >= 1, "depth({id}) must be >= 1");
        assert!(engine.descendant_count(id) >= 1);
        assert!(engine.information_content(id) >= 0.0);
        assert_eq!(engine.shortest_path_length(id, id), Some(0));
        assert_eq!(engine.least_common_subsumer(id, id), Some(id.to_string()));
    }
}

#[test]
fn test_symmetric_measures() {
    let engine = SimilarityEngine::new(animal_graph());
    for kind in [
        MeasureKind::Path,
        MeasureKind::Wup,
        MeasureKind::Res,
        MeasureKind::Jcn,
        MeasureKind::Lin,
    ] {
        for a in SYNSETS {
            for b in SYNSETS {
                let ab = engine.score(kind, a, b);
                let ba = engine.score(kind, b, a);
                assert_eq!(ab, ba, "{kind}({a}, {b}) must be symmetric");
            }
        }
    }
}

#[test]
fn test_unit_interval_measures() {
    let engine = SimilarityEngine::new(animal_graph());
    for kind in [MeasureKind::Path, MeasureKind::Wup, MeasureKind::Lin] {
        for a in SYNSETS {
            for b in SYNSETS {
                let score = engine.score(kind, a, b);
                assert!(
                    (0.0..=1.0).contains(&score),
                    "{kind}({a}, {b}) = {score} out of [0, 1]"
                );
            }
            assert_eq!(engine.score(kind, a, a), 1.0, "{kind} identity");
        }
    }
}

#[test]
fn test_hso_bounds() {
    let engine = SimilarityEngine::new(animal_graph());
    for a in SYNSETS {
        assert_eq!(engine.score(MeasureKind::Hso, a, a), 16.0);
        for b in SYNSETS {
            let score = engine.score(MeasureKind::Hso, a, b);
            assert!((0.0..=16.0).contains(&score));
        }
    }
}

#[test]
fn test_lesk_self_score_is_gloss_size() {
    let traversal = Arc::new(TraversalEngine::new(animal_graph()));
    let lesk = LeskMeasure::new(traversal);
    for id in SYNSETS {
        let gloss_size = lesk.extended_gloss(id).len() as f64;
        assert_eq!(lesk.synset_score(id, id), gloss_size);
    }
}

#[test]
fn test_closer_synsets_score_higher() {
    let engine = SimilarityEngine::new(animal_graph());
    for kind in [MeasureKind::Path, MeasureKind::Wup, MeasureKind::Lin] {
        let near = engine.score(kind, "puppy-n-1", "dog-n-1");
        let far = engine.score(kind, "puppy-n-1", "entity-n-1");
        assert!(near > far, "{kind}: puppy~dog should beat puppy~entity");
    }
}

#[test]
fn test_pos_gate_on_specific_pairs() {
    let engine = SimilarityEngine::new(animal_graph());
    // noun vs verb is gated for POS-sensitive measures
    assert_eq!(engine.score_pair(MeasureKind::Wup, "dog-n-1", "bark-v-1"), 0.0);
    assert_eq!(engine.score_pair(MeasureKind::Path, "dog-n-1", "bark-v-1"), 0.0);
    // LESK and HSO pass through; the glosses share "dog"
    assert!(engine.score_pair(MeasureKind::Lesk, "dog-n-1", "bark-v-1") >= 0.0);
    assert_eq!(
        engine.score_pair(MeasureKind::Hso, "dog-n-1", "bark-v-1"),
        engine.score(MeasureKind::Hso, "dog-n-1", "bark-v-1")
    );
}

#[test]
fn test_word_level_pos_exemption() {
    // a POS-sensitive measure finds no dog/bark pair, LESK finds one
    let engine = SimilarityEngine::new(animal_graph());
    assert!(engine.best_pair(MeasureKind::Wup, "dog", "bark").is_none());
    assert!(engine.best_pair(MeasureKind::Lesk, "dog", "bark").is_some());
}
