//! End-to-end sentence scoring: tokenization, lemmatization, word matrix.

use std::sync::Arc;

use synsim::lemma::Lemmatizer;
use synsim::sentence::sentence_similarity;
use synsim::similarity::{MeasureKind, SimilarityEngine};
use synsim::taxonomy::{PartOfSpeech, Synset, TaxonomyBuilder, TaxonomyGraph};

/// A bilingual toy taxonomy: animal > {câine, pisică}, plant > floare.
fn graph() -> Arc<TaxonomyGraph> {
    let mut builder = TaxonomyBuilder::new();
    builder.add_synset(
        Synset::new("animal-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["animal".to_string()]),
    );
    builder.add_synset(
        Synset::new("caine-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["câine".to_string()]),
    );
    builder.add_synset(
        Synset::new("pisica-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["pisică".to_string()]),
    );
    builder.add_synset(
        Synset::new("floare-n-1", PartOfSpeech::Noun)
            .with_literals(vec!["floare".to_string()]),
    );
    for child in ["caine-n-1", "pisica-n-1"] {
        builder.add_relation(child, "animal-n-1", "hypernym");
        builder.add_relation("animal-n-1", child, "hyponym");
    }
    Arc::new(builder.build())
}

#[test]
fn test_lemmatizer_validates_against_graph() {
    let graph = graph();
    let lemmatizer = Lemmatizer::with_lookup(graph.as_ref());
    assert_eq!(lemmatizer.lemmatize("câinele"), "câine");
    assert_eq!(lemmatizer.lemmatize("florile"), "floare");
    assert_eq!(lemmatizer.lemmatize("pisicii"), "pisică");
}

#[test]
fn test_inflected_sentences_are_resolved() {
    let engine = SimilarityEngine::new(graph());
    let result = sentence_similarity(
        &engine,
        MeasureKind::Wup,
        "Câinele aleargă",
        "Pisica doarme",
    );
    assert_eq!(result.words1, vec!["câine"]);
    assert_eq!(result.words2, vec!["pisică"]);
    // siblings under animal: wup = 2*1 / (2+2)
    assert!((result.score - 0.5).abs() < 1e-12);
}

#[test]
fn test_unrelated_words_drag_the_score_down() {
    let engine = SimilarityEngine::new(graph());
    let related = sentence_similarity(&engine, MeasureKind::Wup, "câine", "pisică").score;
    let unrelated = sentence_similarity(&engine, MeasureKind::Wup, "câine", "floare").score;
    assert!(related > unrelated);
    assert_eq!(unrelated, 0.0);
}

#[test]
fn test_matrix_is_words1_by_words2() {
    let engine = SimilarityEngine::new(graph());
    let result = sentence_similarity(
        &engine,
        MeasureKind::Path,
        "câine pisică",
        "animal floare câine",
    );
    assert_eq!(result.matrix.len(), 2);
    assert!(result.matrix.iter().all(|row| row.len() == 3));
    // câine vs câine
    assert_eq!(result.matrix[0][2], 1.0);
}

#[test]
fn test_empty_sentences_score_zero() {
    let engine = SimilarityEngine::new(graph());
    let result = sentence_similarity(&engine, MeasureKind::Wup, "", "câine");
    assert_eq!(result.score, 0.0);
    assert!(result.matrix.is_empty());
}
