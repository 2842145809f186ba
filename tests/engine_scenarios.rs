// tests/engine_scenarios.rs
//
// Library-level properties of the pure pipeline, beyond the per-module
// unit tests: sentinel equivalence, threshold sensitivity, symmetry,
// bit-identical idempotence.

use cx_sentiment_analyzer::analyze;
use cx_sentiment_analyzer::Sentiment;

const DEFAULT_T: f32 = 0.6;

#[test]
fn empty_and_signal_free_text_share_the_neutral_sentinel() {
    let empty = analyze("", DEFAULT_T);
    let no_hits = analyze("lorem ipsum dolor", DEFAULT_T);

    for a in [&empty, &no_hits] {
        assert_eq!(a.positive_probability, 0.5);
        assert_eq!(a.polarity_score, 0.0);
        assert_eq!(a.label, Sentiment::Neutral);
        assert_eq!(a.confidence, 0.5);
    }
    assert_eq!(empty.reading, no_hits.reading);
}

#[test]
fn threshold_choice_alone_crosses_the_label_boundary() {
    // probability 2/3: two positive hits, one negative
    let text = "bom rápido ruim";

    let below = analyze(text, 0.6);
    assert_eq!(below.label, Sentiment::Positive);

    let above = analyze(text, 0.7);
    assert_eq!(above.label, Sentiment::Neutral);

    // Probability and confidence are untouched by the gating.
    assert_eq!(below.positive_probability, above.positive_probability);
    assert_eq!(below.confidence, above.confidence);
}

#[test]
fn mirrored_tickets_flip_labels_with_equal_confidence() {
    // One hit each way in otherwise identical sentences.
    let pos = analyze("o atendimento foi bom hoje", DEFAULT_T);
    let neg = analyze("o atendimento foi ruim hoje", DEFAULT_T);

    assert_eq!(pos.label, Sentiment::Positive);
    assert_eq!(neg.label, Sentiment::Negative);
    assert_eq!(pos.confidence, neg.confidence);
    assert_eq!(pos.polarity_score, -neg.polarity_score);
}

#[test]
fn results_are_bit_identical_across_calls() {
    let text = "Ótimo atendimento, mas o aplicativo segue travando";
    let a = analyze(text, DEFAULT_T);
    let b = analyze(text, DEFAULT_T);

    assert_eq!(
        a.positive_probability.to_bits(),
        b.positive_probability.to_bits()
    );
    assert_eq!(a.polarity_score.to_bits(), b.polarity_score.to_bits());
    assert_eq!(a.confidence.to_bits(), b.confidence.to_bits());
    assert_eq!(a, b);
}

#[test]
fn weak_directional_signal_is_demoted_not_flipped() {
    // probability 4/7 ≈ 0.571: directionally positive but below the 0.6 gate.
    let text = "bom rápido educado legal ruim erro falha";
    let a = analyze(text, DEFAULT_T);
    assert_eq!(a.label, Sentiment::Neutral);
    assert!(a.positive_probability > 0.5);
    assert!(a.confidence < DEFAULT_T);
}
