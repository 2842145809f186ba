//! # Analysis Pipeline
//! Pure, testable composition: scorer → classifier → CX reading.
//! No I/O, no shared state; safe to call concurrently without locking.

use crate::classify::classify;
use crate::decision::Analysis;
use crate::reading::cx_reading;
use crate::sentiment::SentimentAnalyzer;

/// Sole core entry point consumed by the presentation shell.
///
/// Every string input produces a valid `Analysis`; empty or signal-free text
/// takes the neutral sentinel path. The threshold is used as given — the
/// shell owns the [0.5, 0.9] contract.
pub fn analyze(text: &str, confidence_threshold: f32) -> Analysis {
    let score = SentimentAnalyzer::new().score_text(text);
    let (label, confidence) = classify(score.positive_probability, confidence_threshold);

    Analysis {
        positive_probability: score.positive_probability,
        polarity_score: score.polarity_score,
        label,
        confidence,
        reading: cx_reading(label).to_string(),
    }
}
