//! Threshold-gated three-way classification.
//!
//! The confidence threshold is caller-supplied and deliberately not
//! validated here; the shell enforces the [0.5, 0.9] contract.

use crate::decision::Sentiment;

/// Map a positive probability and a confidence threshold to `(label,
/// confidence)`.
///
/// A message with weak but directionally positive signal below the threshold
/// is demoted to Neutral; that gating is intended behavior. The exact-0.5
/// branch (which also covers the no-signal sentinel) is kept explicit and is
/// never folded into the directional branches.
pub fn classify(positive_probability: f32, confidence_threshold: f32) -> (Sentiment, f32) {
    if positive_probability > 0.5 {
        let confidence = positive_probability;
        if confidence >= confidence_threshold {
            (Sentiment::Positive, confidence)
        } else {
            (Sentiment::Neutral, confidence)
        }
    } else if positive_probability < 0.5 {
        let confidence = 1.0 - positive_probability;
        if confidence >= confidence_threshold {
            (Sentiment::Negative, confidence)
        } else {
            (Sentiment::Neutral, confidence)
        }
    } else {
        (Sentiment::Neutral, 0.5)
    }
}
