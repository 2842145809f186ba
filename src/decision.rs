//! decision.rs — value types for the classification outcome.
//!
//! `Analysis` is the standardized result the shell renders or stores:
//! label + confidence + raw probability/score + the business-facing
//! CX reading. Produced fresh per call and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// PT-BR display label, as shown in the history table and CSV export.
    pub fn display_ptbr(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Bom",
            Sentiment::Negative => "Ruim",
            Sentiment::Neutral => "Neutro",
        }
    }
}

/// Complete analysis result for one ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Share of positive hits among all lexicon hits, in [0,1].
    pub positive_probability: f32,
    /// Net polarity normalized by token count.
    pub polarity_score: f32,
    pub label: Sentiment,
    /// Certainty of the label, in [0,1].
    pub confidence: f32,
    /// Business interpretation of the label ("leitura de CX").
    pub reading: String,
}
