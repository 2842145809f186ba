//! sentiment.rs — lexicon scorer for PT-BR ticket text.
//!
//! Produces a positive probability in [0,1] and a length-normalized polarity
//! score. Pure and deterministic; any string is valid input.

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::tokenize::tokenize;

/// Raw scoring outcome, before classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// Share of positive hits among all lexicon hits; 0.5 when no signal.
    pub positive_probability: f32,
    /// `(pos - neg) / max(1, tokens)` — net polarity normalized by message
    /// length so longer neutral text does not inflate magnitude.
    pub polarity_score: f32,
    pub pos_hits: usize,
    pub neg_hits: usize,
    pub token_count: usize,
}

impl SentimentScore {
    /// Neutral sentinel for empty text or text with zero lexicon hits.
    fn no_signal(token_count: usize) -> Self {
        Self {
            positive_probability: 0.5,
            polarity_score: 0.0,
            pos_hits: 0,
            neg_hits: 0,
            token_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score a ticket text against the static lexicon.
    ///
    /// Hits are counted per lexicon term: a term present anywhere among the
    /// tokens counts once, regardless of how often it repeats. Whole-word
    /// matching only; multi-word lexicon entries therefore never match.
    pub fn score_text(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::no_signal(0);
        }

        let tokens = tokenize(text);
        let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();

        let lex = Lexicon::get();
        let pos_hits = lex
            .positive_terms()
            .filter(|t| token_set.contains(t))
            .count();
        let neg_hits = lex
            .negative_terms()
            .filter(|t| token_set.contains(t))
            .count();

        let total = pos_hits + neg_hits;
        if total == 0 {
            return SentimentScore::no_signal(tokens.len());
        }

        let positive_probability = pos_hits as f32 / total as f32;
        let polarity_score = (pos_hits as f32 - neg_hits as f32) / tokens.len().max(1) as f32;

        SentimentScore {
            positive_probability,
            polarity_score,
            pos_hits,
            neg_hits,
            token_count: tokens.len(),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
