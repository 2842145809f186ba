//! lexicon.rs — static PT-BR sentiment lexicon for customer-service tickets.
//!
//! Two disjoint sets of trigger terms (positive / negative), case-folded,
//! embedded at compile time and loaded once at first use. The lexicon is
//! read-only reference data; there is no reload or mutation API.
//!
//! Matching elsewhere in the crate is whole-word. Multi-word entries
//! ("não funciona", "nota 10", "sem resposta") are kept for fidelity with
//! the curated word lists, but a single token can never equal a multi-token
//! phrase, so they are dead under the current matching policy. See the
//! `multi_word_entries_never_match_a_single_token` test.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct RawLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

/// Frozen term sets per polarity.
#[derive(Debug)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

static LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    let raw = include_str!("../lexicon_ptbr.json");
    let parsed: RawLexicon = serde_json::from_str(raw).expect("valid PT-BR lexicon");
    Lexicon {
        positive: parsed.positive.into_iter().collect(),
        negative: parsed.negative.into_iter().collect(),
    }
});

impl Lexicon {
    /// Shared process-wide lexicon instance.
    pub fn get() -> &'static Lexicon {
        &LEXICON
    }

    #[inline]
    pub fn is_positive(&self, term: &str) -> bool {
        self.positive.contains(term)
    }

    #[inline]
    pub fn is_negative(&self, term: &str) -> bool {
        self.negative.contains(term)
    }

    pub fn positive_terms(&self) -> impl Iterator<Item = &str> {
        self.positive.iter().map(String::as_str)
    }

    pub fn negative_terms(&self) -> impl Iterator<Item = &str> {
        self.negative.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_sets_are_disjoint() {
        let lex = Lexicon::get();
        for t in lex.positive_terms() {
            assert!(!lex.is_negative(t), "term '{}' appears in both sets", t);
        }
    }

    #[test]
    fn all_terms_are_case_folded() {
        let lex = Lexicon::get();
        for t in lex.positive_terms().chain(lex.negative_terms()) {
            assert_eq!(t, t.to_lowercase(), "term '{}' is not lower-case", t);
        }
    }

    #[test]
    fn multi_word_entries_never_match_a_single_token() {
        // Known gap: these entries cannot equal any single token produced by
        // the tokenizer, so they never contribute to a score.
        let lex = Lexicon::get();
        let dead: Vec<&str> = lex
            .positive_terms()
            .chain(lex.negative_terms())
            .filter(|t| t.contains(' '))
            .collect();
        assert!(dead.contains(&"não funciona"));
        assert!(dead.contains(&"nota 10"));
        assert!(dead.contains(&"sem resposta"));
        for t in dead {
            assert!(crate::tokenize::tokenize(t).len() > 1);
        }
    }
}
