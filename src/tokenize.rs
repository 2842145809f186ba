//! Unicode-aware word tokenizer shared by the scorer.

use once_cell::sync::Lazy;
use regex::Regex;

// `\w` in the regex crate is Unicode-aware, so accented Portuguese letters
// and the underscore count as word characters.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Lower-cased word tokens: maximal runs of word characters; punctuation and
/// whitespace are separators and discarded. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
