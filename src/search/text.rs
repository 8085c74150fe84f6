//! Text canonicalization for comparison: case folding, diacritic and
//! punctuation stripping, whitespace collapsing, and tokenization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Produces the canonical comparison form of a string: NFKD-folded,
/// lowercase, diacritics and punctuation stripped, whitespace collapsed to
/// single spaces, trimmed. Pure and deterministic.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(c.to_lowercase());
        }
        // Everything else is punctuation; drop it.
    }
    out
}

/// Splits a normalized string into non-empty word tokens, preserving order
/// and duplicates. Whitespace-only input yields no tokens.
pub fn tokenize(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}
