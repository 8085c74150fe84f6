//! Normalized edit-distance similarity, the fuzzy-match primitive.
//!
//! Kept dependency-free on purpose: the ranking contract needs exactly one
//! similarity measure, and owning it keeps the threshold semantics stable.

/// Levenshtein distance over chars, two-row dynamic programming.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}

/// Similarity in `[0, 1]`: `(longest - distance) / longest` with a floor of
/// one on the length, i.e. `1 - distance / max(|a|, |b|, 1)`.
///
/// Symmetric and reflexive; any non-empty string has similarity 0 to the
/// empty string. Two tokens count as a fuzzy match when this exceeds the
/// configured threshold (0.9 by default), which is strict enough that only
/// near-identical tokens collide: a one-character typo on a ten-letter word
/// passes, two edits on a five-letter word do not.
pub(crate) fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count()).max(1);
    (longest - levenshtein(a, b)) as f64 / longest as f64
}
