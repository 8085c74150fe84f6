//! Weighted field scoring: substring containment dominates, otherwise fuzzy
//! token pairs accumulate.

use super::similarity;

/// Threshold and field weights for match scoring.
///
/// The defaults bake the ranking priority into the weights themselves: a
/// title substring match outranks any author match, which outranks any lyric
/// match, and token-level matches sit an order of magnitude below their
/// field's substring score. Lyric tokens are worth 1 so they break ties
/// without overriding title or author signals.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Two tokens fuzzy-match when their similarity strictly exceeds this.
    /// 0.9 is deliberately strict: roughly one typo per ten letters.
    pub similarity_threshold: f64,
    pub title_match: u32,
    pub title_token: u32,
    pub author_match: u32,
    pub author_token: u32,
    pub lyric_match: u32,
    pub lyric_token: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.9,
            title_match: 1000,
            title_token: 100,
            author_match: 900,
            author_token: 90,
            lyric_match: 500,
            lyric_token: 1,
        }
    }
}

/// Scores one field against the query.
///
/// If the normalized field contains the whole normalized query as a
/// substring, that containment dominates and `substring_weight` is returned
/// outright. Otherwise every (field token, query token) pair above the
/// similarity threshold adds `token_weight`: a song whose words echo several
/// query words accumulates several increments. The accumulation is
/// deliberately uncapped.
pub(crate) fn score_field(
    field_text: &str,
    field_tokens: &[String],
    query: &str,
    query_tokens: &[String],
    substring_weight: u32,
    token_weight: u32,
    threshold: f64,
) -> u32 {
    if field_text.contains(query) {
        return substring_weight;
    }

    let mut score = 0;
    for word in field_tokens {
        for term in query_tokens {
            if similarity(word, term) > threshold {
                score += token_weight;
            }
        }
    }
    score
}
