//! Session-lifetime memoization of normalized and tokenized lyrics.
//!
//! Lyrics are by far the largest field, so their normalization is computed
//! once per song per session instead of once per keystroke. Entries are
//! keyed by song number and never evicted; `clear` exists for corpus
//! refreshes. Writes are idempotent, so redundant recomputation is the worst
//! that interleaved use can cause.

use crate::search::{normalize, tokenize};
use crate::song::Song;
use ahash::AHashMap;

/// Lazily populated per-song lyric derivations.
#[derive(Debug, Default)]
pub struct LyricCache {
    normalized: AHashMap<u32, String>,
    tokens: AHashMap<u32, Vec<String>>,
}

impl LyricCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry. Call on corpus refresh.
    pub fn clear(&mut self) {
        self.normalized.clear();
        self.tokens.clear();
    }

    /// Number of songs with cached derivations.
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Returns the normalized lyric text and its tokens for `song`,
    /// computing and retaining both on first access. All verse lines are
    /// normalized individually and joined with single spaces.
    pub(crate) fn normalized_and_tokens(&mut self, song: &Song) -> (&str, &[String]) {
        let normalized = self.normalized.entry(song.number).or_insert_with(|| {
            song.lyric_lines()
                .map(normalize)
                .collect::<Vec<_>>()
                .join(" ")
        });
        let tokens = self
            .tokens
            .entry(song.number)
            .or_insert_with(|| tokenize(normalized));
        (normalized.as_str(), tokens.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::{Song, Verse};
    use assert2::check;

    fn song_with_lyrics(number: u32, lines: &[&str]) -> Song {
        Song {
            number,
            title: String::new(),
            author: String::new(),
            verses: vec![Verse {
                label: "Verse 1".to_string(),
                lines: lines.iter().map(|l| (*l).to_string()).collect(),
            }],
            presentation: vec!["Verse 1".to_string()],
        }
    }

    #[test]
    fn populates_lazily_and_joins_verse_lines() {
        let mut cache = LyricCache::new();
        let song = song_with_lyrics(5, &["Amazing grace,", "How sweet the sound!"]);

        check!(cache.is_empty());
        let (text, tokens) = cache.normalized_and_tokens(&song);
        check!(text == "amazing grace how sweet the sound");
        check!(tokens.len() == 6);
        check!(cache.len() == 1);
    }

    #[test]
    fn repeated_access_is_idempotent() {
        let mut cache = LyricCache::new();
        let song = song_with_lyrics(5, &["Line one"]);

        let first = cache.normalized_and_tokens(&song).0.to_string();
        let second = cache.normalized_and_tokens(&song).0.to_string();
        check!(first == second);
        check!(cache.len() == 1);
    }

    #[test]
    fn clear_empties_both_maps() {
        let mut cache = LyricCache::new();
        cache.normalized_and_tokens(&song_with_lyrics(1, &["a"]));
        cache.clear();
        check!(cache.is_empty());
    }
}
