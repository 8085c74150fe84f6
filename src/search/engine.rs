//! Song ranking: per-song score aggregation, filtering, and deterministic
//! ordering, plus the [`SearchEngine`] facade that owns the caches.

use crate::corpus::{CorpusProvider, CorpusSource};
use crate::search::cache::LyricCache;
use crate::search::scoring::{ScoringConfig, score_field};
use crate::search::{normalize, tokenize};
use crate::song::Song;

/// Ranks `songs` against `query` and returns the matches in display order.
///
/// Three query shapes, checked in order:
/// - empty query: browse-all mode, the corpus comes back unfiltered in its
///   original order;
/// - all-digit query: exact prefix lookup on the decimal song number, in
///   original order, never fuzzy ("53" finds 53 and 530-539);
/// - anything else: every song is scored across title, author, and lyrics,
///   songs scoring zero are dropped, and the rest are sorted descending by
///   score. The sort is stable, so equal scores keep corpus order; repeated
///   identical queries must produce identical orderings.
///
/// The input is never mutated. Scoring populates `cache` as a byproduct.
pub fn rank_songs(
    songs: &[Song],
    query: &str,
    config: &ScoringConfig,
    cache: &mut LyricCache,
) -> Vec<Song> {
    if query.is_empty() {
        return songs.to_vec();
    }

    if is_numeric(query) {
        return songs
            .iter()
            .filter(|song| song.number.to_string().starts_with(query))
            .cloned()
            .collect();
    }

    let search = normalize(query);
    let search_tokens = tokenize(&search);

    let mut scored: Vec<(Song, u32)> = songs
        .iter()
        .filter_map(|song| {
            let score = match_score(song, &search, &search_tokens, config, cache);
            (score > 0).then(|| (song.clone(), score))
        })
        .collect();
    // Stable sort: ties keep corpus order.
    scored.sort_by(|(_, a), (_, b)| b.cmp(a));
    scored.into_iter().map(|(song, _)| song).collect()
}

/// A query is numeric when it is non-empty and entirely ASCII digits.
/// Anything else, including signs and decimal points, takes the text path.
fn is_numeric(query: &str) -> bool {
    !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit())
}

/// Aggregate match score for one song: the sum of the three weighted field
/// scores. Title and author are normalized per call (they are short);
/// lyrics come from the session cache.
fn match_score(
    song: &Song,
    search: &str,
    search_tokens: &[String],
    config: &ScoringConfig,
    cache: &mut LyricCache,
) -> u32 {
    let mut score = 0;

    let title = normalize(&song.title);
    let title_tokens = tokenize(&title);
    score += score_field(
        &title,
        &title_tokens,
        search,
        search_tokens,
        config.title_match,
        config.title_token,
        config.similarity_threshold,
    );

    let author = normalize(&song.author);
    let author_tokens = tokenize(&author);
    score += score_field(
        &author,
        &author_tokens,
        search,
        search_tokens,
        config.author_match,
        config.author_token,
        config.similarity_threshold,
    );

    let (lyrics, lyric_tokens) = cache.normalized_and_tokens(song);
    score += score_field(
        lyrics,
        lyric_tokens,
        search,
        search_tokens,
        config.lyric_match,
        config.lyric_token,
        config.similarity_threshold,
    );

    score
}

/// Search facade owning the corpus provider, scoring configuration, and
/// lyric cache. Single-threaded by design: `&mut self` everywhere, no locks.
pub struct SearchEngine<S> {
    corpus: CorpusProvider<S>,
    config: ScoringConfig,
    lyrics: LyricCache,
}

impl<S: CorpusSource> SearchEngine<S> {
    /// Creates an engine with the default weights.
    pub fn new(corpus: CorpusProvider<S>) -> Self {
        Self::with_config(corpus, ScoringConfig::default())
    }

    /// Creates an engine with custom weights (testing, tuning).
    pub fn with_config(corpus: CorpusProvider<S>, config: ScoringConfig) -> Self {
        Self {
            corpus,
            config,
            lyrics: LyricCache::new(),
        }
    }

    /// Lists the songs of `book_id` filtered and ordered by `query`.
    ///
    /// A songbook that cannot be loaded ranks as an empty corpus; no error
    /// reaches the caller.
    pub async fn list_songs(&mut self, book_id: &str, query: &str) -> Vec<Song> {
        let songs = self.corpus.get_songs(book_id).await;
        rank_songs(&songs, query, &self.config, &mut self.lyrics)
    }

    /// Fetches a single song by its song number.
    pub async fn song(&mut self, book_id: &str, number: u32) -> Option<Song> {
        let songs = self.corpus.get_songs(book_id).await;
        songs.iter().find(|song| song.number == number).cloned()
    }

    /// Number of songs in the songbook, zero when it cannot be loaded.
    pub async fn song_count(&mut self, book_id: &str) -> usize {
        self.corpus.get_songs(book_id).await.len()
    }

    /// Explicitly resets the corpus and lyric caches (corpus refresh).
    pub fn clear_caches(&mut self) {
        self.corpus.clear();
        self.lyrics.clear();
    }

    /// The underlying corpus provider (songbook registry access).
    pub fn corpus(&self) -> &CorpusProvider<S> {
        &self.corpus
    }
}
