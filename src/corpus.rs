//! Corpus retrieval and per-songbook caching.
//!
//! The corpus document for a songbook is a JSON object keyed by songbook name
//! whose value is the song array. Retrieval is the one suspending operation
//! in the crate: each songbook is fetched at most once per process lifetime
//! and the canonicalized songs are held in memory behind an `Arc`. Failures
//! never propagate into ranking; the provider logs and returns an empty list.

use crate::error::{CorpusError, Result};
use crate::song::{RawSong, Song, Songbook};
use ahash::AHashMap;
use std::path::Path;
use std::sync::Arc;

/// Supplies the raw corpus JSON document for a songbook.
///
/// The library ships [`FileCorpusSource`]; embedders with a remote corpus
/// implement this over their own transport.
#[allow(async_fn_in_trait)]
pub trait CorpusSource {
    async fn load(&self, book: &Songbook) -> Result<String>;
}

/// Corpus source that reads `lyrics_url` as a filesystem path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileCorpusSource;

impl CorpusSource for FileCorpusSource {
    async fn load(&self, book: &Songbook) -> Result<String> {
        let contents = tokio::fs::read_to_string(Path::new(&book.lyrics_url))
            .await
            .map_err(|e| CorpusError::Fetch {
                book_id: book.id.clone(),
                message: e.to_string(),
            })?;
        Ok(contents)
    }
}

/// Caching corpus provider: owns the songbook registry and one in-memory
/// song list per fetched songbook id.
pub struct CorpusProvider<S> {
    source: S,
    books: Vec<Songbook>,
    cache: AHashMap<String, Arc<[Song]>>,
}

impl<S: CorpusSource> CorpusProvider<S> {
    /// Creates a provider with an empty cache over the given registry.
    pub fn new(source: S, books: Vec<Songbook>) -> Self {
        Self {
            source,
            books,
            cache: AHashMap::new(),
        }
    }

    /// Looks up a registered songbook by id.
    pub fn songbook(&self, book_id: &str) -> Option<&Songbook> {
        self.books.iter().find(|book| book.id == book_id)
    }

    /// The registered songbooks, in registration order.
    pub fn songbooks(&self) -> &[Songbook] {
        &self.books
    }

    /// Returns the songs for `book_id`, fetching and canonicalizing on first
    /// use. Unknown ids and fetch/parse failures log an error and yield an
    /// empty list; failures are not cached, so a later call retries.
    pub async fn get_songs(&mut self, book_id: &str) -> Arc<[Song]> {
        if let Some(songs) = self.cache.get(book_id) {
            tracing::debug!("Returning cached songs for book '{}'", book_id);
            return Arc::clone(songs);
        }

        match self.fetch(book_id).await {
            Ok(songs) => {
                tracing::info!("Loaded {} songs for book '{}'", songs.len(), book_id);
                self.cache.insert(book_id.to_string(), Arc::clone(&songs));
                songs
            }
            Err(e) => {
                tracing::error!("Failed to load songs for book '{}': {}", book_id, e);
                Arc::from(Vec::new())
            }
        }
    }

    /// Drops every cached song list. The next `get_songs` per book refetches.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    async fn fetch(&self, book_id: &str) -> Result<Arc<[Song]>> {
        let book = self.songbook(book_id).ok_or_else(|| CorpusError::UnknownBook {
            book_id: book_id.to_string(),
        })?;

        let document = self.source.load(book).await?;

        let parse_error = |message: String| CorpusError::Parse {
            book_id: book_id.to_string(),
            message,
        };
        let mut root: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&document).map_err(|e| parse_error(e.to_string()))?;
        let raw = root
            .remove(&book.name)
            .ok_or_else(|| parse_error(format!("document has no entry for '{}'", book.name)))?;
        let raw_songs: Vec<RawSong> =
            serde_json::from_value(raw).map_err(|e| parse_error(e.to_string()))?;

        let songs: Vec<Song> = raw_songs.into_iter().map(RawSong::canonicalize).collect();
        Ok(Arc::from(songs))
    }
}
