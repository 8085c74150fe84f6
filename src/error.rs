//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for hymnal-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error raised while loading a songbook corpus.
///
/// These never escape into the scoring path: the corpus provider logs them
/// and hands the ranking engine an empty song list instead, so one broken
/// songbook cannot blank the whole application.
#[derive(Debug, Clone, Error)]
pub enum CorpusError {
    /// No songbook is registered under the requested id.
    #[error("no songbook registered for id '{book_id}'")]
    UnknownBook { book_id: String },
    /// The corpus source failed to produce the raw document.
    #[error("failed to fetch corpus for songbook '{book_id}': {message}")]
    Fetch { book_id: String, message: String },
    /// The raw document was not valid corpus JSON, or held no entry for the
    /// songbook's name.
    #[error("failed to parse corpus for songbook '{book_id}': {message}")]
    Parse { book_id: String, message: String },
}
