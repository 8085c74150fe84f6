//! Songbook search and ranking core for hymnal applications.
//!
//! The crate turns a free-text or numeric query plus a songbook id into a
//! deterministically ordered list of [`Song`] records: corpus retrieval and
//! caching live in [`corpus`], the scoring pipeline (normalization,
//! tokenization, edit-distance similarity, weighted field scoring) lives in
//! [`search`]. Presentation, navigation, and storage belong to the embedding
//! application, not here.

pub mod corpus;
pub mod error;
pub mod search;
pub mod song;
pub mod tracing;

pub use corpus::{CorpusProvider, CorpusSource, FileCorpusSource};
pub use error::CorpusError;
pub use search::{LyricCache, ScoringConfig, SearchEngine, rank_songs};
pub use song::{Song, Songbook, Verse};
