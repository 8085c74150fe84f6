//! Song search pipeline: normalization, tokenization, similarity scoring,
//! weighted field scoring, and the ranking engine that ties them together.
//!
//! Everything here is synchronous and self-contained; a query over a few
//! hundred songs runs comfortably within one keystroke's debounce window.

// Module declarations
pub(crate) mod cache;
pub(crate) mod engine;
pub(crate) mod scoring;
pub(crate) mod similarity;
pub(crate) mod text;

// Public re-exports (used via lib.rs)
pub use cache::LyricCache;
pub use engine::{SearchEngine, rank_songs};
pub use scoring::ScoringConfig;

// Internal re-exports
pub(crate) use similarity::similarity;
pub(crate) use text::{normalize, tokenize};
