//! Song and songbook data types, plus one-shot corpus canonicalization.
//!
//! Corpus JSON is loose about two fields: a verse's lines may arrive as a
//! single string or an array of strings, and `presentation` may be an array
//! of labels or one whitespace-separated string. All of that is coerced into
//! the canonical [`Song`] shape here, at ingestion, so the ranking engine
//! never type-checks anything downstream.

use serde::Deserialize;
use serde_json::Value;

/// One lyric block of a song: a verse or chorus with its display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// Label the presentation order refers to, e.g. "Verse 1" or "Chorus".
    pub label: String,
    /// Lines of text, in display order.
    pub lines: Vec<String>,
}

/// Canonical song record.
///
/// `number` is unique within a songbook and stable across sessions; it is the
/// join key for the lyric caches. Every label in `presentation` names an
/// entry in `verses` (enforced during canonicalization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub number: u32,
    pub title: String,
    pub author: String,
    /// Verses in storage order.
    pub verses: Vec<Verse>,
    /// Display order of verse labels; may repeat a label (e.g. a chorus
    /// reused between verses).
    pub presentation: Vec<String>,
}

impl Song {
    /// All lyric lines across all verses, in storage order.
    pub(crate) fn lyric_lines(&self) -> impl Iterator<Item = &str> {
        self.verses
            .iter()
            .flat_map(|verse| verse.lines.iter().map(String::as_str))
    }
}

/// A songbook: `name` keys into the corpus document, `lyrics_url` locates it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Songbook {
    pub id: String,
    pub name: String,
    pub lyrics_url: String,
}

/// Wire shape of a song before canonicalization.
///
/// Every field defaults when absent: a malformed record degrades to empty
/// fields rather than failing the whole corpus.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSong {
    #[serde(default)]
    song_number: u32,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    /// Verse label to lines; `serde_json`'s preserve_order keeps the
    /// author's verse order intact.
    #[serde(default)]
    lyrics: serde_json::Map<String, Value>,
    #[serde(default)]
    presentation: RawPresentation,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawPresentation {
    Labels(Vec<String>),
    Joined(String),
}

impl Default for RawPresentation {
    fn default() -> Self {
        Self::Labels(Vec::new())
    }
}

impl RawSong {
    /// Coerces the loose wire shape into a canonical [`Song`].
    ///
    /// Presentation labels that name no verse are dropped with a warning so
    /// the canonical invariant holds even for sloppy corpus data.
    pub(crate) fn canonicalize(self) -> Song {
        let verses: Vec<Verse> = self
            .lyrics
            .into_iter()
            .map(|(label, value)| Verse {
                label,
                lines: coerce_lines(value),
            })
            .collect();

        let labels: Vec<String> = match self.presentation {
            RawPresentation::Labels(labels) => labels,
            RawPresentation::Joined(joined) => {
                joined.split_whitespace().map(str::to_string).collect()
            }
        };
        let presentation: Vec<String> = labels
            .into_iter()
            .filter(|label| {
                let known = verses.iter().any(|verse| verse.label == *label);
                if !known {
                    tracing::warn!(
                        "Song {} presentation names unknown verse '{}', dropping it",
                        self.song_number,
                        label
                    );
                }
                known
            })
            .collect();

        Song {
            number: self.song_number,
            title: self.title,
            author: self.author,
            verses,
            presentation,
        }
    }
}

/// Coerces a verse value into display lines: a string becomes one line, an
/// array contributes one line per element.
fn coerce_lines(value: Value) -> Vec<String> {
    match value {
        Value::String(line) => vec![line],
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(line) => line,
                other => other.to_string(),
            })
            .collect(),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}
