//! Shared test fixtures for integration tests.
//!
//! Each test gets an isolated corpus: a fresh temp directory holding the
//! corpus JSON, a songbook registry pointing at it, and a `SearchEngine`
//! with cold caches. Dropping the fixture removes the directory.

use hymnal_search::{CorpusProvider, FileCorpusSource, SearchEngine, Songbook};
use rstest::fixture;
use std::path::PathBuf;
use tempfile::TempDir;

pub const BOOK_ID: &str = "shl";
pub const BOOK_NAME: &str = "Songs & Hymns Of Life";

/// Corpus used across the integration tests. Song 530 deliberately uses the
/// loose wire shapes (string lyrics, joined presentation) and song 99 is a
/// malformed record with nothing but a number.
const CORPUS: &str = r#"{
    "Songs & Hymns Of Life": [
        {
            "songNumber": 53,
            "title": "Follow On!",
            "author": "W. O. Cushing",
            "lyrics": {
                "Verse 1": ["Down in the valley with my Savior I would go"],
                "Chorus": ["Follow! Follow! I would follow Jesus"]
            },
            "presentation": ["Verse 1", "Chorus"]
        },
        {
            "songNumber": 54,
            "title": "Trust and Obey",
            "author": "J. H. Sammis",
            "lyrics": {
                "Verse 1": ["When we walk with the Lord", "we will follow where He leads"]
            },
            "presentation": ["Verse 1"]
        },
        {
            "songNumber": 530,
            "title": "Praise God From Whom All Blessings Flow",
            "author": "Thomas Ken",
            "lyrics": { "Verse 1": "Praise Him all creatures here below" },
            "presentation": "Verse 1"
        },
        {
            "songNumber": 531,
            "title": "Amazing Grace",
            "author": "John Newton",
            "lyrics": {
                "Verse 1": ["Amazing grace how sweet the sound", "that saved a wretch like me"]
            },
            "presentation": ["Verse 1"]
        },
        {
            "songNumber": 537,
            "title": "Agnus Déi",
            "author": "Michael W. Smith",
            "lyrics": { "Verse 1": ["Alleluia, for the Lord God Almighty reigns"] },
            "presentation": ["Verse 1"]
        },
        { "songNumber": 99 }
    ]
}"#;

#[allow(dead_code)] // Fields used across different integration test crates
pub struct TestHymnal {
    _dir: TempDir,
    pub corpus_path: PathBuf,
    pub engine: SearchEngine<FileCorpusSource>,
}

/// Builds an engine over a freshly written corpus file, plus one registered
/// songbook whose corpus file does not exist ("broken").
#[fixture]
pub fn hymnal() -> TestHymnal {
    hymnal_search::tracing::init();

    let dir = TempDir::new().expect("create temp dir");
    let corpus_path = dir.path().join("songs_and_hymns_of_life.json");
    std::fs::write(&corpus_path, CORPUS).expect("write corpus");

    let books = vec![
        Songbook {
            id: BOOK_ID.to_string(),
            name: BOOK_NAME.to_string(),
            lyrics_url: corpus_path.to_string_lossy().into_owned(),
        },
        Songbook {
            id: "broken".to_string(),
            name: "Broken Book".to_string(),
            lyrics_url: dir.path().join("missing.json").to_string_lossy().into_owned(),
        },
    ];

    let provider = CorpusProvider::new(FileCorpusSource, books);
    TestHymnal {
        corpus_path,
        engine: SearchEngine::new(provider),
        _dir: dir,
    }
}

/// Song numbers of a ranked result list, for order assertions.
pub fn numbers(songs: &[hymnal_search::Song]) -> Vec<u32> {
    songs.iter().map(|song| song.number).collect()
}
