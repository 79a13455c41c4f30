//! JMdict lexicon
//!
//! Loads the [jmdict-simplified] JSON distribution and indexes every entry
//! under each of its kanji and kana spellings.
//!
//! [jmdict-simplified]: https://github.com/scriptin/jmdict-simplified

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::LexiconError;
use crate::models::{LexiconEntry, Sense};

/// Result of a lexicon lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
  /// Entries in lexicon order (never empty)
  Found(Vec<LexiconEntry>),
  /// No entry for the headword
  NotFound,
  /// The lexicon could not be consulted
  Unavailable {
    /// Human-readable cause
    reason: String,
  },
}

/// Headword → entries lookup.
///
/// Implementations are shared between request threads.
pub trait Lexicon: Send + Sync {
  /// Looks up entries whose kanji or kana spelling equals `headword`
  fn lookup(&self, headword: &str) -> LookupOutcome;
}

// ─── jmdict-simplified JSON ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct JmdictFile {
  words: Vec<JmdictWord>,
}

#[derive(Debug, Deserialize)]
struct JmdictWord {
  #[serde(default)]
  kanji: Vec<JmdictText>,
  #[serde(default)]
  kana: Vec<JmdictText>,
  #[serde(default)]
  sense: Vec<JmdictSense>,
}

#[derive(Debug, Deserialize)]
struct JmdictText {
  text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JmdictSense {
  #[serde(default)]
  part_of_speech: Vec<String>,
  #[serde(default)]
  gloss: Vec<JmdictGloss>,
}

#[derive(Debug, Deserialize)]
struct JmdictGloss {
  text: String,
}

impl From<JmdictWord> for LexiconEntry {
  fn from(word: JmdictWord) -> Self {
    let readings: Vec<String> = word.kana.into_iter().map(|k| k.text).collect();
    let headword_kanji = word
      .kanji
      .into_iter()
      .next()
      .map(|k| k.text)
      .or_else(|| readings.first().cloned())
      .unwrap_or_default();

    let senses = word
      .sense
      .into_iter()
      .map(|sense| Sense {
        pos_label: sense.part_of_speech.join(", "),
        glosses: sense.gloss.into_iter().map(|g| g.text).collect(),
      })
      .collect();

    LexiconEntry {
      headword_kanji,
      readings,
      senses,
    }
  }
}

/// In-memory JMdict index.
#[derive(Debug, Default)]
pub struct JmdictLexicon {
  entries: Vec<LexiconEntry>,

  /// spelling → positions in `entries`, in file order
  index: HashMap<String, Vec<usize>>,
}

impl JmdictLexicon {
  /// Loads a jmdict-simplified JSON file.
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
    let path = path.as_ref();

    if !path.is_file() {
      return Err(LexiconError::FileNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|e| LexiconError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let file: JmdictFile = serde_json::from_slice(&bytes).map_err(|e| LexiconError::Parse {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let lexicon = Self::build(file.words.into_iter().map(|word| {
      let spellings: Vec<String> =
        word.kanji.iter().chain(word.kana.iter()).map(|t| t.text.clone()).collect();
      (spellings, LexiconEntry::from(word))
    }));

    info!(path = ?path, entries = lexicon.len(), "Lexicon loaded");
    Ok(lexicon)
  }

  /// Builds a lexicon from entries, indexed by `headword_kanji` and readings.
  pub fn from_entries(entries: impl IntoIterator<Item = LexiconEntry>) -> Self {
    Self::build(entries.into_iter().map(|entry| {
      let spellings: Vec<String> =
        std::iter::once(&entry.headword_kanji).chain(&entry.readings).cloned().collect();
      (spellings, entry)
    }))
  }

  fn build(items: impl Iterator<Item = (Vec<String>, LexiconEntry)>) -> Self {
    let mut lexicon = Self::default();

    for (spellings, entry) in items {
      let position = lexicon.entries.len();
      lexicon.entries.push(entry);

      for spelling in spellings {
        let positions = lexicon.index.entry(spelling).or_default();
        if positions.last() != Some(&position) {
          positions.push(position);
        }
      }
    }

    lexicon
  }

  /// Number of entries.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when the lexicon has no entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Lexicon for JmdictLexicon {
  fn lookup(&self, headword: &str) -> LookupOutcome {
    let entries: Vec<LexiconEntry> = self
      .index
      .get(headword)
      .map(|positions| positions.iter().map(|&i| self.entries[i].clone()).collect())
      .unwrap_or_default();

    debug!(headword = %headword, hits = entries.len(), "Lexicon lookup");

    if entries.is_empty() { LookupOutcome::NotFound } else { LookupOutcome::Found(entries) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  const SAMPLE: &str = r#"{
    "version": "3.6.1",
    "languages": ["eng"],
    "words": [
      {
        "id": "1",
        "kanji": [{ "common": true, "text": "書く", "tags": [] }],
        "kana": [{ "common": true, "text": "かく", "tags": [], "appliesToKanji": ["*"] }],
        "sense": [
          {
            "partOfSpeech": ["v5k", "vt"],
            "gloss": [{ "lang": "eng", "text": "to write" }, { "lang": "eng", "text": "to compose" }]
          },
          { "partOfSpeech": ["v5k"], "gloss": [{ "lang": "eng", "text": "to draw" }] }
        ]
      },
      {
        "id": "2",
        "kanji": [{ "text": "掻く" }],
        "kana": [{ "text": "かく" }],
        "sense": [{ "partOfSpeech": ["v5k"], "gloss": [{ "text": "to scratch" }] }]
      },
      {
        "id": "3",
        "kana": [{ "text": "ほげ" }],
        "sense": []
      }
    ]
  }"#;

  fn write_sample(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("jmdict-eng.json");
    fs::write(&path, SAMPLE).unwrap();
    path
  }

  #[test]
  fn loads_and_indexes_every_spelling() {
    let dir = TempDir::new().unwrap();
    let lexicon = JmdictLexicon::from_path(write_sample(&dir)).unwrap();

    assert_eq!(lexicon.len(), 3);

    let LookupOutcome::Found(entries) = lexicon.lookup("書く") else {
      panic!("expected entries for 書く");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].readings, vec!["かく"]);
    assert_eq!(entries[0].senses[0].pos_label, "v5k, vt");
    assert_eq!(entries[0].senses[0].glosses, vec!["to write", "to compose"]);
  }

  #[test]
  fn kana_lookup_keeps_file_order() {
    let dir = TempDir::new().unwrap();
    let lexicon = JmdictLexicon::from_path(write_sample(&dir)).unwrap();

    let LookupOutcome::Found(entries) = lexicon.lookup("かく") else {
      panic!("expected entries for かく");
    };
    let headwords: Vec<&str> = entries.iter().map(|e| e.headword_kanji.as_str()).collect();
    assert_eq!(headwords, vec!["書く", "掻く"]);
  }

  #[test]
  fn kana_only_entry_uses_reading_as_headword() {
    let dir = TempDir::new().unwrap();
    let lexicon = JmdictLexicon::from_path(write_sample(&dir)).unwrap();

    let LookupOutcome::Found(entries) = lexicon.lookup("ほげ") else {
      panic!("expected entries for ほげ");
    };
    assert_eq!(entries[0].headword_kanji, "ほげ");
    assert!(entries[0].senses.is_empty());
  }

  #[test]
  fn unknown_headword_is_not_found() {
    let lexicon = JmdictLexicon::from_entries(Vec::new());
    assert_eq!(lexicon.lookup("書く"), LookupOutcome::NotFound);
    assert!(lexicon.is_empty());
  }

  #[test]
  fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = JmdictLexicon::from_path(dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, LexiconError::FileNotFound(_)));
  }

  #[test]
  fn malformed_json_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JmdictLexicon::from_path(&path).unwrap_err();
    assert!(matches!(err, LexiconError::Parse { .. }));
  }

  #[test]
  fn from_entries_indexes_headword_and_readings() {
    let lexicon = JmdictLexicon::from_entries([LexiconEntry {
      headword_kanji: "見る".to_string(),
      readings: vec!["みる".to_string()],
      senses: Vec::new(),
    }]);

    assert!(matches!(lexicon.lookup("見る"), LookupOutcome::Found(_)));
    assert!(matches!(lexicon.lookup("みる"), LookupOutcome::Found(_)));
  }
}
