//! Lexicon Management Module
//!
//! Loads the JMdict lexicon once and shares it afterwards.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::errors::LexiconError;
use crate::lexicon::jmdict_lexicon::JmdictLexicon;

/// Loads and caches a [`JmdictLexicon`].
pub struct LexiconManager {
  path: PathBuf,

  /// Initialized only once at the first load; errors are cached too
  lexicon: OnceLock<Result<Arc<JmdictLexicon>, LexiconError>>,
}

impl LexiconManager {
  /// Manager for the lexicon file at `path`
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      return Err(LexiconError::FileNotFound(path));
    }

    Ok(Self {
      path,
      lexicon: OnceLock::new(),
    })
  }

  /// Manager for an optional path; `None` is [`LexiconError::NotConfigured`]
  pub fn from_optional_path(path: Option<&Path>) -> Result<Self, LexiconError> {
    path.ok_or(LexiconError::NotConfigured).and_then(Self::from_path)
  }

  /// Lexicon file path
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Load lexicon
  /// - Parses the file on the first call
  /// - Returns a clone of `Arc<JmdictLexicon>` from the second call onwards
  pub fn load(&self) -> Result<Arc<JmdictLexicon>, LexiconError> {
    self.lexicon.get_or_init(|| JmdictLexicon::from_path(&self.path).map(Arc::new)).clone()
  }
}

impl fmt::Debug for LexiconManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LexiconManager")
      .field("path", &self.path)
      .field("lexicon_initialized", &self.lexicon.get().is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon::{Lexicon, LookupOutcome};
  use tempfile::TempDir;

  #[test]
  fn unconfigured_path_is_reported() {
    let err = LexiconManager::from_optional_path(None).unwrap_err();
    assert!(matches!(err, LexiconError::NotConfigured));
  }

  #[test]
  fn load_is_shared() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jmdict.json");
    std::fs::write(
      &path,
      r#"{"words":[{"kanji":[{"text":"見る"}],"kana":[{"text":"みる"}],"sense":[{"partOfSpeech":["v1"],"gloss":[{"text":"to see"}]}]}]}"#,
    )
    .unwrap();

    let manager = LexiconManager::from_optional_path(Some(path.as_path())).unwrap();
    let first = manager.load().unwrap();
    let second = manager.load().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(matches!(first.lookup("みる"), LookupOutcome::Found(_)));
  }
}
