//! Dictionary Management Module
//!
//! Manages loading of the vibrato-rkyv system dictionary used by the tokenizer.
//! Preset dictionaries (IPADIC, UniDic) are downloaded on the first run and
//! loaded from the cache directory afterwards. A local compiled dictionary
//! can be loaded directly instead.

use crate::config::KatachiConfig;
use crate::errors::error_definition::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Where the dictionary comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
  /// Preset dictionary downloaded into `cache_dir`
  Preset {
    /// `Ipadic`, `UnidicCwj`, `UnidicCsj`
    kind: PresetDictionaryKind,
    /// Dictionary cache directory
    cache_dir: PathBuf,
  },
  /// Compiled dictionary file on disk
  Local {
    /// Dictionary file path
    path: PathBuf,
  },
}

/// Dictionary manager structure for vibrato-rkyv
pub struct DictionaryManager {
  source: DictionarySource,

  /// Cache of loaded dictionary (Initialized only once at the first load)
  /// DictionaryError implements Clone so it can hold Result
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Preset dictionary in the OS default cache directory
  pub fn with_preset(kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    Ok(Self::with_preset_in(kind, default_cache_dir()?))
  }

  /// Preset dictionary in the given cache directory
  pub fn with_preset_in(kind: PresetDictionaryKind, cache_dir: impl Into<PathBuf>) -> Self {
    Self::new(DictionarySource::Preset {
      kind,
      cache_dir: cache_dir.into(),
    })
  }

  /// Local dictionary file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      return Err(DictionaryError::DictionaryNotFound(path));
    }

    Ok(Self::new(DictionarySource::Local { path }))
  }

  /// Builds the manager described by `[tokenizer]`.
  ///
  /// `dictionary_path` takes precedence over the preset.
  pub fn from_config(config: &KatachiConfig) -> Result<Self, DictionaryError> {
    match (config.dictionary_path(), config.dictionary_cache_dir()) {
      (Some(path), _) => Self::from_local_path(path),
      (None, Some(cache_dir)) => Ok(Self::with_preset_in(config.dictionary_preset(), cache_dir)),
      (None, None) => Self::with_preset(config.dictionary_preset()),
    }
  }

  fn new(source: DictionarySource) -> Self {
    Self {
      source,
      dictionary: OnceLock::new(),
    }
  }

  /// Dictionary source
  pub fn source(&self) -> &DictionarySource {
    &self.source
  }

  /// Load dictionary
  /// - Loads the dictionary on the first call
  /// - Returns a clone of `Arc<Dictionary>` from the second call onwards
  /// - If an error occurs on the first call, caches the error and keeps returning it
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    let dictionary = match &self.source {
      DictionarySource::Local { path } => Self::load_from_local_path(path)?,
      DictionarySource::Preset { kind, cache_dir } => Self::load_from_preset(*kind, cache_dir)?,
    };

    info!(source = ?self.source, "System dictionary loaded");
    Ok(dictionary)
  }

  fn load_from_local_path(path: &Path) -> Result<Dictionary, DictionaryError> {
    Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
  }

  /// Downloads the preset on the first run, loads it from `cache_dir` afterwards
  fn load_from_preset(
    kind: PresetDictionaryKind,
    cache_dir: &Path,
  ) -> Result<Dictionary, DictionaryError> {
    std::fs::create_dir_all(cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    // Create a subdirectory based on the dictionary name
    let dict_dir = cache_dir.join(kind.name());

    Dictionary::from_preset_with_download(kind, &dict_dir).map_err(|e| {
      DictionaryError::PresetDictDownloadFailed {
        preset: kind,
        source: Arc::new(e),
      }
    })
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                 |
/// |---------|----------------------------------------------|
/// | Linux   | `~/.cache/katachi/dict`                      |
/// | macOS   | `~/Library/Caches/katachi/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\katachi\dict` |
pub fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("katachi").join("dict"))
}

/// `vibrato_rkyv::Dictionary` does not implement `Debug`; only meta information is shown.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("source", &self.source)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{DictionaryPreset, TokenizerConfig};
  use tempfile::TempDir;

  #[test]
  fn missing_local_dictionary_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system.dic");

    let err = DictionaryManager::from_local_path(&path).unwrap_err();
    assert!(matches!(err, DictionaryError::DictionaryNotFound(p) if p == path));
  }

  #[test]
  fn config_cache_dir_is_used_for_presets() {
    let temp_dir = TempDir::new().unwrap();
    let config = KatachiConfig {
      tokenizer: TokenizerConfig {
        preset: DictionaryPreset::Ipadic,
        cache_dir: Some(temp_dir.path().to_path_buf()),
        dictionary_path: None,
      },
      ..KatachiConfig::default()
    };

    let manager = DictionaryManager::from_config(&config).unwrap();
    assert_eq!(
      manager.source(),
      &DictionarySource::Preset {
        kind: PresetDictionaryKind::Ipadic,
        cache_dir: temp_dir.path().to_path_buf(),
      }
    );
  }

  #[test]
  fn broken_local_dictionary_error_is_cached() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.dic");
    std::fs::write(&path, b"not a dictionary").unwrap();

    let manager = DictionaryManager::from_local_path(&path).unwrap();
    assert!(manager.load().is_err());
    assert!(manager.load().is_err());
    assert!(format!("{manager:?}").contains("dictionary_initialized: true"));
  }
}
