// crates/katachi/src/config.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// Default number of glosses in the translation.
pub const DEFAULT_TRANSLATION_GLOSS_LIMIT: usize = 3;

/// Default number of senses in the vocabulary meaning.
pub const DEFAULT_MEANING_SENSE_LIMIT: usize = 2;

/// Default JLPT level label.
pub const DEFAULT_LEVEL: &str = "N2";

/// Top-level configuration for katachi.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KatachiConfig {
  /// [tokenizer] section
  #[serde(default)]
  pub tokenizer: TokenizerConfig,
  /// [lexicon] section
  #[serde(default)]
  pub lexicon: LexiconConfig,
  /// [analysis] section
  #[serde(default)]
  pub analysis: AnalysisConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [tokenizer] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenizerConfig {
  /// Preset dictionary type: "ipadic" | "unidic-cwj" | "unidic-csj"
  #[serde(default)]
  pub preset: DictionaryPreset,
  /// Dictionary cache directory.
  ///
  /// `None` lets `DictionaryManager` pick the OS cache directory.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
  /// Local compiled dictionary. Takes precedence over `preset`.
  #[serde(default)]
  pub dictionary_path: Option<PathBuf>,
}

/// Preset dictionary type.
///
/// Mirror of vibrato-rkyv's `PresetDictionaryKind`, which does not implement
/// `Deserialize`. Converted with `.into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest
  Ipadic,
  /// Unidic for written language
  #[default]
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

/// [lexicon] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
  /// jmdict-simplified JSON file. Without it the lexicon is unavailable.
  #[serde(default)]
  pub path: Option<PathBuf>,
}

/// [analysis] section configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisConfig {
  /// Glosses of the first sense joined into the translation
  #[serde(default = "default_translation_gloss_limit")]
  pub translation_gloss_limit: usize,
  /// Senses joined into the vocabulary meaning
  #[serde(default = "default_meaning_sense_limit")]
  pub meaning_sense_limit: usize,
  /// JLPT level label attached to the output
  #[serde(default = "default_level")]
  pub default_level: String,
}

fn default_translation_gloss_limit() -> usize {
  DEFAULT_TRANSLATION_GLOSS_LIMIT
}

fn default_meaning_sense_limit() -> usize {
  DEFAULT_MEANING_SENSE_LIMIT
}

fn default_level() -> String {
  DEFAULT_LEVEL.to_string()
}

impl Default for AnalysisConfig {
  fn default() -> Self {
    Self {
      translation_gloss_limit: DEFAULT_TRANSLATION_GLOSS_LIMIT,
      meaning_sense_limit: DEFAULT_MEANING_SENSE_LIMIT,
      default_level: default_level(),
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string for `tracing_subscriber::EnvFilter`.
  pub fn as_directive(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

// ===== Accessor Methods =====

impl KatachiConfig {
  /// Returns the preset dictionary type to pass to DictionaryManager.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.tokenizer.preset.into()
  }

  /// Returns the configured dictionary cache directory.
  ///
  /// `None` if unspecified.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.tokenizer.cache_dir.as_deref()
  }

  /// Returns the local dictionary file, if configured.
  pub fn dictionary_path(&self) -> Option<&Path> {
    self.tokenizer.dictionary_path.as_deref()
  }

  /// Returns the lexicon file, if configured.
  pub fn lexicon_path(&self) -> Option<&Path> {
    self.lexicon.path.as_deref()
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `analysis.translation_gloss_limit` >= 1
  /// - `analysis.meaning_sense_limit` >= 1
  /// - `analysis.default_level` is not blank
  /// - `tokenizer.dictionary_path` is an existing file
  /// - `tokenizer.cache_dir` exists or can be created
  /// - `lexicon.path` is an existing file
  ///
  /// # Errors
  /// Returns the first failing item as a `ConfigError`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.analysis.translation_gloss_limit < 1 {
      return Err(ConfigError::InvalidTranslationGlossLimit {
        actual: self.analysis.translation_gloss_limit,
      });
    }

    if self.analysis.meaning_sense_limit < 1 {
      return Err(ConfigError::InvalidMeaningSenseLimit {
        actual: self.analysis.meaning_sense_limit,
      });
    }

    if self.analysis.default_level.trim().is_empty() {
      return Err(ConfigError::EmptyDefaultLevel);
    }

    if let Some(path) = &self.tokenizer.dictionary_path {
      if !path.is_file() {
        return Err(ConfigError::DictionaryPathNotFound { path: path.clone() });
      }
    }

    // tokenizer.cache_dir exists or can be created
    if let Some(cache_dir) = &self.tokenizer.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    if let Some(path) = &self.lexicon.path {
      if !path.is_file() {
        return Err(ConfigError::LexiconPathNotFound { path: path.clone() });
      }
    }

    Ok(())
  }
}

// DictionaryPreset (configuration) -> PresetDictionaryKind (vibrato-rkyv)
impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
