//! Config loading from environment variables

use std::path::PathBuf;

use katachi::config::{DictionaryPreset, KatachiConfig, LogLevel};

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_PRESET_DICT};
use crate::errors::ApiError;

/// Bind address
const ENV_BIND_ADDR: &str = "KATACHI_API_BIND_ADDR";
/// Dictionary preset: ipadic | unidic-cwj | unidic-csj
const ENV_PRESET_DICT: &str = "KATACHI_PRESET_DICT";
/// jmdict-simplified JSON file
const ENV_LEXICON_PATH: &str = "KATACHI_LEXICON_PATH";
/// Dictionary cache directory
const ENV_DICT_CACHE_DIR: &str = "KATACHI_DICT_CACHE_DIR";
/// Log level used when RUST_LOG is not set
const ENV_LOG_LEVEL: &str = "KATACHI_LOG_LEVEL";

/// Parses a dictionary preset name (case-insensitive)
pub fn parse_preset(s: &str) -> Result<DictionaryPreset, String> {
  match s.to_lowercase().as_str() {
    "ipadic" => Ok(DictionaryPreset::Ipadic),
    "unidic-cwj" => Ok(DictionaryPreset::UnidicCwj),
    "unidic-csj" => Ok(DictionaryPreset::UnidicCsj),
    _ => Err(format!(
      "Unknown preset: {}. Valid values: ipadic, unidic-cwj, unidic-csj",
      s
    )),
  }
}

/// Parses a log level name (case-insensitive)
pub fn parse_log_level(s: &str) -> Result<LogLevel, String> {
  match s.to_lowercase().as_str() {
    "trace" => Ok(LogLevel::Trace),
    "debug" => Ok(LogLevel::Debug),
    "info" => Ok(LogLevel::Info),
    "warn" => Ok(LogLevel::Warn),
    "error" => Ok(LogLevel::Error),
    _ => Err(format!(
      "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
      s
    )),
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5001")
  pub bind_addr: String,
  /// Dictionary preset to use
  pub preset: DictionaryPreset,
  /// jmdict-simplified JSON file; the lexicon is unavailable without it
  pub lexicon_path: Option<PathBuf>,
  /// Dictionary cache directory; OS default when unset
  pub dict_cache_dir: Option<PathBuf>,
  /// Log level
  pub log_level: LogLevel,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup` (environment variable name -> value)
  ///
  /// # Errors
  /// Returns an error if a preset or log level value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let preset_dict_str = lookup(ENV_PRESET_DICT).unwrap_or_else(|| DEFAULT_PRESET_DICT.to_string());
    let preset = parse_preset(&preset_dict_str).map_err(ApiError::config)?;

    let log_level_str = lookup(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_level = parse_log_level(&log_level_str).map_err(ApiError::config)?;

    let non_empty_path = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

    Ok(Self {
      bind_addr,
      preset,
      lexicon_path: non_empty_path(ENV_LEXICON_PATH),
      dict_cache_dir: non_empty_path(ENV_DICT_CACHE_DIR),
      log_level,
    })
  }

  /// Builds the library configuration
  #[must_use]
  pub fn to_katachi_config(&self) -> KatachiConfig {
    let mut config = KatachiConfig::default();
    config.tokenizer.preset = self.preset;
    config.tokenizer.cache_dir = self.dict_cache_dir.clone();
    config.lexicon.path = self.lexicon_path.clone();
    config.logging.level = self.log_level;
    config
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn preset_from_str_ipadic() {
    assert_eq!(parse_preset("ipadic").unwrap(), DictionaryPreset::Ipadic);
    assert_eq!(parse_preset("IPADIC").unwrap(), DictionaryPreset::Ipadic);
  }

  #[test]
  fn preset_from_str_unidic() {
    assert_eq!(parse_preset("UNIDIC-CWJ").unwrap(), DictionaryPreset::UnidicCwj);
    assert_eq!(parse_preset("unidic-csj").unwrap(), DictionaryPreset::UnidicCsj);
  }

  #[test]
  fn preset_from_str_invalid() {
    assert!(parse_preset("invalid").is_err());
  }

  #[test]
  fn log_level_from_str() {
    assert_eq!(parse_log_level("DEBUG").unwrap(), LogLevel::Debug);
    assert!(parse_log_level("verbose").is_err());
  }

  #[test]
  fn config_defaults_without_variables() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.preset, DictionaryPreset::UnidicCwj);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.lexicon_path.is_none());
    assert!(config.dict_cache_dir.is_none());
  }

  #[test]
  fn config_reads_variables() {
    let config = Config::from_lookup(lookup_from(&[
      (ENV_BIND_ADDR, "0.0.0.0:8080"),
      (ENV_PRESET_DICT, "ipadic"),
      (ENV_LEXICON_PATH, "/data/jmdict-eng.json"),
      (ENV_DICT_CACHE_DIR, ""),
      (ENV_LOG_LEVEL, "warn"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.preset, DictionaryPreset::Ipadic);
    assert_eq!(config.lexicon_path, Some(PathBuf::from("/data/jmdict-eng.json")));
    assert!(config.dict_cache_dir.is_none(), "空文字列は未設定として扱う");

    let katachi_config = config.to_katachi_config();
    assert_eq!(katachi_config.tokenizer.preset, DictionaryPreset::Ipadic);
    assert_eq!(katachi_config.lexicon_path(), Some(std::path::Path::new("/data/jmdict-eng.json")));
    assert_eq!(katachi_config.log_level(), LogLevel::Warn);
  }

  #[test]
  fn config_invalid_preset_is_config_error() {
    let err = Config::from_lookup(lookup_from(&[(ENV_PRESET_DICT, "mecab")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }
}
