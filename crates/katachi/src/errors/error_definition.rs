//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// 設定（KatachiConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// analysis.translation_gloss_limit < 1
  #[error("analysis.translation_gloss_limit は 1 以上である必要があります: actual={actual}")]
  InvalidTranslationGlossLimit {
    /// 実際に指定された値
    actual: usize,
  },

  /// analysis.meaning_sense_limit < 1
  #[error("analysis.meaning_sense_limit は 1 以上である必要があります: actual={actual}")]
  InvalidMeaningSenseLimit {
    /// 実際に指定された値
    actual: usize,
  },

  /// analysis.default_level が空文字列
  #[error("analysis.default_level を空にすることはできません")]
  EmptyDefaultLevel,

  /// tokenizer.dictionary_path がファイルとして存在しない
  #[error("tokenizer.dictionary_path が見つかりません: path={path:?}")]
  DictionaryPathNotFound {
    /// 指定されたパス
    path: PathBuf,
  },

  /// tokenizer.cache_dir がディレクトリではない（ファイルである等）
  #[error("tokenizer.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// tokenizer.cache_dir の作成に失敗
  #[error("tokenizer.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// lexicon.path がファイルとして存在しない
  #[error("lexicon.path が見つかりません: path={path:?}")]
  LexiconPathNotFound {
    /// 指定されたパス
    path: PathBuf,
  },
}

/// トークナイザー用システム辞書（vibrato-rkyv）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(PathBuf),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: preset={preset:?}, error={source}")]
  PresetDictDownloadFailed {
    /// 対象のプリセット
    preset: PresetDictionaryKind,
    /// 元となったエラー
    #[source]
    source: Arc<dyn std::error::Error + Send + Sync + 'static>,
  },
}

/// 語彙辞書（JMdict 等）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexiconError {
  /// 辞書ファイルが見つからない
  #[error("語彙辞書ファイルが見つかりません: {0}")]
  FileNotFound(PathBuf),

  /// 辞書ファイルの読み込み失敗
  #[error("語彙辞書ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  Read {
    /// 対象ファイル
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// JSON のデシリアライズ失敗
  #[error("語彙辞書の JSON 解析に失敗しました: path={path:?}, error={source}")]
  Parse {
    /// 対象ファイル
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// 語彙辞書のパスが設定されていない
  #[error("語彙辞書のパスが設定されていません")]
  NotConfigured,
}

/// トークナイザー関連エラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TokenizerError {
  /// 辞書起因のエラー
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `KatachiResult<T>` = `Result<T, KatachiError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum KatachiError {
  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// トークナイザー関連エラー
  #[error(transparent)]
  Tokenizer(#[from] TokenizerError),

  /// 語彙辞書関連エラー
  #[error(transparent)]
  Lexicon(#[from] LexiconError),

  /// 解析対象の単語が不正（空文字列・空白のみ）
  #[error("解析対象の単語が不正です: {reason}")]
  InvalidWord {
    /// 不正の理由
    reason: String,
  },

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// katachi クレートの標準 Result 型エイリアス
pub type KatachiResult<T> = Result<T, KatachiError>;
