// crates/katachi/src/service.rs

//! KatachiService: katachi クレートの統合ファサード。
//!
//! - 形態素解析 (MorphemeTokenizer)
//! - 語彙辞書 (Lexicon)
//! - 解析結果の統合 (ResultUnifier)
//!
//! アダプターは起動時に一度だけ構築され、以降は読み取り専用で共有される。
//! 構築に失敗したアダプターは `AdapterState::Unavailable` となり、
//! 解析は縮退した結果を返す。

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::analysis::morphology::WordMorphology;
use crate::analysis::unifier::{LexiconResult, ResultUnifier, UnifyInput};
use crate::config::{AnalysisConfig, KatachiConfig};
use crate::dictionary::DictionaryManager;
use crate::errors::error_definition::{KatachiError, KatachiResult};
use crate::lexicon::{Lexicon, LexiconManager, LookupOutcome};
use crate::models::UnifiedAnalysisRecord;
use crate::tokenizer::{MorphemeTokenizer, VibratoMorphemeTokenizer};

/// 外部アダプターの状態
#[derive(Debug, Clone)]
pub enum AdapterState<T> {
  /// 利用可能
  Available(T),
  /// 利用不可（初期化失敗・未設定）
  Unavailable {
    /// 理由
    reason: String,
  },
}

impl<T> AdapterState<T> {
  /// 利用可能なら中身を返す
  pub fn get(&self) -> Option<&T> {
    match self {
      AdapterState::Available(adapter) => Some(adapter),
      AdapterState::Unavailable { .. } => None,
    }
  }

  /// 利用可能かどうか
  pub fn is_available(&self) -> bool {
    matches!(self, AdapterState::Available(_))
  }

  /// 利用不可の理由
  pub fn unavailable_reason(&self) -> Option<&str> {
    match self {
      AdapterState::Available(_) => None,
      AdapterState::Unavailable { reason } => Some(reason),
    }
  }

  /// 初期化結果から状態を作る（失敗は警告ログを出して Unavailable にする）
  pub fn from_result<E: std::fmt::Display>(adapter: &str, result: Result<T, E>) -> Self {
    match result {
      Ok(value) => {
        info!(adapter, "Adapter available");
        AdapterState::Available(value)
      }
      Err(e) => {
        warn!(adapter, error = %e, "Adapter unavailable, analysis will degrade");
        AdapterState::Unavailable {
          reason: e.to_string(),
        }
      }
    }
  }
}

/// 共有トークナイザー
pub type SharedTokenizer = Arc<dyn MorphemeTokenizer>;

/// 共有語彙辞書
pub type SharedLexicon = Arc<dyn Lexicon>;

/// katachi クレートの統合ファサード。
pub struct KatachiService {
  tokenizer: AdapterState<SharedTokenizer>,
  lexicon: AdapterState<SharedLexicon>,
  unifier: ResultUnifier,
}

impl KatachiService {
  /// 初期化（設定検証 + 辞書ロード + 語彙辞書ロード）
  ///
  /// # エラー
  /// - 設定が不正な場合のみ。辞書・語彙辞書のロード失敗は Unavailable として扱う。
  pub fn init(config: &KatachiConfig) -> KatachiResult<Self> {
    config.validate()?;

    let tokenizer = AdapterState::from_result(
      "tokenizer",
      DictionaryManager::from_config(config).and_then(|manager| manager.load()).map(|dict| {
        Arc::new(VibratoMorphemeTokenizer::from_shared_dictionary(dict)) as SharedTokenizer
      }),
    );

    let lexicon = AdapterState::from_result(
      "lexicon",
      LexiconManager::from_optional_path(config.lexicon_path())
        .and_then(|manager| manager.load())
        .map(|lexicon| lexicon as SharedLexicon),
    );

    Ok(Self::with_adapters(tokenizer, lexicon, config.analysis.clone()))
  }

  /// 構築済みのアダプターから作る（テスト・独自アダプター用）
  pub fn with_adapters(
    tokenizer: AdapterState<SharedTokenizer>,
    lexicon: AdapterState<SharedLexicon>,
    analysis: AnalysisConfig,
  ) -> Self {
    Self {
      tokenizer,
      lexicon,
      unifier: ResultUnifier::new(analysis),
    }
  }

  /// 単語を解析する。
  ///
  /// 前後の空白は除去される。
  ///
  /// # エラー
  /// - 空文字列・空白のみの場合 `KatachiError::InvalidWord`
  pub fn analyze_word(&self, word: &str) -> KatachiResult<UnifiedAnalysisRecord> {
    let word = word.trim();
    if word.is_empty() {
      return Err(KatachiError::InvalidWord {
        reason: "空の単語は解析できません".to_string(),
      });
    }

    let morphemes = self.tokenizer.get().map(|t| t.tokenize(word)).unwrap_or_default();
    let head_form = morphemes.first().map(|m| m.dictionary_form.as_str());

    let lexicon = self.lookup_lexicon(word, head_form);
    let lexicon_reading = match &lexicon {
      LexiconResult::Found { headword, entries } if head_form == Some(headword.as_str()) => {
        entries.first().and_then(|entry| entry.readings.first()).map(String::as_str)
      }
      _ => None,
    };

    let morphology = WordMorphology::analyze(word, &morphemes, lexicon_reading);

    debug!(
      word = %word,
      morphemes = morphemes.len(),
      dictionary_form = ?head_form,
      tokenizer_unavailable = ?self.tokenizer.unavailable_reason(),
      lexicon_unavailable = ?self.lexicon.unavailable_reason(),
      "Word analysis"
    );

    Ok(self.unifier.unify(UnifyInput {
      word,
      morphology: morphology.as_ref(),
      tokenizer_available: self.tokenizer.is_available(),
      lexicon: &lexicon,
    }))
  }

  /// 辞書形を優先し、見つからなければ入力そのもので引く
  fn lookup_lexicon(&self, word: &str, dictionary_form: Option<&str>) -> LexiconResult {
    let Some(lexicon) = self.lexicon.get() else {
      return LexiconResult::Unavailable;
    };

    let mut candidates = Vec::with_capacity(2);
    candidates.extend(dictionary_form.filter(|form| !form.is_empty()));
    if !candidates.contains(&word) {
      candidates.push(word);
    }

    for headword in candidates {
      match lexicon.lookup(headword) {
        LookupOutcome::Found(entries) => {
          return LexiconResult::Found {
            headword: headword.to_string(),
            entries,
          };
        }
        LookupOutcome::NotFound => continue,
        LookupOutcome::Unavailable { reason } => {
          warn!(headword = %headword, reason = %reason, "Lexicon lookup failed");
          return LexiconResult::Unavailable;
        }
      }
    }

    LexiconResult::NotFound
  }

  // ===== アクセサ =====

  /// トークナイザーの状態
  pub fn tokenizer(&self) -> &AdapterState<SharedTokenizer> {
    &self.tokenizer
  }

  /// 語彙辞書の状態
  pub fn lexicon(&self) -> &AdapterState<SharedLexicon> {
    &self.lexicon
  }

  /// 出力設定
  pub fn analysis_config(&self) -> &AnalysisConfig {
    self.unifier.settings()
  }
}

impl std::fmt::Debug for KatachiService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("KatachiService")
      .field("tokenizer", &self.tokenizer.unavailable_reason().unwrap_or("available"))
      .field("lexicon", &self.lexicon.unavailable_reason().unwrap_or("available"))
      .field("analysis", self.unifier.settings())
      .finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────
