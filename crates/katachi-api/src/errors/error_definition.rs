//! APIエラー定義
//!
//! 単語解析 API が返すエラーと、そのレスポンス形式
//! `{"error": {"code", "message"}}` を定義する。

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use katachi::errors::KatachiError;

/// エラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 単語が空・空白のみ
  InvalidWord,
  /// 単語が長すぎる
  WordTooLong,
  /// 辞書・形態素解析器が使えない
  AnalyzerUnavailable,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// (エラーコード, HTTPステータス)
  const fn parts(self) -> (&'static str, StatusCode) {
    match self {
      Self::InvalidWord => ("invalid_input", StatusCode::BAD_REQUEST),
      Self::WordTooLong => ("word_too_long", StatusCode::BAD_REQUEST),
      Self::AnalyzerUnavailable => ("analyzer_unavailable", StatusCode::SERVICE_UNAVAILABLE),
      Self::Internal => ("internal_error", StatusCode::INTERNAL_SERVER_ERROR),
      Self::Config => ("config_error", StatusCode::INTERNAL_SERVER_ERROR),
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(self) -> &'static str {
    self.parts().0
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(self) -> StatusCode {
    self.parts().1
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 単語が空・空白のみ
  #[error("単語が不正です: {reason}")]
  InvalidWord {
    /// 理由
    reason: String,
  },

  /// 単語が長すぎる（文字数で数える）
  #[error("単語が長すぎます: {length} 文字（最大: {max} 文字）")]
  WordTooLong {
    /// 入力の文字数
    length: usize,
    /// 許容される最大文字数
    max: usize,
  },

  /// 辞書・形態素解析器の障害
  #[error("解析器が利用できません: {reason}")]
  AnalyzerUnavailable {
    /// 理由
    reason: String,
  },

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidWord { .. } => ApiErrorKind::InvalidWord,
      Self::WordTooLong { .. } => ApiErrorKind::WordTooLong,
      Self::AnalyzerUnavailable { .. } => ApiErrorKind::AnalyzerUnavailable,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 不正な単語エラーを作成
  #[must_use]
  pub fn invalid_input(reason: impl Into<String>) -> Self {
    Self::InvalidWord {
      reason: reason.into(),
    }
  }

  /// 単語長超過エラーを作成
  #[must_use]
  pub fn word_too_long(length: usize, max: usize) -> Self {
    Self::WordTooLong { length, max }
  }

  /// 解析器障害エラーを作成
  #[must_use]
  pub fn analyzer_unavailable(reason: impl Into<String>) -> Self {
    Self::AnalyzerUnavailable {
      reason: reason.into(),
    }
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
  /// word_too_long のときのみ
  #[serde(skip_serializing_if = "Option::is_none")]
  max_length: Option<usize>,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      error!(code = self.code(), error = %self, "単語解析 API エラー");
    }

    let max_length = match &self {
      Self::WordTooLong { max, .. } => Some(*max),
      _ => None,
    };

    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
        max_length,
      },
    };

    (status, Json(body)).into_response()
  }
}

/// KatachiError から ApiError への変換
///
/// 辞書まわりの障害はクライアントの誤りではないので 503 にする。
impl From<KatachiError> for ApiError {
  fn from(err: KatachiError) -> Self {
    match err {
      KatachiError::InvalidWord { reason } => ApiError::invalid_input(reason),
      KatachiError::Config(err) => ApiError::config(err.to_string()),
      KatachiError::Dictionary(_) | KatachiError::Tokenizer(_) | KatachiError::Lexicon(_) => {
        ApiError::analyzer_unavailable(err.to_string())
      }
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(err.to_string()),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
