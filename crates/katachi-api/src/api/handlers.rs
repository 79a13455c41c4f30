//! HTTPハンドラー定義

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{WordAnalysisResponse, WordRequest};

use super::state::AppState;

/// POST /analyze/word エンドポイント
///
/// 単語の読み・活用形・活用表・意味を解析する。
///
/// # Request Body
/// ```json
/// { "text": "解析対象の単語" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功（辞書が使えない場合も縮退した結果を返す）
/// - 400 Bad Request: 入力エラー（空の単語、単語長超過）
/// - 500 Internal Server Error: 内部エラー
/// - 503 Service Unavailable: 辞書・形態素解析器の障害
pub async fn post_analyze_word(
  State(state): State<AppState>,
  Json(request): Json<WordRequest>,
) -> Result<Json<WordAnalysisResponse>, ApiError> {
  debug!(text_len = request.text.len(), "単語解析リクエストを受信");

  // 形態素解析は CPU バウンドなので非同期ランタイムから分離する
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    word = %response.original_text,
    notes = response.analysis.result.special_notes.len(),
    elapsed_ms = response.elapsed_ms,
    "単語解析完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
