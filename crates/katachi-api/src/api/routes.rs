//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_analyze_word};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/analyze/word", post(post_analyze_word))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}
