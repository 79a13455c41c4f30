//! katachi-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use katachi_api::ApiError;
use katachi_api::api::AppState;
use katachi_api::api::run_server;
use katachi_api::config::Config;
use katachi_api::service::KatachiApiService;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み（ログレベルを決めるため先に読む）
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG があればそちらを優先）
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_directive()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    preset = ?config.preset,
    lexicon = ?config.lexicon_path,
    "設定を読み込みました"
  );

  // サービスの初期化（辞書が無くても縮退して起動する）
  let service = Arc::new(KatachiApiService::new(&config)?);
  tracing::info!(
    tokenizer = service.inner().tokenizer().is_available(),
    lexicon = service.inner().lexicon().is_available(),
    "単語解析サービスを初期化しました"
  );

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
