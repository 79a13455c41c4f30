//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::WordAnalysisService;

/// Application State
///
/// State shared across the entire server.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Word Analysis Service
  ///
  /// - Production: `Arc::new(KatachiApiService::new(&config)?)`
  /// - Test: `Arc::new(StubWordAnalysisService)`
  pub service: Arc<dyn WordAnalysisService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn WordAnalysisService>) -> Self {
    Self { config, service }
  }
}
