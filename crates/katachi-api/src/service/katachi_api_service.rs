//! Word Analysis Service

use std::time::Instant;

use katachi::KatachiService;

use crate::config::{Config, MAX_WORD_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{AnalysisEnvelope, WordAnalysisResponse, WordRequest};

/// Common interface for word analysis service
///
/// This trait allows swapping production implementation (`KatachiApiService`) with
/// test stubs/mocks.
pub trait WordAnalysisService: Send + Sync {
  /// Executes word analysis
  ///
  /// # Errors
  /// - Input error (empty word, length exceeded)
  /// - Internal error
  fn analyze(&self, request: WordRequest) -> Result<WordAnalysisResponse>;
}

/// Word Analysis Service backed by [`KatachiService`]
#[derive(Debug)]
pub struct KatachiApiService {
  inner: KatachiService,
}

impl KatachiApiService {
  /// Initializes the service
  ///
  /// A missing dictionary or lexicon does not fail here; the analysis degrades instead.
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid
  pub fn new(config: &Config) -> Result<Self> {
    let inner = KatachiService::init(&config.to_katachi_config())?;
    Ok(Self { inner })
  }

  /// Wraps an already built [`KatachiService`]
  #[must_use]
  pub fn from_service(inner: KatachiService) -> Self {
    Self { inner }
  }

  /// Underlying analysis service
  #[must_use]
  pub fn inner(&self) -> &KatachiService {
    &self.inner
  }

  /// Executes word analysis
  ///
  /// # Errors
  /// - If the word is empty or whitespace only
  /// - If the word exceeds [`MAX_WORD_LENGTH`] characters
  pub fn analyze(&self, request: WordRequest) -> Result<WordAnalysisResponse> {
    let word = request.text.trim();
    if word.is_empty() {
      return Err(ApiError::invalid_input("Word is empty"));
    }

    let char_count = word.chars().count();
    if char_count > MAX_WORD_LENGTH {
      return Err(ApiError::word_too_long(char_count, MAX_WORD_LENGTH));
    }

    // Start measuring processing time
    let start = Instant::now();

    let record = self.inner.analyze_word(word)?;

    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(WordAnalysisResponse {
      original_text: request.text,
      analysis: AnalysisEnvelope::word_parser(record),
      elapsed_ms,
    })
  }
}

/// Production implementation of trait `WordAnalysisService`
impl WordAnalysisService for KatachiApiService {
  fn analyze(&self, request: WordRequest) -> Result<WordAnalysisResponse> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    KatachiApiService::analyze(self, request)
  }
}
