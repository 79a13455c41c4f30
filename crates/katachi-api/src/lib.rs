//! katachi-api crate
//!
//! Web server providing word analysis as HTTP API.
//!
//! ## Endpoints
//! - `POST /analyze/word` - Word Analysis (reading, conjugation, meaning)
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5001/analyze/word \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "食べさせられた"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalysisEnvelope, WordAnalysisResponse, WordRequest};
pub use service::{KatachiApiService, WordAnalysisService};
