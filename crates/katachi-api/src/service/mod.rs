//! Service module

mod katachi_api_service;

pub use katachi_api_service::{KatachiApiService, WordAnalysisService};
