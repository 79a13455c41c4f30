//! モデルモジュール

mod request;
mod response;

pub use request::WordRequest;
pub use response::{AnalysisEnvelope, WordAnalysisResponse};
