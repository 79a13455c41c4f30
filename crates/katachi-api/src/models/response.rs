//! Response Model Definition

use serde::Serialize;

use katachi::UnifiedAnalysisRecord;

/// Analysis type of the word endpoint
pub const ANALYSIS_TYPE_WORD: &str = "word";

/// Analysis method of the word endpoint
pub const ANALYSIS_METHOD_WORD_PARSER: &str = "word_parser";

/// Status of a completed analysis
pub const ANALYSIS_STATUS_SUCCESS: &str = "success";

/// Word Analysis Response
#[derive(Debug, Serialize)]
pub struct WordAnalysisResponse {
  /// Input as received
  pub original_text: String,
  /// Analysis result with its method metadata
  pub analysis: AnalysisEnvelope,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Analysis result and the method that produced it
#[derive(Debug, Serialize)]
pub struct AnalysisEnvelope {
  /// Always "word"
  #[serde(rename = "type")]
  pub analysis_type: &'static str,
  /// Always "word_parser"
  pub method: &'static str,
  /// Unified analysis record
  pub result: UnifiedAnalysisRecord,
  /// "success"
  pub status: &'static str,
}

impl AnalysisEnvelope {
  /// Envelope of a successful word parser result
  #[must_use]
  pub fn word_parser(result: UnifiedAnalysisRecord) -> Self {
    Self {
      analysis_type: ANALYSIS_TYPE_WORD,
      method: ANALYSIS_METHOD_WORD_PARSER,
      result,
      status: ANALYSIS_STATUS_SUCCESS,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn word_analysis_response_serialization() {
    let response = WordAnalysisResponse {
      original_text: "見る".to_string(),
      analysis: AnalysisEnvelope::word_parser(UnifiedAnalysisRecord {
        translation: "to see".to_string(),
        grammar_points: Vec::new(),
        vocabulary: Vec::new(),
        special_notes: Vec::new(),
      }),
      elapsed_ms: 42,
    };

    let json: serde_json::Value = serde_json::to_value(&response).unwrap();
    assert_eq!(json["original_text"], "見る");
    assert_eq!(json["analysis"]["type"], "word");
    assert_eq!(json["analysis"]["method"], "word_parser");
    assert_eq!(json["analysis"]["status"], "success");
    assert_eq!(json["analysis"]["result"]["translation"], "to see");
    assert_eq!(json["elapsed_ms"], 42);
  }
}
