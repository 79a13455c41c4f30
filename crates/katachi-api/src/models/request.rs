//! リクエストモデル定義

use serde::Deserialize;

/// 単語解析リクエスト
#[derive(Debug, Deserialize)]
pub struct WordRequest {
  /// 解析対象の単語
  pub text: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"text": "書いて"}"#;
    let req: WordRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "書いて");
  }

  #[test]
  fn deserialize_empty_text() {
    let json = r#"{"text": ""}"#;
    let req: WordRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "");
  }
}
