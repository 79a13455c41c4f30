//! katachi 日本語の単語解析ライブラリー
//!
//! vibrato-rkyv による形態素解析と JMdict を用いて、単語の読み・動詞の活用形・活用表・意味をまとめる

/// 解析モジュール - 読みの復元、活用形の判定、活用表の生成、結果の統合
pub mod analysis;

/// 設定モジュール - KatachiConfig 等の設定構造体を定義
pub mod config;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - KatachiError, KatachiResult等のエラー型を定義
pub mod errors;

/// 語彙辞書モジュール - JMdict の読み込みと見出し語検索
pub mod lexicon;

/// データモデルモジュール - Morpheme, UnifiedAnalysisRecord等のデータ構造を定義
pub mod models;

/// サービスモジュール - KatachiService等の上位レベルAPIを提供
pub mod service;

/// トークナイザーモジュール - vibrato-rkyvを用いた形態素解析トークナイザー
pub mod tokenizer;

/// 再エクスポート
pub use config::{DictionaryPreset, KatachiConfig};
pub use errors::{KatachiError, KatachiResult};
pub use models::UnifiedAnalysisRecord;
pub use service::{AdapterState, KatachiService};
