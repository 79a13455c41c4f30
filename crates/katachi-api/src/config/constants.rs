//! API設定の定数定義

/// 入力単語の最大長（文字数）
///
/// 単語解析 API なので文章レベルの長さは受け付けない。
pub const MAX_WORD_LENGTH: usize = 64;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";

/// デフォルトの辞書プリセット名
///
/// UniDic (CWJ) をデフォルトとして使用。
/// 活用型・活用形の列が揃っているため、活用判定の精度が高い。
pub const DEFAULT_PRESET_DICT: &str = "unidic-cwj";

/// デフォルトのログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";
