//! 解析結果の型定義
//!
//! - ScamType: カテゴリ判定の結果
//! - AnalysisResult: 1メッセージ分の最終出力

use serde::{Deserialize, Serialize};
use std::fmt;

const NOT_A_SCAM: &str = "Not a Scam";
const UNKNOWN_SCAM: &str = "Unknown/Generic Scam";
const MULTIPLE_PREFIX: &str = "Multiple Scam Indicators: ";

/// 詐欺種別
///
/// 表示形式はレポートにそのまま出力される:
/// - `NotAScam` → "Not a Scam"
/// - `Unknown` → "Unknown/Generic Scam"
/// - `Single` → カテゴリ名
/// - `Multiple` → "Multiple Scam Indicators: A, B"
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ScamType {
    #[default]
    NotAScam,
    /// パターンは一致したがカテゴリに対応しない
    Unknown,
    Single(String),
    /// パターン表の定義順
    Multiple(Vec<String>),
}

impl fmt::Display for ScamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScamType::NotAScam => write!(f, "{}", NOT_A_SCAM),
            ScamType::Unknown => write!(f, "{}", UNKNOWN_SCAM),
            ScamType::Single(name) => write!(f, "{}", name),
            ScamType::Multiple(names) => write!(f, "{}{}", MULTIPLE_PREFIX, names.join(", ")),
        }
    }
}

impl From<ScamType> for String {
    fn from(value: ScamType) -> Self {
        value.to_string()
    }
}

impl From<String> for ScamType {
    fn from(value: String) -> Self {
        if value == NOT_A_SCAM {
            ScamType::NotAScam
        } else if value == UNKNOWN_SCAM {
            ScamType::Unknown
        } else if let Some(rest) = value.strip_prefix(MULTIPLE_PREFIX) {
            ScamType::Multiple(rest.split(", ").map(str::to_string).collect())
        } else {
            ScamType::Single(value)
        }
    }
}

/// メッセージ解析結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 入力行（前後の空白を除去済み）
    pub original_message: String,

    /// 正規化後のテキスト
    #[serde(default)]
    pub normalized_text: String,

    /// 一致したパターン（パターン表の定義順）
    #[serde(default)]
    pub detected_patterns: Vec<String>,

    #[serde(default)]
    pub scam_type: ScamType,

    #[serde(default)]
    pub suspicious: bool,
}

impl AnalysisResult {
    /// 「Detected Keywords」欄の表示文字列
    pub fn detected_keywords_label(&self) -> String {
        if self.detected_patterns.is_empty() {
            "None".to_string()
        } else {
            self.detected_patterns.join(", ")
        }
    }

    /// 「Suspicious」欄の表示文字列
    pub fn suspicious_label(&self) -> &'static str {
        if self.suspicious {
            "Yes"
        } else {
            "No"
        }
    }
}
