//! パターン照合モジュール
//!
//! 正規化済みテキストをパターン表と照合し、一致したパターン集合を返す。
//! - 複数語のフレーズ → 部分文字列として照合
//! - 単語 → 単語境界つきで照合（"pin" は "spinner" に一致しない）

mod types;

pub use types::MatchSet;

use crate::error::Result;
use bharat_scan_common::PatternTable;
use regex::Regex;
use types::{CompiledPattern, MatchRule};

/// コンパイル済みの照合器
///
/// パターン表から一度だけ構築し、全メッセージで共有する（`Sync`）。
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    rules: Vec<CompiledPattern>,
}

impl PatternMatcher {
    /// パターン表から照合器を構築
    pub fn new(table: &PatternTable) -> Result<Self> {
        let mut rules = Vec::with_capacity(table.pattern_count());

        for pattern in table.patterns() {
            let rule = if is_phrase(pattern) {
                MatchRule::Phrase
            } else {
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(pattern)))?;
                MatchRule::Keyword(re)
            };
            rules.push(CompiledPattern {
                pattern: pattern.to_string(),
                rule,
            });
        }

        Ok(Self { rules })
    }

    /// 一致したパターンを検出（定義順・重複なし）
    pub fn detect(&self, normalized_text: &str) -> MatchSet {
        let mut found = MatchSet::new();
        if normalized_text.is_empty() {
            return found;
        }

        for compiled in &self.rules {
            let matched = match &compiled.rule {
                MatchRule::Phrase => normalized_text.contains(compiled.pattern.as_str()),
                MatchRule::Keyword(re) => re.is_match(normalized_text),
            };
            if matched {
                found.insert(&compiled.pattern);
            }
        }

        found
    }

    /// ルール数（重複パターンを含む）
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// 空白区切りで2語以上ならフレーズ
pub fn is_phrase(pattern: &str) -> bool {
    pattern.split_whitespace().count() > 1
}

/// 一回限りの照合（照合器を都度構築する）
pub fn detect_patterns(normalized_text: &str, table: &PatternTable) -> Result<MatchSet> {
    Ok(PatternMatcher::new(table)?.detect(normalized_text))
}
