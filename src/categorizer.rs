//! カテゴリ判定
//!
//! 一致パターン集合とパターン表だけを見て詐欺種別を決める。
//! メッセージ本文は参照しない。

use crate::matcher::MatchSet;
use bharat_scan_common::{PatternTable, ScamType};

/// 判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorization {
    pub scam_type: ScamType,
    pub suspicious: bool,
}

/// 一致パターンから詐欺種別と要注意フラグを判定する
///
/// - 一致なし → "Not a Scam" / false
/// - カテゴリに対応しないパターンのみ → "Unknown/Generic Scam" / true
/// - 1カテゴリ → そのカテゴリ名 / true
/// - 複数カテゴリ → "Multiple Scam Indicators: ..."（定義順） / true
pub fn categorize(matches: &MatchSet, table: &PatternTable) -> Categorization {
    if matches.is_empty() {
        return Categorization {
            scam_type: ScamType::NotAScam,
            suspicious: false,
        };
    }

    // 件数が少ないので逆引き表は作らず線形走査
    let mut matched: Vec<String> = table
        .categories()
        .iter()
        .filter(|category| matches.iter().any(|p| category.contains(p)))
        .map(|category| category.name.clone())
        .collect();

    let scam_type = match matched.len() {
        0 => ScamType::Unknown,
        1 => ScamType::Single(matched.remove(0)),
        _ => ScamType::Multiple(matched),
    };

    Categorization {
        scam_type,
        suspicious: true,
    }
}
