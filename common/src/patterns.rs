//! 詐欺パターン表
//!
//! カテゴリ名 → キーワード/フレーズ列の対応表。起動時に一度だけ構築し、
//! 以後は読み取り専用で共有する。
//!
//! 組み込み表は `data/scam_patterns.json` をバイナリに埋め込んでいる。
//! カテゴリの順序が出力順を決めるので、JSONはオブジェクトではなく配列で持つ。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const BUILTIN_PATTERNS_JSON: &str = include_str!("../data/scam_patterns.json");

/// 1カテゴリ分のパターン
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// カテゴリ名（例: "WhatsApp Scam"）
    #[serde(rename = "category")]
    pub name: String,
    /// 小文字のキーワード/フレーズ（定義順）
    pub patterns: Vec<String>,
}

impl Category {
    /// 指定パターンがこのカテゴリに属するか
    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern)
    }
}

/// パターン表（定義順を保持）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternTable {
    categories: Vec<Category>,
}

impl PatternTable {
    /// 組み込みパターン表を読み込み
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PATTERNS_JSON)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    /// カテゴリ列から構築（不変条件を検証）
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// カテゴリ一覧（定義順）
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// 名前でカテゴリを取得
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// 全パターンを定義順に列挙（重複を含む）
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.patterns.iter().map(String::as_str))
    }

    /// パターンが表に含まれるか
    pub fn contains_pattern(&self, pattern: &str) -> bool {
        self.categories.iter().any(|c| c.contains(pattern))
    }

    /// カテゴリ数
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// パターン総数
    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns.len()).sum()
    }
}

fn validate(categories: &[Category]) -> Result<()> {
    if categories.is_empty() {
        return Err(Error::InvalidPatternTable("カテゴリが1つもありません".into()));
    }

    let mut seen = HashSet::new();
    for category in categories {
        if category.name.trim().is_empty() {
            return Err(Error::InvalidPatternTable("カテゴリ名が空です".into()));
        }
        if !seen.insert(category.name.as_str()) {
            return Err(Error::InvalidPatternTable(format!(
                "カテゴリ名が重複しています: {}",
                category.name
            )));
        }

        for pattern in &category.patterns {
            if pattern.trim().is_empty() {
                return Err(Error::InvalidPatternTable(format!(
                    "{}: 空のパターンがあります",
                    category.name
                )));
            }
            if pattern.trim() != pattern {
                return Err(Error::InvalidPatternTable(format!(
                    "{}: 前後に空白を含むパターン '{}'",
                    category.name, pattern
                )));
            }
            // 正規化済みテキストは小文字なので、大文字を含むパターンは一致しない
            if pattern.to_lowercase() != *pattern {
                return Err(Error::InvalidPatternTable(format!(
                    "{}: 小文字でないパターン '{}'",
                    category.name, pattern
                )));
            }
        }
    }

    Ok(())
}
