use regex::Regex;

/// 照合ルール
#[derive(Debug, Clone)]
pub(crate) enum MatchRule {
    /// 複数語のフレーズ: 部分文字列として照合
    Phrase,
    /// 単語: 単語境界つきで照合
    Keyword(Regex),
}

/// コンパイル済みパターン
#[derive(Debug, Clone)]
pub(crate) struct CompiledPattern {
    pub pattern: String,
    pub rule: MatchRule,
}

/// 1メッセージで一致したパターン集合
///
/// パターン文字列単位で重複を除き、パターン表の定義順に並ぶ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    patterns: Vec<String>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加（既にあれば無視）。追加したら true
    pub fn insert(&mut self, pattern: &str) -> bool {
        if self.contains(pattern) {
            return false;
        }
        self.patterns.push(pattern.to_string());
        true
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.patterns
    }
}

impl<S: AsRef<str>> FromIterator<S> for MatchSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = MatchSet::new();
        for pattern in iter {
            set.insert(pattern.as_ref());
        }
        set
    }
}
