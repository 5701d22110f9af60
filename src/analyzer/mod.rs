//! バッチ解析モジュール
//!
//! 1行1メッセージの入力を 正規化 → 照合 → カテゴリ判定 の順に処理し、
//! 入力順のまま解析結果を返す。空行は結果を作らずに読み飛ばす。

mod input;
mod summary;

pub use bharat_scan_common::AnalysisResult;
pub use input::read_messages;
pub use summary::AnalysisSummary;

use crate::categorizer::categorize;
use crate::error::Result;
use crate::matcher::PatternMatcher;
use crate::normalizer::normalize;
use bharat_scan_common::PatternTable;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;

/// バッチ解析オプション
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    /// 行ごとに並列解析する（出力順は入力順のまま）
    pub parallel: bool,
    /// 進捗バーを表示する
    pub show_progress: bool,
}

/// 解析器（パターン表 + コンパイル済み照合器）
#[derive(Debug, Clone)]
pub struct Analyzer {
    table: PatternTable,
    matcher: PatternMatcher,
}

impl Analyzer {
    pub fn new(table: PatternTable) -> Result<Self> {
        let matcher = PatternMatcher::new(&table)?;
        tracing::debug!(
            categories = table.len(),
            patterns = table.pattern_count(),
            "pattern matcher compiled"
        );
        Ok(Self { table, matcher })
    }

    /// 組み込みパターン表で構築
    pub fn builtin() -> Result<Self> {
        Self::new(PatternTable::builtin()?)
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// 1メッセージを解析する
    ///
    /// `message` はそのまま原文として保持する（トリムは呼び出し側）。
    pub fn analyze_message(&self, message: &str) -> AnalysisResult {
        let normalized_text = normalize(message);
        let matches = self.matcher.detect(&normalized_text);
        let verdict = categorize(&matches, &self.table);

        tracing::debug!(
            normalized = %normalized_text,
            matches = matches.len(),
            scam_type = %verdict.scam_type,
            "message analyzed"
        );

        AnalysisResult {
            original_message: message.to_string(),
            normalized_text,
            detected_patterns: matches.into_vec(),
            scam_type: verdict.scam_type,
            suspicious: verdict.suspicious,
        }
    }

    /// 複数行を順に解析する（空行はスキップ）
    pub fn analyze_lines<I, S>(&self, lines: I) -> Vec<AnalysisResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        self.analyze_batch(&lines, AnalyzeOptions::default())
    }

    /// オプションに従って行を解析する
    ///
    /// 各行は前後の空白を除去し、空になった行は結果を作らない。
    pub fn analyze_batch<S>(&self, lines: &[S], options: AnalyzeOptions) -> Vec<AnalysisResult>
    where
        S: AsRef<str>,
    {
        let messages: Vec<&str> = lines
            .iter()
            .map(|line| line.as_ref().trim())
            .filter(|line| !line.is_empty())
            .collect();

        let skipped = lines.len() - messages.len();
        if skipped > 0 {
            tracing::debug!(skipped, "blank lines skipped");
        }

        let progress = if options.show_progress {
            let bar = ProgressBar::new(messages.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len} 件") {
                bar.set_style(style);
            }
            bar
        } else {
            ProgressBar::hidden()
        };

        let results: Vec<AnalysisResult> = if options.parallel {
            // collect は入力順を保持する
            messages
                .par_iter()
                .map(|message| {
                    let result = self.analyze_message(message);
                    progress.inc(1);
                    result
                })
                .collect()
        } else {
            messages
                .iter()
                .map(|message| {
                    let result = self.analyze_message(message);
                    progress.inc(1);
                    result
                })
                .collect()
        };

        progress.finish_and_clear();
        results
    }

    /// 入力ファイルを読み込んで解析する
    ///
    /// 読み込みに失敗した場合は何も解析せずに `InputUnavailable` を返す。
    pub fn analyze_file(&self, input: &Path, options: AnalyzeOptions) -> Result<Vec<AnalysisResult>> {
        let lines = read_messages(input)?;
        tracing::info!(path = %input.display(), lines = lines.len(), "input loaded");
        Ok(self.analyze_batch(&lines, options))
    }
}
