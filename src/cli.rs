use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bharat-scan")]
#[command(about = "メッセージの詐欺パターン検出・分類ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// メッセージファイルを解析してレポートを出力
    Analyze {
        /// 入力ファイル（1行1メッセージ、省略時は設定値）
        input: Option<PathBuf>,

        /// 出力ファイル（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (text/json)
        #[arg(short, long)]
        format: Option<ReportFormat>,

        /// 行ごとに並列解析（出力順は変わらない）
        #[arg(long)]
        parallel: bool,
    },

    /// メッセージを直接指定して判定
    Check {
        /// 判定するメッセージ
        #[arg(required = true)]
        messages: Vec<String>,
    },

    /// 組み込みパターン表を表示
    Patterns {
        /// 表示するカテゴリ名
        #[arg(short, long)]
        category: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の入力ファイルを設定
        #[arg(long)]
        set_input: Option<PathBuf>,

        /// 既定の出力ファイルを設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 既定の出力形式を設定
        #[arg(long)]
        set_format: Option<ReportFormat>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// レポート形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
