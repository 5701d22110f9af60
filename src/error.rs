use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("入力ファイルを読み込めません: {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("出力ファイルに書き込めません: {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("パターンのコンパイルに失敗: {0}")]
    PatternCompile(#[from] regex::Error),

    #[error(transparent)]
    Common(#[from] bharat_scan_common::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
