//! BharatScan
//!
//! 短いメッセージを正規化し、詐欺パターン表と照合して
//! 詐欺種別と要注意フラグを判定する。
//!
//! 処理の流れ: 正規化 (`normalizer`) → 照合 (`matcher`) →
//! カテゴリ判定 (`categorizer`) → バッチ解析 (`analyzer`) → 出力 (`export`)

pub mod analyzer;
pub mod categorizer;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod matcher;
pub mod normalizer;

pub use bharat_scan_common::{AnalysisResult, PatternTable, ScamType};
