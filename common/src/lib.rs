//! BharatScan Common Library
//!
//! 詐欺パターン表と解析結果の型。CLI以外のフロントエンドからも使えるよう
//! I/Oを持たない。

pub mod error;
pub mod patterns;
pub mod types;

pub use error::{Error, Result};
pub use patterns::{Category, PatternTable};
pub use types::{AnalysisResult, ScamType};
