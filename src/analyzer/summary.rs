use bharat_scan_common::AnalysisResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// 解析結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// 処理したメッセージ数（空行を除く）
    pub total_messages: usize,
    /// 要注意と判定したメッセージ数
    pub suspicious_messages: usize,
    /// 詐欺種別ごとの件数（"Not a Scam" を含む）
    pub by_scam_type: BTreeMap<String, usize>,
}

impl AnalysisSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut summary = Self {
            total_messages: results.len(),
            ..Default::default()
        };

        for result in results {
            if result.suspicious {
                summary.suspicious_messages += 1;
            }
            *summary
                .by_scam_type
                .entry(result.scam_type.to_string())
                .or_insert(0) += 1;
        }

        summary
    }
}
