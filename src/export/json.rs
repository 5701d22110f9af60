//! JSONレポート生成

use super::text::TOOL_NAME;
use crate::analyzer::AnalysisSummary;
use crate::error::Result;
use bharat_scan_common::AnalysisResult;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    tool: &'a str,
    generated_at: String,
    summary: AnalysisSummary,
    results: &'a [AnalysisResult],
}

/// JSONレポート（整形済み）
pub fn render_json_report(results: &[AnalysisResult]) -> Result<String> {
    let report = JsonReport {
        tool: TOOL_NAME,
        generated_at: chrono::Utc::now().to_rfc3339(),
        summary: AnalysisSummary::from_results(results),
        results,
    };

    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}
