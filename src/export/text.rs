//! テキストレポート生成

use bharat_scan_common::AnalysisResult;

pub const TOOL_NAME: &str = "BharatScan";
pub const NO_RESULTS_LINE: &str = "No messages processed or no scam patterns detected.";
const SEPARATOR_WIDTH: usize = 50;

/// レポート全体（ヘッダー + 各結果ブロック）
pub fn render_text_report(results: &[AnalysisResult]) -> String {
    let mut out = format!("--- {} Analysis Results ---\n\n", TOOL_NAME);

    if results.is_empty() {
        out.push_str(NO_RESULTS_LINE);
        out.push('\n');
        return out;
    }

    for result in results {
        out.push_str(&render_block(result));
    }
    out
}

/// 1件分のブロック（区切り線と空行を含む）
pub fn render_block(result: &AnalysisResult) -> String {
    let mut block = format!(
        "Original Message: {}\nPreprocessed: {}\nDetected Keywords: {}\nScam Type: {}\nSuspicious: {}\n",
        result.original_message,
        result.normalized_text,
        result.detected_keywords_label(),
        result.scam_type,
        result.suspicious_label()
    );
    block.push_str(&"-".repeat(SEPARATOR_WIDTH));
    block.push_str("\n\n");
    block
}
