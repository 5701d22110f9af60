pub mod json;
pub mod text;
pub mod writer;

use crate::analyzer::AnalysisResult;
use crate::cli::ReportFormat;
use crate::error::Result;
use std::path::Path;

/// レポート文字列を生成
pub fn render_report(results: &[AnalysisResult], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(text::render_text_report(results)),
        ReportFormat::Json => json::render_json_report(results),
    }
}

/// レポートを出力ファイルに書き込む
///
/// 全件のレンダリングが終わってから書き込むので、失敗時に途中までの
/// レポートが残ることはない。
pub fn export_results(results: &[AnalysisResult], format: ReportFormat, output: &Path) -> Result<()> {
    let report = render_report(results, format)?;
    writer::write_atomic(output, &report)?;
    tracing::info!(
        path = %output.display(),
        format = %format,
        results = results.len(),
        "report written"
    );
    Ok(())
}
