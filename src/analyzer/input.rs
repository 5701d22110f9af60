use crate::error::{Result, ScanError};
use std::path::Path;

/// 入力ファイルを行単位で読み込む
///
/// ファイルが存在しない・読めない・UTF-8でない場合は `InputUnavailable`。
/// 行の空白除去と空行の除外は解析側で行う。
pub fn read_messages(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| ScanError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}
