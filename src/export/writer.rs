use crate::error::{Result, ScanError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// 出力先と同じディレクトリの一時ファイルに書き込み、成功後にリネームする
///
/// 途中で失敗した場合、一時ファイルは破棄され出力先には何も残らない。
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let unwritable = |source: std::io::Error| ScanError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(unwritable)?;
    file.write_all(content.as_bytes()).map_err(unwritable)?;
    file.flush().map_err(unwritable)?;
    file.persist(path).map_err(|e| unwritable(e.error))?;

    Ok(())
}
