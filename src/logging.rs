use tracing_subscriber::EnvFilter;

/// ログ出力を初期化（標準エラー出力）
///
/// フィルタは `--verbose` の有無だけで決め、環境変数は参照しない。
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("bharat_scan=debug,bharat_scan_common=debug")
    } else {
        EnvFilter::new("warn")
    };

    // 二重初期化（テスト等）は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
