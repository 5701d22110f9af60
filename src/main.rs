use anyhow::{bail, Result};
use bharat_scan::{analyzer, cli, config, export, logging, matcher};
use analyzer::{AnalysisSummary, AnalyzeOptions, Analyzer};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze { input, output, format, parallel } => {
            // 引数がすべて揃っていれば設定ファイルは読まない
            let (input, output, format) = match (input, output, format) {
                (Some(input), Some(output), Some(format)) => (input, output, format),
                (input, output, format) => {
                    let config = Config::load_or_default();
                    (
                        input.unwrap_or(config.input_file),
                        output.unwrap_or(config.output_file),
                        format.unwrap_or(config.format),
                    )
                }
            };

            println!("🔍 bharat-scan - メッセージ解析\n");

            // 1. パターン表
            println!("[1/3] パターン表を読み込み中...");
            let analyzer = Analyzer::builtin()?;
            println!(
                "✔ {}カテゴリ / {}パターン\n",
                analyzer.table().len(),
                analyzer.table().pattern_count()
            );

            // 2. 解析（入力をすべて読み込めた場合のみ出力に進む）
            println!("[2/3] メッセージを解析中...{}", if parallel { " (並列)" } else { "" });
            let options = AnalyzeOptions {
                parallel,
                show_progress: true,
            };
            let results = analyzer.analyze_file(&input, options)?;
            println!("✔ {}件を解析\n", results.len());

            // 3. レポート保存
            println!("[3/3] レポートを保存中... ({})", format);
            export::export_results(&results, format, &output)?;
            println!("✔ レポートを保存: {}\n", output.display());

            print_summary(&AnalysisSummary::from_results(&results));

            println!("\n✅ 解析完了");
        }

        Commands::Check { messages } => {
            let analyzer = Analyzer::builtin()?;
            let results = analyzer.analyze_lines(&messages);

            if results.is_empty() {
                println!("{}", export::text::NO_RESULTS_LINE);
            }
            for result in &results {
                print!("{}", export::text::render_block(result));
            }
        }

        Commands::Patterns { category } => {
            let analyzer = Analyzer::builtin()?;
            let table = analyzer.table();

            let categories: Vec<_> = match category.as_deref() {
                Some(name) => match table.category(name) {
                    Some(found) => vec![found],
                    None => bail!("不明なカテゴリ: {}", name),
                },
                None => table.categories().iter().collect(),
            };

            for category in categories {
                println!("{} ({})", category.name, category.patterns.len());
                for pattern in &category.patterns {
                    let kind = if matcher::is_phrase(pattern) { "フレーズ" } else { "単語" };
                    println!("  - {} [{}]", pattern, kind);
                }
                println!();
            }
        }

        Commands::Config { set_input, set_output, set_format, show } => {
            // 壊れた設定ファイルも --set-* で上書きできるよう既定値に戻して続行
            let mut config = Config::load_or_default();
            let changed = set_input.is_some() || set_output.is_some() || set_format.is_some();

            if let Some(path) = set_input {
                config.input_file = path;
            }
            if let Some(path) = set_output {
                config.output_file = path;
            }
            if let Some(format) = set_format {
                config.format = format;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  入力ファイル: {}", config.input_file.display());
                println!("  出力ファイル: {}", config.output_file.display());
                println!("  出力形式: {}", config.format);
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &AnalysisSummary) {
    println!("集計:");
    println!("  メッセージ数: {}", summary.total_messages);
    println!("  要注意: {}", summary.suspicious_messages);
    for (scam_type, count) in &summary.by_scam_type {
        println!("  {}: {}", scam_type, count);
    }
}
