use clap::Parser;
use scourgify::utils::logger;
use scourgify::{CliConfig, ScourgifyEngine, ScourgifyError};

fn main() {
    let cli = CliConfig::parse();

    // 解析配置：日誌格式來自設定檔，所以先解析再初始化日誌
    let resolved = cli.resolve();
    let log_format = resolved
        .as_ref()
        .map(|config| config.log_format)
        .unwrap_or_default();
    logger::init_cli_logger(cli.verbose, log_format);

    tracing::info!("🚀 Starting scourgify");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match resolved {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建引擎並運行
    let engine = ScourgifyEngine::new(config);
    match engine.run() {
        Ok(summary) => match summary.destination {
            Some(path) => {
                tracing::info!("✅ Transform completed successfully");
                println!("✅ Wrote {} rows to {}", summary.rows_written, path.display());
            }
            None => println!("Dry run: {} rows are valid", summary.rows_written),
        },
        Err(e) => fail(e),
    }
}

fn fail(e: ScourgifyError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Transform failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // stderr 只輸出固定的使用者訊息，退出碼由嚴重程度決定
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
