use airflow_client::utils::error::{ClientError, ErrorSeverity};
use airflow_client::utils::{logger, validation::Validate};
use airflow_client::{ApiClient, CliConfig};
use clap::Parser;

/// 根據錯誤嚴重程度決定退出碼
fn exit_code(error: &ClientError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(error: &ClientError) -> ! {
    tracing::error!(
        "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());

    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 建議: {}", error.recovery_suggestion());

    std::process::exit(exit_code(error));
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 設定錯誤在日誌初始化前就可能發生，直接輸出到 stderr
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if settings.logging.json {
        logger::init_json_logger(settings.logging.verbose);
    } else {
        logger::init_cli_logger(settings.logging.verbose);
    }

    tracing::debug!("Resolved settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let client = match ApiClient::from_config(&settings) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };
    tracing::debug!("🌐 Using Airflow API at {}", client.base_url());

    if let Err(e) = cli.command.run(&client).await {
        fail(&e);
    }
}
