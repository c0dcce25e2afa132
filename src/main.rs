use clap::Parser;
use sec_connector::config::cli::{Command, FilingsArgs};
use sec_connector::core::render::{render_company, render_filings};
use sec_connector::utils::error::ErrorSeverity;
use sec_connector::utils::{logger, validation::Validate};
use sec_connector::{CliConfig, Result, SecClient, SecError, Settings};

fn run(cli: &CliConfig, settings: &Settings) -> Result<String> {
    let datasets = settings.datasets()?;
    let client = SecClient::from_source(&datasets)?;
    tracing::info!("📚 Loaded {} companies", client.company_count());

    match &cli.command {
        Command::Lookup { ticker, .. } => {
            let company = client.lookup_company(ticker)?;
            tracing::info!("🔍 {} → CIK {}", company.ticker(), company.cik());
            render_company(&company, settings.output_format)
        }
        Command::Filings(args) => {
            let FilingsArgs {
                ticker,
                cik,
                form_types,
                from,
                to,
                limit,
                ..
            } = args;
            let filter = settings.filter(form_types, *from, *to, *limit)?;

            let filings = match (cik, ticker) {
                (Some(cik), _) => client.list_filings(cik, &filter)?,
                (None, Some(ticker)) => client.filings_for_ticker(ticker, &filter)?.1,
                (None, None) => {
                    return Err(SecError::EmptyInput {
                        field: "Ticker or CIK".to_string(),
                    })
                }
            };
            tracing::info!("📄 {} filings returned", filings.len());
            render_filings(&filings, settings.output_format)
        }
    }
}

fn exit_code(e: &SecError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 1,      // 查無資料
        ErrorSeverity::Medium => 2,   // 輸入錯誤
        ErrorSeverity::High => 3,     // 設定錯誤
        ErrorSeverity::Critical => 4, // 讀檔或解析失敗
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    if settings.log_json {
        logger::init_json_logger(settings.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting sec-connector");
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    match run(&cli, &settings) {
        Ok(output) => {
            println!("{}", output.trim_end());
        }
        Err(e) => {
            tracing::error!(
                "❌ Query failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}
