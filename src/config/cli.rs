use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "sec-connector")]
#[command(about = "Look up companies and their SEC filings from local datasets")]
pub struct CliConfig {
    /// Path to the companies JSON (company_tickers.json shape)
    #[arg(long, global = true)]
    pub companies: Option<String>,

    /// Path to the filings JSON, keyed by 10-digit CIK
    #[arg(long, global = true)]
    pub filings: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a ticker to its company record
    Lookup {
        ticker: String,

        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// List filings for a ticker or CIK
    Filings(FilingsArgs),
}

#[derive(Debug, Clone, Args)]
pub struct FilingsArgs {
    #[arg(required_unless_present = "cik", conflicts_with = "cik")]
    pub ticker: Option<String>,

    /// Query by 10-digit CIK instead of ticker
    #[arg(long)]
    pub cik: Option<String>,

    #[arg(long = "form-type", value_delimiter = ',')]
    pub form_types: Vec<String>,

    /// Earliest filing date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest filing date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    #[arg(long)]
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// 載入設定檔 (若有)，再以命令列參數覆蓋
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Settings::from(config)
            }
            None => Settings::default(),
        };

        if let Some(companies) = &self.companies {
            settings.companies_path = Some(companies.clone());
        }
        if let Some(filings) = &self.filings {
            settings.filings_path = Some(filings.clone());
        }
        settings.verbose = self.verbose;
        settings.log_json = settings.log_json || self.log_json;

        match &self.command {
            Command::Lookup {
                format: Some(format),
                ..
            } => settings.output_format = *format,
            Command::Filings(FilingsArgs {
                format: Some(format),
                ..
            }) => settings.output_format = *format,
            _ => {}
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorCategory, SecError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_from_toml(toml_content: &str) -> Result<Settings> {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().to_string_lossy().to_string();

        let cli =
            CliConfig::try_parse_from(["sec-connector", "--config", path.as_str(), "lookup", "AAPL"])
                .unwrap();
        cli.settings()
    }

    #[test]
    fn test_parse_lookup_command() {
        let cli = CliConfig::try_parse_from([
            "sec-connector",
            "--companies",
            "tickers.json",
            "lookup",
            "aapl",
            "--format",
            "csv",
        ])
        .unwrap();

        let settings = cli.settings().unwrap();
        assert_eq!(settings.companies_path.as_deref(), Some("tickers.json"));
        assert_eq!(settings.output_format, OutputFormat::Csv);
        assert!(matches!(cli.command, Command::Lookup { ref ticker, .. } if ticker == "aapl"));
    }

    #[test]
    fn test_parse_filings_command() {
        let cli = CliConfig::try_parse_from([
            "sec-connector",
            "filings",
            "AAPL",
            "--form-type",
            "10-K,10-Q",
            "--from",
            "2024-01-01",
            "--limit",
            "2",
            "--companies",
            "tickers.json",
            "--filings",
            "filings.json",
        ])
        .unwrap();

        let Command::Filings(args) = &cli.command else {
            panic!("expected filings command");
        };
        assert_eq!(args.ticker.as_deref(), Some("AAPL"));
        assert_eq!(args.form_types, vec!["10-K".to_string(), "10-Q".to_string()]);
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(args.limit, Some(2));

        let settings = cli.settings().unwrap();
        assert_eq!(settings.filings_path.as_deref(), Some("filings.json"));
    }

    #[test]
    fn test_filings_requires_ticker_or_cik() {
        assert!(CliConfig::try_parse_from(["sec-connector", "filings"]).is_err());
        assert!(
            CliConfig::try_parse_from(["sec-connector", "filings", "--cik", "0000320193"]).is_ok()
        );
        assert!(CliConfig::try_parse_from([
            "sec-connector",
            "filings",
            "AAPL",
            "--cik",
            "0000320193"
        ])
        .is_err());
    }

    #[test]
    fn test_settings_reject_invalid_toml_values() {
        let err = settings_from_toml(
            r#"
[data]
companies_path = "tickers.json"

[query]
default_limit = 2000
"#,
        )
        .unwrap_err();
        assert!(matches!(err, SecError::InvalidConfigValueError { ref field, .. } if field == "query.default_limit"));
        assert_eq!(err.category(), ErrorCategory::Configuration);

        let err = settings_from_toml(
            r#"
[data]
companies_path = "tickers.json"

[logging]
level = "loud"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, SecError::InvalidConfigValueError { ref field, .. } if field == "logging.level"));
    }

    #[test]
    fn test_settings_accept_valid_toml() {
        let settings = settings_from_toml(
            r#"
[data]
companies_path = "tickers.json"

[query]
default_limit = 1000

[logging]
level = "warn"
"#,
        )
        .unwrap();
        assert_eq!(settings.default_limit, Some(1000));
        assert_eq!(settings.log_level.as_deref(), Some("warn"));
    }
}
