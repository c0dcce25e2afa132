#[cfg(feature = "cli")]
pub mod cli;
pub mod local;
pub mod toml_config;

use crate::core::render::OutputFormat;
use crate::domain::model::{FilingFilter, DEFAULT_LIMIT};
use crate::utils::error::{Result, SecError};
use crate::utils::validation::{validate_path, Validate};
use chrono::NaiveDate;
use local::LocalDatasets;
use toml_config::TomlConfig;

/// 合併 TOML 檔案與命令列參數後的執行設定
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub companies_path: Option<String>,
    pub filings_path: Option<String>,
    pub default_limit: Option<i64>,
    pub default_form_types: Option<Vec<String>>,
    pub output_format: OutputFormat,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub verbose: bool,
}

impl From<TomlConfig> for Settings {
    fn from(config: TomlConfig) -> Self {
        Self {
            default_limit: config.default_limit(),
            default_form_types: config.default_form_types().map(<[String]>::to_vec),
            output_format: config.output_format(),
            log_level: config.log_level().map(str::to_string),
            log_json: config.log_json(),
            verbose: false,
            companies_path: Some(config.data.companies_path),
            filings_path: config.data.filings_path,
        }
    }
}

impl Settings {
    pub fn datasets(&self) -> Result<LocalDatasets> {
        let companies_path = self
            .companies_path
            .as_ref()
            .ok_or_else(|| SecError::ConfigError {
                message: "A companies dataset path is required (--companies or [data] companies_path)"
                    .to_string(),
            })?;
        Ok(LocalDatasets::new(companies_path, self.filings_path.as_ref()))
    }

    /// 命令列沒有指定的條件改用設定檔預設值
    pub fn filter(
        &self,
        form_types: &[String],
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        limit: Option<i64>,
    ) -> Result<FilingFilter> {
        let form_types = if form_types.is_empty() {
            self.default_form_types.clone()
        } else {
            Some(form_types.to_vec())
        };
        let limit = limit.or(self.default_limit).unwrap_or(DEFAULT_LIMIT);

        FilingFilter::new(form_types, date_from, date_to, limit)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        match &self.companies_path {
            Some(path) => validate_path("companies_path", path)?,
            None => {
                return Err(SecError::ConfigError {
                    message: "A companies dataset path is required".to_string(),
                })
            }
        }

        if let Some(path) = &self.filings_path {
            validate_path("filings_path", path)?;
        }

        Ok(())
    }
}
