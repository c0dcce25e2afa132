pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{local::LocalDatasets, toml_config::TomlConfig, Settings};
pub use crate::core::{client::SecClient, render::OutputFormat};
pub use crate::domain::model::{Company, CompanyRecord, Filing, FilingFilter, FilingRecord};
pub use crate::utils::error::{Result, SecError};
