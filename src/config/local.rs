use crate::domain::ports::{CompaniesData, DatasetSource, FilingsData};
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// 從本機 JSON 檔案讀取資料集
#[derive(Debug, Clone)]
pub struct LocalDatasets {
    companies_path: PathBuf,
    filings_path: Option<PathBuf>,
}

impl LocalDatasets {
    pub fn new<P: AsRef<Path>>(companies_path: P, filings_path: Option<P>) -> Self {
        Self {
            companies_path: companies_path.as_ref().to_path_buf(),
            filings_path: filings_path.map(|p| p.as_ref().to_path_buf()),
        }
    }

    pub fn companies_path(&self) -> &Path {
        &self.companies_path
    }

    pub fn filings_path(&self) -> Option<&Path> {
        self.filings_path.as_deref()
    }
}

impl DatasetSource for LocalDatasets {
    fn companies(&self) -> Result<CompaniesData> {
        tracing::debug!("Reading companies from {}", self.companies_path.display());
        let content = fs::read_to_string(&self.companies_path)?;
        let companies: CompaniesData = serde_json::from_str(&content)?;
        tracing::debug!("Loaded {} company entries", companies.len());
        Ok(companies)
    }

    fn filings(&self) -> Result<Option<FilingsData>> {
        let Some(path) = &self.filings_path else {
            return Ok(None);
        };

        tracing::debug!("Reading filings from {}", path.display());
        let content = fs::read_to_string(path)?;
        let filings: FilingsData = serde_json::from_str(&content)?;
        tracing::debug!("Loaded filings for {} CIKs", filings.len());
        Ok(Some(filings))
    }
}
