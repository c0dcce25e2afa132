use anyhow::Result;
use sec_connector::domain::ports::DatasetSource;
use sec_connector::utils::validation::Validate;
use sec_connector::{FilingFilter, LocalDatasets, SecClient, SecError, Settings, TomlConfig};
use tempfile::TempDir;

const COMPANIES_JSON: &str = r#"{
    "0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."},
    "1": {"cik_str": 789019, "ticker": "MSFT", "title": "Microsoft Corp"}
}"#;

const FILINGS_JSON: &str = r#"{
    "0000320193": [
        {"company_name": "Apple Inc.", "form_type": "10-Q", "filing_date": "2024-08-01", "accession_number": "0000320193-24-000100"},
        {"company_name": "Apple Inc.", "form_type": "10-K", "filing_date": "2024-11-01", "accession_number": "0000320193-24-000123"}
    ]
}"#;

fn write_datasets(dir: &TempDir) -> Result<(String, String)> {
    let companies = dir.path().join("company_tickers.json");
    let filings = dir.path().join("filings.json");
    std::fs::write(&companies, COMPANIES_JSON)?;
    std::fs::write(&filings, FILINGS_JSON)?;
    Ok((
        companies.to_string_lossy().replace('\\', "/"),
        filings.to_string_lossy().replace('\\', "/"),
    ))
}

#[test]
fn test_client_from_local_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (companies, filings) = write_datasets(&temp_dir)?;

    let datasets = LocalDatasets::new(companies.as_str(), Some(filings.as_str()));
    let client = SecClient::from_source(&datasets)?;

    assert_eq!(client.company_count(), 2);
    let (company, filings) = client.filings_for_ticker("aapl", &FilingFilter::default())?;
    assert_eq!(company.name(), "Apple Inc.");
    assert_eq!(filings.len(), 2);
    // 檔案中的順序是舊到新，輸出應為新到舊
    assert_eq!(filings[0].form_type(), "10-K");
    Ok(())
}

#[test]
fn test_missing_filings_file_path_means_no_filings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (companies, _) = write_datasets(&temp_dir)?;

    let datasets = LocalDatasets::new(companies.as_str(), None);
    assert!(datasets.filings()?.is_none());

    let client = SecClient::from_source(&datasets)?;
    let err = client
        .list_filings("0000320193", &FilingFilter::default())
        .unwrap_err();
    assert!(matches!(err, SecError::NoFilingsFound { .. }));
    Ok(())
}

#[test]
fn test_unreadable_and_malformed_datasets() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let missing = temp_dir.path().join("does-not-exist.json");
    let datasets = LocalDatasets::new(missing.as_path(), None);
    assert!(matches!(
        SecClient::from_source(&datasets).unwrap_err(),
        SecError::IoError(_)
    ));

    let malformed = temp_dir.path().join("broken.json");
    std::fs::write(&malformed, r#"{"0": {"ticker": "AAPL"}}"#)?;
    let datasets = LocalDatasets::new(malformed.as_path(), None);
    assert!(matches!(
        SecClient::from_source(&datasets).unwrap_err(),
        SecError::SerializationError(_)
    ));
    Ok(())
}

#[test]
fn test_settings_from_toml_file_drive_queries() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (companies, filings) = write_datasets(&temp_dir)?;

    let config_path = temp_dir.path().join("sec-connector.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[data]
companies_path = "{}"
filings_path = "{}"

[query]
default_limit = 1
"#,
            companies, filings
        ),
    )?;

    let settings = Settings::from(TomlConfig::from_file(&config_path)?);
    settings.validate()?;

    let client = SecClient::from_source(&settings.datasets()?)?;
    let filter = settings.filter(&[], None, None, None)?;
    let filings = client.list_filings("0000320193", &filter)?;
    assert_eq!(filings.len(), 1);
    assert_eq!(filings[0].accession_number(), "0000320193-24-000123");
    Ok(())
}
