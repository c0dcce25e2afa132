use crate::domain::model::{Company, Filing};
use crate::utils::error::{Result, SecError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    fn delimiter(self) -> u8 {
        match self {
            OutputFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(SecError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: json, csv, tsv".to_string(),
            }),
        }
    }
}

fn write_delimited(format: OutputFormat, header: &[&str], rows: Vec<Vec<String>>) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(format.delimiter())
            .from_writer(&mut buffer);

        writer.write_record(header)?;
        for row in rows {
            writer.write_record(&row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn render_company(company: &Company, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(company)?),
        OutputFormat::Csv | OutputFormat::Tsv => write_delimited(
            format,
            &["ticker", "cik", "name"],
            vec![vec![
                company.ticker().to_string(),
                company.cik().to_string(),
                company.name().to_string(),
            ]],
        ),
    }
}

pub fn render_filings(filings: &[Filing], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(filings)?),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let rows = filings
                .iter()
                .map(|filing| {
                    vec![
                        filing.cik().to_string(),
                        filing.company_name().to_string(),
                        filing.form_type().to_string(),
                        filing.filing_date().to_string(),
                        filing.accession_number().to_string(),
                    ]
                })
                .collect();
            write_delimited(
                format,
                &[
                    "cik",
                    "company_name",
                    "form_type",
                    "filing_date",
                    "accession_number",
                ],
                rows,
            )
        }
    }
}
