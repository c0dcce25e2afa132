use crate::domain::model::{Company, CompanyRecord, Filing, FilingFilter};
use crate::domain::ports::{CompaniesData, DatasetSource, FilingsData};
use crate::utils::error::{Result, SecError};
use crate::utils::validation::pad_cik;
use std::collections::HashMap;

/// In-memory lookup client over a company directory and a filings-by-CIK map.
///
/// The datasets are never mutated after construction, so a shared reference
/// can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct SecClient {
    companies: HashMap<String, CompanyRecord>,
    filings: Option<FilingsData>,
}

impl SecClient {
    pub fn new(companies_data: CompaniesData, filings_data: Option<FilingsData>) -> Self {
        // 依資料集鍵值排序，重複的 ticker 以最小鍵值的記錄為準
        let mut entries: Vec<(String, CompanyRecord)> = companies_data.into_iter().collect();
        entries.sort_by_key(|(key, _)| (key.parse::<u64>().unwrap_or(u64::MAX), key.clone()));

        let mut companies = HashMap::with_capacity(entries.len());
        for (key, record) in entries {
            let ticker = record.ticker.trim().to_uppercase();
            if ticker.is_empty() {
                tracing::debug!("Skipping company entry {} with blank ticker", key);
                continue;
            }
            if companies.contains_key(&ticker) {
                tracing::debug!("Duplicate ticker {} at entry {}, keeping first", ticker, key);
                continue;
            }
            companies.insert(ticker, record);
        }

        if filings_data.is_none() {
            tracing::warn!("SecClient created without filings data, list_filings will fail");
        }

        tracing::debug!(
            "SecClient ready: {} companies, {} filers with filings",
            companies.len(),
            filings_data.as_ref().map(|f| f.len()).unwrap_or(0)
        );

        Self {
            companies,
            filings: filings_data,
        }
    }

    /// 由 JSON 字串建立 (SEC `company_tickers.json` 格式)
    pub fn from_json(companies_json: &str, filings_json: Option<&str>) -> Result<Self> {
        let companies: CompaniesData = serde_json::from_str(companies_json)?;
        let filings = match filings_json {
            Some(json) => Some(serde_json::from_str::<FilingsData>(json)?),
            None => None,
        };
        Ok(Self::new(companies, filings))
    }

    pub fn from_source<S: DatasetSource>(source: &S) -> Result<Self> {
        Ok(Self::new(source.companies()?, source.filings()?))
    }

    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    pub fn has_filings_data(&self) -> bool {
        self.filings.is_some()
    }

    pub fn lookup_company(&self, ticker: &str) -> Result<Company> {
        let normalized = ticker.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(SecError::EmptyInput {
                field: "Ticker".to_string(),
            });
        }

        let record = self
            .companies
            .get(&normalized)
            .ok_or_else(|| SecError::CompanyNotFound {
                ticker: normalized.clone(),
            })?;

        tracing::debug!("Resolved ticker {} to CIK {}", normalized, record.cik_str);

        Company::new(&record.ticker, &pad_cik(record.cik_str), &record.title)
    }

    /// Filings for `cik`, filtered, newest first, truncated to `filter.limit()`.
    ///
    /// Filings sharing a date keep their dataset order. An unknown CIK is an
    /// error; a known CIK where nothing survives the filter yields an empty list.
    pub fn list_filings(&self, cik: &str, filter: &FilingFilter) -> Result<Vec<Filing>> {
        let cik = cik.trim();
        if cik.is_empty() {
            return Err(SecError::EmptyInput {
                field: "CIK".to_string(),
            });
        }

        let records = self
            .filings
            .as_ref()
            .and_then(|filings| filings.get(cik))
            .ok_or_else(|| SecError::NoFilingsFound {
                cik: cik.to_string(),
            })?;

        let mut filings = records
            .iter()
            .map(|record| Filing::from_record(cik, record))
            .collect::<Result<Vec<_>>>()?;
        let total = filings.len();

        filings.retain(|filing| filter.matches(filing));
        tracing::debug!("CIK {}: {} of {} filings match filter", cik, filings.len(), total);

        // sort_by 為穩定排序，同日申報維持原始順序
        filings.sort_by(|a, b| b.filing_date().cmp(&a.filing_date()));
        filings.truncate(filter.limit());

        Ok(filings)
    }

    pub fn filings_for_ticker(
        &self,
        ticker: &str,
        filter: &FilingFilter,
    ) -> Result<(Company, Vec<Filing>)> {
        let company = self.lookup_company(ticker)?;
        let filings = self.list_filings(company.cik(), filter)?;
        Ok((company, filings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FilingRecord;

    fn record(cik: u64, ticker: &str, title: &str) -> CompanyRecord {
        CompanyRecord {
            cik_str: cik,
            ticker: ticker.to_string(),
            title: title.to_string(),
        }
    }

    fn filing(form_type: &str, date: &str, accession: &str) -> FilingRecord {
        FilingRecord {
            company_name: "Acme Corp".to_string(),
            form_type: form_type.to_string(),
            filing_date: date.to_string(),
            accession_number: accession.to_string(),
        }
    }

    #[test]
    fn test_duplicate_ticker_keeps_lowest_key() {
        let mut companies = HashMap::new();
        companies.insert("10".to_string(), record(2, "ACME", "Acme Later"));
        companies.insert("2".to_string(), record(1, "acme", "Acme First"));

        let client = SecClient::new(companies, None);
        assert_eq!(client.company_count(), 1);

        let company = client.lookup_company("Acme").unwrap();
        assert_eq!(company.name(), "Acme First");
        assert_eq!(company.cik(), "0000000001");
    }

    #[test]
    fn test_blank_ticker_entries_are_skipped() {
        let mut companies = HashMap::new();
        companies.insert("0".to_string(), record(1, "  ", "Nameless"));
        let client = SecClient::new(companies, None);
        assert_eq!(client.company_count(), 0);
        assert!(!client.has_filings_data());
    }

    #[test]
    fn test_same_day_filings_keep_input_order() {
        let mut filings = HashMap::new();
        filings.insert(
            "0000000001".to_string(),
            vec![
                filing("8-K", "2024-01-02", "first"),
                filing("8-K", "2024-03-01", "newest"),
                filing("8-K", "2024-01-02", "second"),
            ],
        );
        let client = SecClient::new(HashMap::new(), Some(filings));

        let result = client
            .list_filings("0000000001", &FilingFilter::default())
            .unwrap();
        let accessions: Vec<&str> = result.iter().map(|f| f.accession_number()).collect();
        assert_eq!(accessions, vec!["newest", "first", "second"]);
    }

    #[test]
    fn test_malformed_filing_date_is_surfaced() {
        let mut filings = HashMap::new();
        filings.insert(
            "0000000001".to_string(),
            vec![filing("10-K", "not-a-date", "x")],
        );
        let client = SecClient::new(HashMap::new(), Some(filings));

        let err = client
            .list_filings("0000000001", &FilingFilter::default())
            .unwrap_err();
        assert!(matches!(err, SecError::ValidationError { .. }));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = SecClient::from_json("{not json", None).unwrap_err();
        assert!(matches!(err, SecError::SerializationError(_)));
    }
}
