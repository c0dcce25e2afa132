use crate::utils::error::{Result, SecError};
use crate::utils::validation::validate_cik;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 1000;
pub const FILING_DATE_FORMAT: &str = "%Y-%m-%d";

/// `company_tickers.json` 中的一筆原始記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub cik_str: u64,
    pub ticker: String,
    pub title: String,
}

/// 某個 CIK 底下的一筆原始申報記錄，日期仍為 ISO 字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingRecord {
    pub company_name: String,
    pub form_type: String,
    pub filing_date: String,
    pub accession_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    ticker: String,
    cik: String,
    name: String,
}

impl Company {
    /// Ticker is upper-cased; CIK must be 10 zero-padded digits.
    pub fn new(ticker: &str, cik: &str, name: &str) -> Result<Self> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(SecError::validation("ticker", "ticker cannot be empty"));
        }
        validate_cik("cik", cik)?;

        Ok(Self {
            ticker: ticker.to_uppercase(),
            cik: cik.to_string(),
            name: name.to_string(),
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn cik(&self) -> &str {
        &self.cik
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filing {
    cik: String,
    company_name: String,
    form_type: String,
    filing_date: NaiveDate,
    accession_number: String,
}

impl Filing {
    pub fn new(
        cik: &str,
        company_name: &str,
        form_type: &str,
        filing_date: NaiveDate,
        accession_number: &str,
    ) -> Result<Self> {
        validate_cik("cik", cik)?;

        Ok(Self {
            cik: cik.to_string(),
            company_name: company_name.to_string(),
            form_type: form_type.to_string(),
            filing_date,
            accession_number: accession_number.to_string(),
        })
    }

    /// 從原始記錄建立，同時解析 ISO 日期字串
    pub fn from_record(cik: &str, record: &FilingRecord) -> Result<Self> {
        let filing_date = NaiveDate::parse_from_str(record.filing_date.trim(), FILING_DATE_FORMAT)
            .map_err(|e| {
                SecError::validation(
                    "filing_date",
                    format!("'{}' is not a valid date: {}", record.filing_date, e),
                )
            })?;

        Self::new(
            cik,
            &record.company_name,
            &record.form_type,
            filing_date,
            &record.accession_number,
        )
    }

    pub fn cik(&self) -> &str {
        &self.cik
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    pub fn filing_date(&self) -> NaiveDate {
        self.filing_date
    }

    pub fn accession_number(&self) -> &str {
        &self.accession_number
    }
}

/// Query options for `SecClient::list_filings`.
///
/// Construct through [`FilingFilter::new`] or [`FilingFilter::builder`]; both
/// reject an inverted date range and a limit outside `1..=1000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingFilter {
    form_types: Option<Vec<String>>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    limit: usize,
}

impl FilingFilter {
    pub fn new(
        form_types: Option<Vec<String>>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        limit: i64,
    ) -> Result<Self> {
        if let (Some(from), Some(to)) = (date_from, date_to) {
            if from > to {
                return Err(SecError::validation(
                    "date_from",
                    format!("date_from ({}) must not be after date_to ({})", from, to),
                ));
            }
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(SecError::validation(
                "limit",
                format!("{} is out of range, must be between 1 and {}", limit, MAX_LIMIT),
            ));
        }

        Ok(Self {
            form_types,
            date_from,
            date_to,
            limit: limit as usize,
        })
    }

    pub fn builder() -> FilingFilterBuilder {
        FilingFilterBuilder::default()
    }

    pub fn form_types(&self) -> Option<&[String]> {
        self.form_types.as_deref()
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 檢查單筆申報是否符合表單類型與日期區間
    pub fn matches(&self, filing: &Filing) -> bool {
        if let Some(form_types) = &self.form_types {
            let target = filing.form_type().to_uppercase();
            let wanted = form_types
                .iter()
                .any(|form_type| form_type.to_uppercase() == target);
            if !wanted {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if filing.filing_date() < from {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if filing.filing_date() > to {
                return false;
            }
        }

        true
    }
}

impl Default for FilingFilter {
    fn default() -> Self {
        Self {
            form_types: None,
            date_from: None,
            date_to: None,
            limit: DEFAULT_LIMIT as usize,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilingFilterBuilder {
    form_types: Option<Vec<String>>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    limit: i64,
}

impl Default for FilingFilterBuilder {
    fn default() -> Self {
        Self {
            form_types: None,
            date_from: None,
            date_to: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl FilingFilterBuilder {
    pub fn form_types<I, S>(mut self, form_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.form_types = Some(form_types.into_iter().map(Into::into).collect());
        self
    }

    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(self) -> Result<FilingFilter> {
        FilingFilter::new(self.form_types, self.date_from, self.date_to, self.limit)
    }
}
