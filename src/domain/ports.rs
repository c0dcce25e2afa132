use crate::domain::model::{CompanyRecord, FilingRecord};
use crate::utils::error::Result;
use std::collections::HashMap;

pub type CompaniesData = HashMap<String, CompanyRecord>;
pub type FilingsData = HashMap<String, Vec<FilingRecord>>;

/// 提供公司目錄與申報資料的來源 (檔案、記憶體等)
pub trait DatasetSource {
    fn companies(&self) -> Result<CompaniesData>;

    /// `None` 代表沒有提供申報資料集
    fn filings(&self) -> Result<Option<FilingsData>>;
}
