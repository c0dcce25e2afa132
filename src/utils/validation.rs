use crate::utils::error::{Result, SecError};

pub const CIK_LENGTH: usize = 10;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// CIK 必須剛好是 10 位 ASCII 數字 (含前導零)
pub fn is_valid_cik(value: &str) -> bool {
    value.len() == CIK_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_cik(field_name: &str, value: &str) -> Result<()> {
    if !is_valid_cik(value) {
        return Err(SecError::validation(
            field_name,
            format!(
                "'{}' must be exactly {} digits, zero-padded",
                value, CIK_LENGTH
            ),
        ));
    }
    Ok(())
}

/// 將數字 CIK 補零至 10 位
pub fn pad_cik(cik: u64) -> String {
    format!("{:0width$}", cik, width = CIK_LENGTH)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SecError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SecError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SecError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SecError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
