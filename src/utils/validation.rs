use crate::utils::error::{Result, ScourgifyError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const CSV_SUFFIX: &str = ".csv";

/// Exactly two positional paths: input then output.
pub fn validate_arg_count(given: usize) -> Result<()> {
    match given {
        0 | 1 => Err(ScourgifyError::too_few_arguments()),
        2 => Ok(()),
        _ => Err(ScourgifyError::too_many_arguments()),
    }
}

/// Case-sensitive literal suffix check, no extension parsing.
pub fn validate_csv_extension(path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.ends_with(CSV_SUFFIX) {
        Ok(())
    } else {
        Err(ScourgifyError::not_a_csv(&raw))
    }
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return Err(ScourgifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(ScourgifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Delimiters must be a single byte other than a quote or line break.
pub fn validate_delimiter(field_name: &str, value: &str) -> Result<u8> {
    let bytes = value.as_bytes();
    let reject = |reason: &str| ScourgifyError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match bytes {
        [b'"'] | [b'\n'] | [b'\r'] => Err(reject("Delimiter cannot be a quote or line break")),
        [b] => Ok(*b),
        _ => Err(reject("Delimiter must be exactly one character")),
    }
}
