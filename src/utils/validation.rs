use crate::utils::error::{ConfidentError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConfidentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConfidentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfidentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();

    for value in values {
        if !seen.insert(value) {
            return Err(ConfidentError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value appears more than once".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_not_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(ConfidentError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("report", "./report.txt").is_ok());
        assert!(validate_path("report", "").is_err());
        assert!(validate_path("report", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("checks.name", "disk-free").is_ok());
        assert!(validate_non_empty_string("checks.name", "   ").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("checks.name", ["a", "b"]).is_ok());

        let err = validate_unique("checks.name", ["a", "b", "a"]).unwrap_err();
        assert!(matches!(
            err,
            ConfidentError::InvalidConfigValueError { ref value, .. } if value == "a"
        ));
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("checks", &[1]).is_ok());
        assert!(validate_not_empty::<u8>("checks", &[]).is_err());
    }
}
