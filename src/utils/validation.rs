use crate::utils::error::{DraftError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A team name is valid when it is non-empty and neither starts nor ends
/// with a space. Empty is the "no team name" state, not a typo to fix.
pub fn is_valid_team_name(name: &str) -> bool {
    !name.is_empty() && name == name.trim()
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DraftError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DraftError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') {
        return Err(DraftError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Expected a bare file name; use --data-dir for the directory".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DraftError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name_validity() {
        assert!(is_valid_team_name("RocketRaptors"));
        assert!(is_valid_team_name("Los  Pollos   Hermanos"));
        assert!(is_valid_team_name("x"));
        assert!(is_valid_team_name("#1 $quad!"));

        assert!(!is_valid_team_name(""));
        assert!(!is_valid_team_name(" Raptors"));
        assert!(!is_valid_team_name("Raptors "));
        assert!(!is_valid_team_name(" "));
        assert!(!is_valid_team_name("\tTabs"));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_dir", ".").is_ok());
        assert!(validate_path("data_dir", "").is_err());
        assert!(validate_path("data_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("store_file", "team_names.txt").is_ok());
        assert!(validate_file_name("store_file", "nested/team_names.txt").is_err());
        assert!(validate_file_name("store_file", "").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("fallback_salt", "salt").is_ok());
        assert!(validate_non_empty_string("fallback_salt", "   ").is_err());
    }
}
