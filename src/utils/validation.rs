use crate::domain::model::Pairing;
use crate::utils::error::{BridgeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BridgeError::ValidationError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BridgeError::ValidationError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_pairings(field_name: &str, pairings: &[Pairing]) -> Result<()> {
    if pairings.is_empty() {
        return Err(BridgeError::ValidationError {
            field: field_name.to_string(),
            reason: "At least one pairing is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "pairings.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "   ").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_pairings() {
        assert!(validate_pairings("pairings", &Pairing::defaults()).is_ok());
        assert!(validate_pairings("pairings", &[]).is_err());
    }
}
