//! Input validation for entitlement operations.

use crate::error::Result;

use super::error::VendorError;

/// Maximum length for vendor IDs.
const MAX_VENDOR_ID_LENGTH: usize = 64;

/// Validate a vendor account ID.
///
/// Vendor IDs must:
/// - Not be empty
/// - Not exceed 64 characters
/// - Contain only alphanumeric characters, underscores, and hyphens
///
/// # Errors
///
/// Returns `VendorError::InvalidVendorId` if validation fails.
pub fn validate_vendor_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(VendorError::InvalidVendorId {
            id: id.to_string(),
            reason: "vendor_id cannot be empty".to_string(),
        }
        .into());
    }

    if id.len() > MAX_VENDOR_ID_LENGTH {
        return Err(VendorError::InvalidVendorId {
            id: format!("{}...", id.chars().take(MAX_VENDOR_ID_LENGTH).collect::<String>()),
            reason: format!(
                "vendor_id exceeds maximum length of {}",
                MAX_VENDOR_ID_LENGTH
            ),
        }
        .into());
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(VendorError::InvalidVendorId {
            id: id.chars().filter(|c| c.is_ascii_graphic()).collect(),
            reason: "vendor_id contains invalid characters (only alphanumeric, underscore, and hyphen allowed)".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        validate_vendor_id("vnd_123").unwrap();
        validate_vendor_id("550e8400-e29b-41d4-a716-446655440000").unwrap();
        validate_vendor_id("a").unwrap();
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = validate_vendor_id("").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_overlong_id_rejected() {
        let id = "v".repeat(MAX_VENDOR_ID_LENGTH + 1);
        let err = validate_vendor_id(&id).unwrap_err();
        assert!(err.to_string().contains("maximum length"));
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert!(validate_vendor_id("vnd<script>").is_err());
        assert!(validate_vendor_id("vnd 123").is_err());
        assert!(validate_vendor_id("vnd/123").is_err());
    }
}
