//! Entitlement-specific error types.
//!
//! The evaluator itself is total and never errors; these types cover the
//! surrounding profile lookups and enforcement helpers, and can be converted
//! to `EntitlementsError` for transport layers.

use std::fmt;

/// Vendor entitlement errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorError {
    /// The vendor ID is invalid.
    InvalidVendorId { id: String, reason: String },
    /// No vendor profile found for the account.
    NoVendorProfile { vendor_id: String },
    /// The account is not provisioned as an active vendor.
    VendorInactive { vendor_id: String },
    /// Neither the trial nor the subscription window is active.
    NoActiveWindow { vendor_id: String },
    /// An unexpected internal error occurred.
    Internal { message: String },
}

impl fmt::Display for VendorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVendorId { id, reason } => {
                write!(f, "Invalid vendor ID '{}': {}", id, reason)
            }
            Self::NoVendorProfile { vendor_id } => {
                write!(f, "No vendor profile found for '{}'", vendor_id)
            }
            Self::VendorInactive { vendor_id } => {
                write!(f, "Vendor account '{}' is not active", vendor_id)
            }
            Self::NoActiveWindow { vendor_id } => {
                write!(
                    f,
                    "Vendor '{}' has no active trial or subscription window",
                    vendor_id
                )
            }
            Self::Internal { message } => {
                write!(f, "Internal entitlement error: {}", message)
            }
        }
    }
}

impl std::error::Error for VendorError {}

impl From<VendorError> for crate::error::EntitlementsError {
    fn from(err: VendorError) -> Self {
        match &err {
            VendorError::NoVendorProfile { .. } => {
                crate::error::EntitlementsError::NotFound(err.to_string())
            }

            // Subscription state issues are a permissions problem, not a
            // missing-resource problem
            VendorError::VendorInactive { .. } | VendorError::NoActiveWindow { .. } => {
                crate::error::EntitlementsError::Forbidden(err.to_string())
            }

            VendorError::InvalidVendorId { .. } => {
                crate::error::EntitlementsError::BadRequest(err.to_string())
            }

            VendorError::Internal { .. } => {
                crate::error::EntitlementsError::Internal(err.to_string())
            }
        }
    }
}

impl VendorError {
    /// Check if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }

    /// Check if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}
