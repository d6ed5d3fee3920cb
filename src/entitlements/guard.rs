//! Route-guard helpers for vendor management access.
//!
//! Guards never redirect and never raise: they return a decision the caller
//! branches on, and `redirect_target` turns a denial into the configured
//! destination path.

use chrono::{DateTime, Utc};

use crate::config::GuardConfig;

use super::storage::VendorStore;
use super::verdict::evaluate;

/// Result of checking vendor-management access, for use in route guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessCheckResult {
    /// Management access is allowed.
    Allowed,
    /// No vendor profile was found, or the profile lookup failed.
    NoVendorProfile,
    /// The account is not provisioned as an active vendor.
    VendorInactive,
    /// Neither the trial nor the subscription window covers this instant.
    NoActiveWindow,
}

impl AccessCheckResult {
    /// Check if access is allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// The path a denied caller should be redirected to, if any.
    ///
    /// Accounts without a profile go to login; provisioned vendors without an
    /// active window go to the billing page.
    #[must_use]
    pub fn redirect_target<'a>(&self, config: &'a GuardConfig) -> Option<&'a str> {
        match self {
            Self::Allowed => None,
            Self::NoVendorProfile => Some(config.login_path.as_str()),
            Self::VendorInactive | Self::NoActiveWindow => Some(config.billing_path.as_str()),
        }
    }
}

/// Check listing-management access for use in middleware or page guards.
///
/// A failed profile lookup is treated the same as a missing profile: the
/// caller is sent back through login rather than shown a vendor page.
#[must_use = "access check result must be used to enforce access control"]
pub async fn require_listing_management<S: VendorStore>(
    store: &S,
    vendor_id: &str,
    now: DateTime<Utc>,
) -> AccessCheckResult {
    let profile = match store.get_profile(vendor_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return AccessCheckResult::NoVendorProfile,
        Err(_) => return AccessCheckResult::NoVendorProfile,
    };

    let verdict = evaluate(&profile, now);
    if verdict.can_manage_listings {
        return AccessCheckResult::Allowed;
    }

    tracing::debug!(
        target: "uninest_entitlements::guard",
        vendor_id = %vendor_id,
        trial_active = verdict.trial_active,
        subscription_active = verdict.subscription_active,
        "Listing management denied"
    );

    if profile.vendor_active {
        AccessCheckResult::NoActiveWindow
    } else {
        AccessCheckResult::VendorInactive
    }
}
