//! Entitlements manager for checking vendor access.
//!
//! Wraps a [`VendorStore`](super::storage::VendorStore) and derives verdicts
//! from stored profiles. Verdicts are recomputed on every call and never
//! cached, so a billing update is visible to the very next check.

use chrono::{DateTime, Utc};

use crate::error::Result;

use super::error::VendorError;
use super::storage::VendorStore;
use super::validation::validate_vendor_id;
use super::verdict::{EntitlementVerdict, evaluate};

/// Entitlements manager for deriving vendor verdicts from a store.
pub struct EntitlementsManager<S: VendorStore> {
    store: S,
}

impl<S: VendorStore> EntitlementsManager<S> {
    /// Create a new entitlements manager.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the verdict for a vendor at an explicit instant.
    ///
    /// An account without a profile gets the all-false verdict rather than an
    /// error; page guards treat the two identically.
    pub async fn verdict(&self, vendor_id: &str, now: DateTime<Utc>) -> Result<EntitlementVerdict> {
        match self.store.get_profile(vendor_id).await? {
            Some(profile) => Ok(evaluate(&profile, now)),
            None => Ok(EntitlementVerdict::denied()),
        }
    }

    /// Check if a vendor may manage listings at an explicit instant.
    pub async fn can_manage_listings(&self, vendor_id: &str, now: DateTime<Utc>) -> Result<bool> {
        Ok(self.verdict(vendor_id, now).await?.can_manage_listings)
    }

    /// Get the verdict, failing if the vendor has no profile.
    ///
    /// Use this from API handlers that want a not-found response rather than
    /// a redirect.
    pub async fn require_verdict(
        &self,
        vendor_id: &str,
        now: DateTime<Utc>,
    ) -> Result<EntitlementVerdict> {
        validate_vendor_id(vendor_id)?;

        let profile = self
            .store
            .get_profile(vendor_id)
            .await?
            .ok_or_else(|| VendorError::NoVendorProfile {
                vendor_id: vendor_id.to_string(),
            })?;

        Ok(evaluate(&profile, now))
    }

    /// Ensure a vendor may manage listings, failing with the denial reason.
    pub async fn ensure_can_manage(&self, vendor_id: &str, now: DateTime<Utc>) -> Result<()> {
        validate_vendor_id(vendor_id)?;

        let profile = self
            .store
            .get_profile(vendor_id)
            .await?
            .ok_or_else(|| VendorError::NoVendorProfile {
                vendor_id: vendor_id.to_string(),
            })?;

        let verdict = evaluate(&profile, now);
        if verdict.can_manage_listings {
            return Ok(());
        }

        if profile.vendor_active {
            Err(VendorError::NoActiveWindow {
                vendor_id: vendor_id.to_string(),
            }
            .into())
        } else {
            Err(VendorError::VendorInactive {
                vendor_id: vendor_id.to_string(),
            }
            .into())
        }
    }
}
