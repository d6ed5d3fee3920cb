//! Vendor account subscription metadata.
//!
//! The profile row is owned by the account store and mutated only by the
//! billing and trial-granting collaborators; this crate reads it and derives
//! verdicts from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription and trial state for a vendor account.
///
/// Every optional field may legitimately be absent: an account that never had
/// a trial or subscription is a valid, expected state, not an error. Rows
/// predating a column's introduction simply omit it, so all fields default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProfile {
    /// Whether the account is provisioned as an active vendor at all.
    #[serde(default)]
    pub vendor_active: bool,
    /// End of the free trial window, if one was ever granted.
    #[serde(default)]
    pub trial_ends_at: Option<DateTime<Utc>>,
    /// Start of the paid subscription window, if any.
    #[serde(default)]
    pub subscription_started_at: Option<DateTime<Utc>>,
    /// End of the paid subscription window, if any.
    #[serde(default)]
    pub subscription_ends_at: Option<DateTime<Utc>>,
    /// Identifier of the last successful payment, if one was ever recorded.
    #[serde(default)]
    pub last_payment_id: Option<String>,
}

impl VendorProfile {
    /// Check if the trial window covers `now`.
    ///
    /// The boundary instant itself counts as still inside the window.
    #[must_use]
    pub fn trial_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.trial_ends_at {
            Some(end) => now <= end,
            None => false,
        }
    }

    /// Check if the subscription window covers `now`.
    ///
    /// The boundary instant itself counts as still inside the window. A
    /// profile with a recorded start date or payment but no end date is
    /// treated as inside an open-ended window; billing writes the end date
    /// when the window closes.
    #[must_use]
    pub fn subscription_window_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.subscription_ends_at {
            Some(end) => now <= end,
            None => self.subscription_started_at.is_some() || self.last_payment_id.is_some(),
        }
    }
}
