//! Entitlement evaluation.
//!
//! The verdict is derived from a profile snapshot and an explicit instant,
//! never from an ambient clock, so callers control time completely.

use chrono::{DateTime, Utc};

use super::profile::VendorProfile;

/// Outcome of evaluating a vendor profile at a point in time.
///
/// Computed fresh on every call and never persisted or cached, so it always
/// reflects the profile snapshot it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct EntitlementVerdict {
    /// Whether the free trial window covers the evaluated instant.
    pub trial_active: bool,
    /// Whether the paid subscription window covers the evaluated instant.
    pub subscription_active: bool,
    /// Whether the account may manage listings at the evaluated instant.
    pub can_manage_listings: bool,
}

impl EntitlementVerdict {
    /// The all-false verdict, used when no vendor profile exists.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            trial_active: false,
            subscription_active: false,
            can_manage_listings: false,
        }
    }
}

/// Evaluate a vendor profile at an explicit instant.
///
/// Management access requires the vendor flag plus at least one active
/// window. Pure function of its arguments: no I/O, no mutation, no logging,
/// and total over every combination of present and absent profile fields.
pub fn evaluate(profile: &VendorProfile, now: DateTime<Utc>) -> EntitlementVerdict {
    let trial_active = profile.trial_active_at(now);
    let subscription_active = profile.subscription_window_active_at(now);

    EntitlementVerdict {
        trial_active,
        subscription_active,
        can_manage_listings: profile.vendor_active && (trial_active || subscription_active),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_inactive_flag_denies_despite_live_trial() {
        let now = ts("2025-06-01T00:00:00Z");
        let profile = VendorProfile {
            vendor_active: false,
            trial_ends_at: Some(now + Duration::days(7)),
            ..Default::default()
        };

        let verdict = evaluate(&profile, now);
        // The intermediate facts still surface; only the final gate closes
        assert!(verdict.trial_active);
        assert!(!verdict.can_manage_listings);
    }

    #[test]
    fn test_inactive_flag_denies_despite_live_subscription() {
        let now = ts("2025-06-01T00:00:00Z");
        let profile = VendorProfile {
            vendor_active: false,
            subscription_started_at: Some(ts("2025-01-01T00:00:00Z")),
            last_payment_id: Some("pay_01HZX4".to_string()),
            ..Default::default()
        };

        let verdict = evaluate(&profile, now);
        assert!(verdict.subscription_active);
        assert!(!verdict.can_manage_listings);
    }

    #[test]
    fn test_trial_alone_grants_management() {
        let now = ts("2025-06-01T00:00:00Z");
        let profile = VendorProfile {
            vendor_active: true,
            trial_ends_at: Some(now),
            ..Default::default()
        };

        let verdict = evaluate(&profile, now);
        assert!(verdict.trial_active);
        assert!(!verdict.subscription_active);
        assert!(verdict.can_manage_listings);
    }

    #[test]
    fn test_trial_expires_one_millisecond_past_boundary() {
        let end = ts("2025-06-01T00:00:00Z");
        let profile = VendorProfile {
            vendor_active: true,
            trial_ends_at: Some(end),
            ..Default::default()
        };

        assert!(evaluate(&profile, end).can_manage_listings);
        assert!(!evaluate(&profile, end + Duration::milliseconds(1)).can_manage_listings);
    }

    #[test]
    fn test_open_ended_subscription_grants_management_far_in_the_future() {
        let profile = VendorProfile {
            vendor_active: true,
            subscription_started_at: Some(ts("2024-01-01T00:00:00Z")),
            ..Default::default()
        };

        let verdict = evaluate(&profile, ts("2030-01-01T00:00:00Z"));
        assert!(!verdict.trial_active);
        assert!(verdict.subscription_active);
        assert!(verdict.can_manage_listings);
    }

    #[test]
    fn test_expired_trial_with_no_subscription_denies() {
        let profile = VendorProfile {
            vendor_active: true,
            trial_ends_at: Some(ts("2024-01-01T00:00:00Z")),
            ..Default::default()
        };

        let verdict = evaluate(&profile, ts("2024-06-01T00:00:00Z"));
        assert!(!verdict.trial_active);
        assert!(!verdict.subscription_active);
        assert!(!verdict.can_manage_listings);
    }

    #[test]
    fn test_flagged_vendor_with_no_windows_denies() {
        let profile = VendorProfile {
            vendor_active: true,
            ..Default::default()
        };

        let verdict = evaluate(&profile, ts("2025-01-01T00:00:00Z"));
        assert!(!verdict.can_manage_listings);
    }

    #[test]
    fn test_same_inputs_same_verdict() {
        let now = ts("2025-06-01T00:00:00Z");
        let profile = VendorProfile {
            vendor_active: true,
            trial_ends_at: Some(now + Duration::days(3)),
            last_payment_id: Some("pay_01HZX4".to_string()),
            ..Default::default()
        };

        assert_eq!(evaluate(&profile, now), evaluate(&profile, now));
    }

    #[test]
    fn test_denied_verdict_is_all_false() {
        let verdict = EntitlementVerdict::denied();
        assert!(!verdict.trial_active);
        assert!(!verdict.subscription_active);
        assert!(!verdict.can_manage_listings);
    }
}
