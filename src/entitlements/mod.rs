//! Vendor entitlements.
//!
//! Decides whether a vendor account may manage listings at a given instant,
//! from the account's trial and subscription windows.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use uninest_entitlements::entitlements::{EntitlementsManager, require_listing_management};
//!
//! let manager = EntitlementsManager::new(store);
//!
//! // API handlers: error with the denial reason
//! manager.ensure_can_manage(&vendor_id, Utc::now()).await?;
//!
//! // Page guards: branch on the decision
//! let check = require_listing_management(&store, &vendor_id, Utc::now()).await;
//! if let Some(path) = check.redirect_target(&config.guard) {
//!     return redirect(path);
//! }
//! ```

pub mod error;
pub mod guard;
pub mod manager;
pub mod profile;
pub mod storage;
pub mod validation;
pub mod verdict;

// Profile exports
pub use profile::VendorProfile;

// Verdict exports
pub use verdict::{EntitlementVerdict, evaluate};

// Storage exports
pub use storage::VendorStore;

// Guard exports
pub use guard::{AccessCheckResult, require_listing_management};

// Manager exports
pub use manager::EntitlementsManager;

// Validation exports
pub use validation::validate_vendor_id;

// Error exports
pub use error::VendorError;

// Test exports
#[cfg(any(test, feature = "test-entitlements"))]
pub use storage::test::InMemoryVendorStore;
