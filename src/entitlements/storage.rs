//! Storage trait for vendor profiles.
//!
//! Implement this trait against your account store. An in-memory
//! implementation is provided for testing.

use async_trait::async_trait;

use crate::error::Result;

use super::profile::VendorProfile;

/// Trait for fetching and persisting vendor profiles.
///
/// The evaluator only ever reads; the write operations exist for the billing
/// and trial-granting collaborators (and for seeding test fixtures).
#[async_trait]
pub trait VendorStore: Send + Sync {
    /// Get the vendor profile for an account.
    async fn get_profile(&self, vendor_id: &str) -> Result<Option<VendorProfile>>;

    /// Save/update the vendor profile for an account.
    async fn save_profile(&self, vendor_id: &str, profile: &VendorProfile) -> Result<()>;

    /// Delete the vendor profile for an account.
    async fn delete_profile(&self, vendor_id: &str) -> Result<()>;
}

/// In-memory vendor store for testing.
#[cfg(any(test, feature = "test-entitlements"))]
pub mod test {
    use std::collections::HashMap;
    use std::sync::{Arc, RwLock};

    use super::*;

    /// In-memory vendor store for testing.
    ///
    /// Wraps data in Arc for cheap cloning.
    #[derive(Default, Clone)]
    pub struct InMemoryVendorStore {
        profiles: Arc<RwLock<HashMap<String, VendorProfile>>>,
    }

    impl InMemoryVendorStore {
        /// Create a new in-memory store.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all profiles (for testing).
        pub fn get_all_profiles(&self) -> HashMap<String, VendorProfile> {
            self.profiles.read().unwrap().clone()
        }
    }

    #[async_trait]
    impl VendorStore for InMemoryVendorStore {
        async fn get_profile(&self, vendor_id: &str) -> Result<Option<VendorProfile>> {
            Ok(self.profiles.read().unwrap().get(vendor_id).cloned())
        }

        async fn save_profile(&self, vendor_id: &str, profile: &VendorProfile) -> Result<()> {
            self.profiles
                .write()
                .unwrap()
                .insert(vendor_id.to_string(), profile.clone());
            Ok(())
        }

        async fn delete_profile(&self, vendor_id: &str) -> Result<()> {
            self.profiles.write().unwrap().remove(vendor_id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test::InMemoryVendorStore;
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store() {
        let store = InMemoryVendorStore::new();

        assert!(store.get_profile("vnd_123").await.unwrap().is_none());

        let profile = VendorProfile {
            vendor_active: true,
            last_payment_id: Some("pay_01HZX4".to_string()),
            ..Default::default()
        };

        store.save_profile("vnd_123", &profile).await.unwrap();

        let loaded = store.get_profile("vnd_123").await.unwrap().unwrap();
        assert!(loaded.vendor_active);
        assert_eq!(loaded.last_payment_id.as_deref(), Some("pay_01HZX4"));

        store.delete_profile("vnd_123").await.unwrap();
        assert!(store.get_profile("vnd_123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_store_clones_share_data() {
        let store = InMemoryVendorStore::new();
        let clone = store.clone();

        let profile = VendorProfile {
            vendor_active: true,
            ..Default::default()
        };
        store.save_profile("vnd_abc", &profile).await.unwrap();

        assert!(clone.get_profile("vnd_abc").await.unwrap().is_some());
        assert_eq!(clone.get_all_profiles().len(), 1);
    }
}
