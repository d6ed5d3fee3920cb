//! Uninest vendor entitlements
//!
//! Decides whether a vendor account on Uninest may manage its listings at a
//! given instant, based on the account's trial and subscription windows. The
//! web and mobile apps fetch the vendor profile from the account store, ask
//! this crate for a verdict, and either render the management views or
//! redirect.
//!
//! # Features
//!
//! - **Evaluation**: a pure, clock-free verdict over a profile snapshot
//! - **Guards**: redirect decisions for page/route guards, as data not errors
//! - **Enforcement**: `Result`-based checks for API handlers
//! - **Storage**: a pluggable profile store trait with an in-memory test impl
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use uninest_entitlements::entitlements::{VendorProfile, evaluate};
//!
//! let profile = VendorProfile {
//!     vendor_active: true,
//!     last_payment_id: Some("pay_01HZX4".to_string()),
//!     ..Default::default()
//! };
//!
//! // Payment on record and no end date: the window is open-ended
//! let verdict = evaluate(&profile, Utc::now());
//! assert!(verdict.can_manage_listings);
//! ```

pub mod entitlements;

mod config;
mod error;
mod utils;

// Re-exports for public API
pub use config::{Config, ConfigBuilder, GuardConfig, LoggingConfig};
pub use error::{EntitlementsError, Result};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging with sensible defaults
///
/// This should be called early in your application, typically in main().
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "uninest_entitlements=debug")
/// - `UNINEST_LOG_JSON`: Set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("UNINEST_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Initialize tracing with a custom configuration
pub fn init_tracing_with_config(config: &Config) {
    let env_filter = EnvFilter::new(&config.logging.level);

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
