use serde::{Deserialize, Serialize};

use crate::utils::get_env_with_prefix;

/// Main configuration for the entitlements crate
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub guard: GuardConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_json")]
    pub json: bool,
}

/// Redirect destinations for denied vendor-management access.
///
/// The guard itself never redirects; it returns a decision, and callers use
/// these paths to build the actual redirect response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GuardConfig {
    /// Where to send callers with no vendor profile (or no session at all).
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Where to send provisioned vendors whose trial and subscription have lapsed.
    #[serde(default = "default_billing_path")]
    pub billing_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: default_json(),
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            billing_path: default_billing_path(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    false
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_billing_path() -> String {
    "/vendor/subscription".to_string()
}

/// Builder for Config with environment variable support
#[must_use = "builder does nothing until you call build()"]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn with_json_logging(mut self, enabled: bool) -> Self {
        self.config.logging.json = enabled;
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.config.guard.login_path = path.into();
        self
    }

    pub fn with_billing_path(mut self, path: impl Into<String>) -> Self {
        self.config.guard.billing_path = path.into();
        self
    }

    /// Load configuration from environment variables with UNINEST_ prefix
    pub fn from_env(mut self) -> Self {
        if let Some(level) = get_env_with_prefix("LOG_LEVEL") {
            self.config.logging.level = level;
        }
        if let Some(json) = get_env_with_prefix("LOG_JSON") {
            self.config.logging.json = json.parse().unwrap_or(false);
        }
        if let Some(path) = get_env_with_prefix("GUARD_LOGIN_PATH") {
            self.config.guard.login_path = path;
        }
        if let Some(path) = get_env_with_prefix("GUARD_BILLING_PATH") {
            self.config.guard.billing_path = path;
        }
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.guard.login_path, "/login");
        assert_eq!(config.guard.billing_path, "/vendor/subscription");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_log_level("debug")
            .with_json_logging(true)
            .with_login_path("/auth/sign-in")
            .with_billing_path("/vendor/upgrade")
            .build();

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.guard.login_path, "/auth/sign-in");
        assert_eq!(config.guard.billing_path, "/vendor/upgrade");
    }

    #[test]
    fn test_from_env() {
        unsafe {
            std::env::set_var("UNINEST_GUARD_LOGIN_PATH", "/welcome");
        }
        let config = ConfigBuilder::new().from_env().build();
        assert_eq!(config.guard.login_path, "/welcome");
        unsafe {
            std::env::remove_var("UNINEST_GUARD_LOGIN_PATH");
        }
    }

    #[test]
    fn test_deserialize_partial() {
        // Omitted fields fall back to their defaults
        let config: Config = serde_json::from_str(
            r#"{"logging": {"level": "warn"}, "guard": {"billing_path": "/vendor/plans"}}"#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert_eq!(config.guard.login_path, "/login");
        assert_eq!(config.guard.billing_path, "/vendor/plans");
    }
}
