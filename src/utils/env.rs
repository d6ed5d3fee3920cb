/// Get environment variable with UNINEST_ prefix, falling back to unprefixed version
///
/// This helper function checks for `UNINEST_{key}` first, then falls back to `{key}`
/// for compatibility with standard environment variable naming.
///
/// # Examples
///
/// ```rust,ignore
/// use uninest_entitlements::utils::get_env_with_prefix;
///
/// // Checks UNINEST_LOG_LEVEL first, then LOG_LEVEL
/// let level = get_env_with_prefix("LOG_LEVEL");
/// ```
pub fn get_env_with_prefix(key: &str) -> Option<String> {
    std::env::var(format!("UNINEST_{}", key))
        .or_else(|_| std::env::var(key))
        .ok()
}
