/// The main error type for Uninest entitlement operations
///
/// The evaluator itself is total and never fails; these errors belong to the
/// surrounding collaborators (profile lookups, configuration, serialization).
#[derive(Debug, thiserror::Error)]
pub enum EntitlementsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl EntitlementsError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias for entitlement operations
pub type Result<T> = std::result::Result<T, EntitlementsError>;

// Common error type conversions

impl From<serde_json::Error> for EntitlementsError {
    fn from(err: serde_json::Error) -> Self {
        // Classify based on error category
        if err.is_data() || err.is_syntax() || err.is_eof() {
            EntitlementsError::BadRequest(format!("JSON error: {}", err))
        } else {
            // IO errors are internal
            EntitlementsError::Internal(format!("JSON serialization error: {}", err))
        }
    }
}
