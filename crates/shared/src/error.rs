//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Caller-facing error taxonomy.
///
/// Domain errors from the core crate are folded into these kinds so that
/// the surrounding application can pick a distinct message for each.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request itself is malformed (wrong currency, zero amount).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The bank rejected the PIN/card pair.
    #[error("Authorization failed: {0}")]
    Unauthorized(String),

    /// The request is valid but cannot be served (e.g. notes unavailable).
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Internal consistency failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns a stable error code for presentation layers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the caller can recover by changing the request.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Unauthorized(_) | Self::BusinessRule(_)
        )
    }
}
