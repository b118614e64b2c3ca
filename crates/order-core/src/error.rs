//! # Order Error Types
//!
//! Typed error handling for the order-flow service.
//! All ledger and gateway operations return `Result<T, OrderError>`.

use thiserror::Error;

/// Core error type for all order operations
#[derive(Debug, Error)]
pub enum OrderError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Ledger (persistence) failure
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// Payment gateway API error
    #[error("Gateway error [{gateway}]: {message}")]
    Gateway { gateway: String, message: String },

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl OrderError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::Configuration(_) => 500,
            OrderError::InvalidRequest(_) => 400,
            OrderError::Ledger(_) => 500,
            OrderError::Gateway { .. } => 502,
            OrderError::Network(_) => 503,
            OrderError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for order operations
pub type OrderResult<T> = Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(OrderError::InvalidRequest("test".into()).status_code(), 400);
        assert_eq!(OrderError::Ledger("down".into()).status_code(), 500);
        assert_eq!(
            OrderError::Gateway {
                gateway: "stripe".into(),
                message: "boom".into()
            }
            .status_code(),
            502
        );
        assert_eq!(OrderError::Network("timeout".into()).status_code(), 503);
    }

    #[test]
    fn test_display() {
        let err = OrderError::Gateway {
            gateway: "stripe".into(),
            message: "card declined".into(),
        };
        assert_eq!(err.to_string(), "Gateway error [stripe]: card declined");
    }
}
