//! Shared error type across itemd crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// No item with the requested id.
    NotFound,
    /// Request body did not match the expected shape (framework rejection).
    Validation,
    /// Configuration rejected at startup.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Validation => "VALIDATION",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ItemdError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ItemdError {
    #[error("item {0} not found")]
    NotFound(u64),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ItemdError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ItemdError::NotFound(_) => ClientCode::NotFound,
            ItemdError::BadConfig(_) => ClientCode::BadConfig,
            ItemdError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            ItemdError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ItemdError::NotFound(3).client_code().as_str(), "NOT_FOUND");
        assert_eq!(ItemdError::Internal("x".into()).client_code().as_str(), "INTERNAL");
        assert_eq!(ItemdError::UnsupportedVersion.client_code(), ClientCode::UnsupportedVersion);
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(ItemdError::NotFound(42).to_string(), "item 42 not found");
    }
}
