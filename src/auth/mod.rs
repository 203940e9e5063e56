//! Authentication provider seam.
//!
//! The sign-in screen only knows the [`AuthProvider`] trait. The shipped
//! implementation talks to an Identity Toolkit compatible REST endpoint;
//! tests substitute in-memory providers.

pub mod identity_toolkit;

pub use identity_toolkit::IdentityToolkitProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity returned by a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned user id
    pub id: String,
    pub email: String,
}

/// Why a sign-in attempt was rejected.
///
/// The UI treats every variant the same way; the detail is kept for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The service answered and refused the credentials
    #[error("sign-in rejected by provider: {code}")]
    Rejected { code: String },
    /// The request never produced a usable HTTP response
    #[error("authentication service unreachable: {0}")]
    Transport(String),
    /// The service answered with something we could not interpret
    #[error("unexpected response from authentication service: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Provider error code, when the service supplied one
    pub fn code(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { code } => Some(code),
            _ => None,
        }
    }
}

/// A remote service that verifies email/password credentials
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let rejected = AuthError::Rejected {
            code: "INVALID_PASSWORD".to_string(),
        };
        assert_eq!(rejected.code(), Some("INVALID_PASSWORD"));
        assert_eq!(AuthError::Transport("timed out".to_string()).code(), None);
    }

    #[test]
    fn test_error_display_hides_nothing_sensitive() {
        let rejected = AuthError::Rejected {
            code: "EMAIL_NOT_FOUND".to_string(),
        };
        assert_eq!(
            rejected.to_string(),
            "sign-in rejected by provider: EMAIL_NOT_FOUND"
        );
    }
}
