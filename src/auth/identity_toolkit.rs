use super::{AuthError, AuthProvider, AuthUser};
use crate::config::AuthConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Production endpoint of the Identity Toolkit REST API
pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

/// Email/password sign-in against an Identity Toolkit compatible service
/// (Firebase Authentication or its local emulator)
#[derive(Debug, Clone)]
pub struct IdentityToolkitProvider {
    http_client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl IdentityToolkitProvider {
    /// Create a provider for `endpoint` using the project's web API key
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("signin/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Build a provider from the `[auth]` config section
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let api_key = config
            .resolved_api_key()
            .context("No API key configured. Set auth.api_key in the config file or SIGNIN_API_KEY")?;
        Self::new(
            &config.endpoint,
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn sign_in_url(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithPassword?key={}",
            self.endpoint, self.api_key
        )
    }
}

/// Pull the provider's error code out of an error body.
///
/// Codes sometimes carry a human explanation after " : "
/// (e.g. `TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account ...`).
fn parse_error_code(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    let code = envelope
        .error
        .message
        .split(" : ")
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    (!code.is_empty()).then_some(code)
}

#[async_trait]
impl AuthProvider for IdentityToolkitProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        info!("Sending sign-in request to {}", self.endpoint);
        debug!("Signing in as {}", email);

        let request = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = self
            .http_client
            .post(self.sign_in_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the API key
                let e = e.without_url();
                warn!("Sign-in request failed: {}", e);
                AuthError::Transport(e.to_string())
            })?;

        let status = response.status();
        info!("Sign-in response status: {}", status);

        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            warn!("Failed to read sign-in response body: {}", e);
            AuthError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            return Err(match parse_error_code(&body) {
                Some(code) => {
                    warn!("Sign-in rejected: {}", code);
                    AuthError::Rejected { code }
                }
                None => {
                    warn!("Sign-in failed with HTTP {} and no error code", status);
                    AuthError::InvalidResponse(format!("HTTP {}", status))
                }
            });
        }

        let user: SignInResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Malformed sign-in response: {}", e);
            AuthError::InvalidResponse(e.to_string())
        })?;

        Ok(AuthUser {
            id: user.local_id,
            email: user.email,
        })
    }
}
