//! HTTP client for the remote registration endpoint
//!
//! Speaks the endpoint's JSON contract: the field set goes out as the POST
//! body, and both accepted and rejected responses carry a `message` field
//! that is surfaced to the user verbatim.

use crate::config::TuiConfig;
use crate::state::FieldSet;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::traits::RegistrationApi;

/// Default registration endpoint
pub const DEFAULT_ENDPOINT: &str = "https://webapis.bloomtechdev.com/registration";

/// Environment variable overriding the endpoint URL
pub const ENDPOINT_ENV_VAR: &str = "REGFORM_ENDPOINT";

/// Errors from talking to the registration endpoint
///
/// Rejected registrations are not errors; they are a normal
/// [`SubmitOutcome`]. These variants cover the no-usable-response cases.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to registration endpoint failed: {0}")]
    Transport(reqwest::Error),
    #[error("registration endpoint returned an unreadable body: {0}")]
    MalformedResponse(reqwest::Error),
}

/// What the endpoint said about a submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Registration accepted; carries the server's success message
    Accepted(String),
    /// Registration rejected (e.g. duplicate username); carries the
    /// server's failure message
    Rejected(String),
}

/// JSON body shape shared by accepted and rejected responses
#[derive(Debug, Deserialize)]
struct ServerMessage {
    message: String,
}

/// Client for the registration endpoint
pub struct RegistrationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RegistrationClient {
    /// Create a client pointed at the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client using the configured endpoint
    ///
    /// The environment variable wins over the config file, which wins over
    /// the built-in default.
    pub fn from_config(config: &TuiConfig) -> Self {
        let env_override = std::env::var(ENDPOINT_ENV_VAR).ok();
        Self::new(resolve_endpoint(env_override, config))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn resolve_endpoint(env_override: Option<String>, config: &TuiConfig) -> String {
    env_override
        .filter(|url| !url.is_empty())
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn register(&self, fields: &FieldSet) -> Result<SubmitOutcome> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(fields)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if status.is_success() {
            let body: ServerMessage = response
                .json()
                .await
                .map_err(ApiError::MalformedResponse)?;
            Ok(SubmitOutcome::Accepted(body.message))
        } else {
            let body = response.bytes().await.unwrap_or_default();
            Ok(SubmitOutcome::Rejected(rejection_message(status, &body)))
        }
    }
}

/// Map a rejection response to the message shown in the failure banner
///
/// A rejection body without a readable `message` still surfaces as a
/// rejection rather than a fault.
fn rejection_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ServerMessage>(body)
        .map(|body| body.message)
        .unwrap_or_else(|_| format!("registration failed with status {status}"))
}
