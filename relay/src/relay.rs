//! Forwarding of credentials to the identity provider's userinfo endpoint

use crate::error::RelayError;
use anyhow::{Context, Result};
use http::HeaderValue;
use http::header::AUTHORIZATION;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Userinfo endpoint of the passwordless.id identity provider
pub const PASSWORDLESS_USERINFO_URL: &str = "https://api.passwordless.id/openid/userinfo";

/// Relays userinfo requests to an OpenID Connect provider
///
/// Holds a single pooled http client shared by all inbound requests.
#[derive(Debug, Clone)]
pub struct UserInfoRelay {
    client: reqwest::Client,
    userinfo_url: Url,
}

impl UserInfoRelay {
    /// Creates a relay targeting `userinfo_url`.
    ///
    /// Without `timeout` the http client's defaults apply.
    pub fn new(userinfo_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().with_context(|| "building http client")?;
        Ok(Self {
            client,
            userinfo_url,
        })
    }

    pub fn userinfo_url(&self) -> &Url {
        &self.userinfo_url
    }

    /// Forwards `authorization` to the userinfo endpoint and returns the decoded body.
    ///
    /// Single attempt, no retry. The body is returned whatever the upstream
    /// status code: a rejected token yields the provider's error object.
    pub async fn get_user_info(&self, authorization: &HeaderValue) -> Result<Value, RelayError> {
        // The forwarded token is short lived. Callers wanting more than a one-off
        // lookup should cache the user info and establish their own session
        // rather than repeating this request.
        let response = self
            .client
            .get(self.userinfo_url.clone())
            .header(AUTHORIZATION, authorization.clone())
            .send()
            .await
            .map_err(RelayError::Unreachable)?;

        let status = response.status();
        // Non-success statuses are relayed as a successful response. Whether they
        // should map to a matching status for the caller is an open question.
        if !status.is_success() {
            warn!(
                "userinfo endpoint answered status={status} url={}",
                self.userinfo_url
            );
        }

        let body = response.bytes().await.map_err(RelayError::Unreachable)?;
        debug!("userinfo response status={status} size={}", body.len());
        serde_json::from_slice(&body).map_err(RelayError::MalformedResponse)
    }
}
