//! Axum middleware for credential extraction
//!
//! Provides the middleware guarding relay routes:
//! 1. Runs the configured [`CredentialExtractor`] against the request headers
//! 2. Injects the resulting [`crate::types::Credential`] into request extensions
//! 3. Returns 403 Forbidden before the handler runs when no usable credential is present

use crate::types::CredentialExtractor;
use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Axum middleware for credential extraction
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use userinfo_relay_auth::axum::auth_middleware;
/// use userinfo_relay_auth::openid_connect::{OpenIdConnectScheme, PASSWORDLESS_DISCOVERY_URL};
/// use std::sync::Arc;
///
/// let discovery_url = PASSWORDLESS_DISCOVERY_URL.parse()?;
/// let extractor = Arc::new(OpenIdConnectScheme::new(discovery_url));
/// let app = Router::new()
///     .layer(middleware::from_fn(move |req, next| {
///         auth_middleware(extractor.clone(), req, next)
///     }));
/// ```
pub async fn auth_middleware(
    extractor: Arc<dyn CredentialExtractor>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();
    let credential = match extractor.extract(&parts.headers).await {
        Ok(credential) => credential,
        Err(e) => {
            warn!("rejecting request uri={}: {e}", parts.uri);
            return Err(e);
        }
    };
    debug!("credential extracted uri={}", parts.uri);

    // downstream handlers read it through the Extension extractor
    parts.extensions.insert(credential);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Authentication errors for HTTP responses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization header absent or empty
    #[error("Not authenticated")]
    MissingCredentials,
    /// Authorization header present but not in the scheme's expected shape
    #[error("Invalid authentication credentials")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
