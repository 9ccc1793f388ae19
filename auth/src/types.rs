use crate::axum::AuthError;
use http::{HeaderMap, HeaderValue};
use serde::Serialize;

/// Credential extracted from an inbound request
///
/// Holds the `Authorization` header exactly as the caller sent it, so it can
/// be forwarded upstream byte for byte.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Raw value of the Authorization header
    pub authorization: HeaderValue,
}

impl Credential {
    pub fn new(authorization: HeaderValue) -> Self {
        Self { authorization }
    }
}

/// Security scheme as published in the OpenAPI `components.securitySchemes` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SecurityScheme {
    /// Credential described by an OpenID Connect discovery document
    #[serde(rename_all = "camelCase")]
    OpenIdConnect { open_id_connect_url: String },
    /// RFC 6750 bearer token
    Http { scheme: String },
}

/// Trait for security schemes
///
/// A scheme extracts (and possibly checks) the credential carried by an inbound
/// request. Implementations are plugged into the router through
/// [`crate::axum::auth_middleware`].
#[async_trait::async_trait]
pub trait CredentialExtractor: Send + Sync {
    /// Extract the credential from the request headers
    async fn extract(&self, headers: &HeaderMap) -> Result<Credential, AuthError>;

    /// Describe this scheme for API documentation
    fn security_scheme(&self) -> SecurityScheme;
}
