use crate::axum::AuthError;
use crate::types::{Credential, CredentialExtractor, SecurityScheme};
use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Security scheme requiring an `Authorization: Bearer <token>` header
///
/// Stricter than [`crate::openid_connect::OpenIdConnectScheme`]: the header
/// must use the bearer scheme (case-insensitive) and carry a non-empty token.
/// The token itself is not validated.
#[derive(Debug, Clone, Default)]
pub struct BearerScheme;

impl BearerScheme {
    pub fn new() -> Self {
        Self
    }
}

/// Splits `Bearer <token>` and returns the token if the scheme matches
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[async_trait::async_trait]
impl CredentialExtractor for BearerScheme {
    async fn extract(&self, headers: &HeaderMap) -> Result<Credential, AuthError> {
        let value = match headers.get(AUTHORIZATION) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(AuthError::MissingCredentials),
        };
        let header = value.to_str().map_err(|_| AuthError::InvalidCredentials)?;
        bearer_token(header).ok_or(AuthError::InvalidCredentials)?;
        Ok(Credential::new(value.clone()))
    }

    fn security_scheme(&self) -> SecurityScheme {
        SecurityScheme::Http {
            scheme: "bearer".to_string(),
        }
    }
}
