use crate::axum::AuthError;
use crate::types::{Credential, CredentialExtractor, SecurityScheme};
use anyhow::{Context, Result, anyhow};
use http::HeaderMap;
use http::header::AUTHORIZATION;
use openidconnect::IssuerUrl;
use openidconnect::core::CoreProviderMetadata;
use tracing::info;
use url::Url;

/// Discovery document of the passwordless.id identity provider
pub const PASSWORDLESS_DISCOVERY_URL: &str =
    "https://api.passwordless.id/.well-known/openid-configuration";

const DISCOVERY_SUFFIX: &str = "/.well-known/openid-configuration";

/// Security scheme pointing at an OpenID Connect discovery document
///
/// Only checks that a non-empty Authorization header is present; the value
/// is not validated against the provider. The discovery URL is advertised to
/// API clients and can be used to locate the provider's endpoints.
#[derive(Debug, Clone)]
pub struct OpenIdConnectScheme {
    discovery_url: Url,
}

impl OpenIdConnectScheme {
    pub fn new(discovery_url: Url) -> Self {
        Self { discovery_url }
    }

    pub fn discovery_url(&self) -> &Url {
        &self.discovery_url
    }

    /// Issuer identifier derived from the discovery URL
    pub fn issuer(&self) -> Result<IssuerUrl> {
        let discovery = self.discovery_url.as_str();
        let issuer = discovery.strip_suffix(DISCOVERY_SUFFIX).ok_or_else(|| {
            anyhow!("discovery url {discovery} does not end with {DISCOVERY_SUFFIX}")
        })?;
        IssuerUrl::new(issuer.to_string())
            .with_context(|| format!("invalid issuer url {issuer}"))
    }

    /// Fetch the provider metadata and return its userinfo endpoint
    pub async fn discover_userinfo_endpoint(&self, http_client: &reqwest::Client) -> Result<Url> {
        let issuer_url = self.issuer()?;
        let metadata = CoreProviderMetadata::discover_async(issuer_url.clone(), http_client)
            .await
            .map_err(|e| {
                anyhow!(
                    "Failed to discover OIDC metadata from {}: {e:?}",
                    issuer_url
                )
            })?;
        let endpoint = metadata
            .userinfo_endpoint()
            .ok_or_else(|| anyhow!("provider {} does not advertise a userinfo endpoint", issuer_url))?
            .url()
            .clone();
        info!("discovered userinfo endpoint {endpoint}");
        Ok(endpoint)
    }
}

#[async_trait::async_trait]
impl CredentialExtractor for OpenIdConnectScheme {
    async fn extract(&self, headers: &HeaderMap) -> Result<Credential, AuthError> {
        match headers.get(AUTHORIZATION) {
            Some(value) if !value.is_empty() => Ok(Credential::new(value.clone())),
            _ => Err(AuthError::MissingCredentials),
        }
    }

    fn security_scheme(&self) -> SecurityScheme {
        SecurityScheme::OpenIdConnect {
            open_id_connect_url: self.discovery_url.to_string(),
        }
    }
}
