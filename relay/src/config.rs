//! Command line and environment configuration of the relay server

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use url::Url;
use userinfo_relay_auth::{
    bearer::BearerScheme,
    openid_connect::{OpenIdConnectScheme, PASSWORDLESS_DISCOVERY_URL},
    types::CredentialExtractor,
};

use crate::relay::PASSWORDLESS_USERINFO_URL;

/// Security scheme guarding the userinfo route
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuthSchemeKind {
    /// Any non-empty Authorization header, documented through OIDC discovery
    OpenidConnect,
    /// `Authorization: Bearer <token>` only
    Bearer,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "userinfo relay server")]
#[command(about = "Forwards bearer tokens to an OpenID Connect userinfo endpoint", version, author)]
pub struct Cli {
    #[arg(long, default_value = "0.0.0.0:8000", env = "USERINFO_RELAY_LISTEN_ENDPOINT")]
    pub listen_endpoint_http: SocketAddr,

    /// Userinfo endpoint the credential is forwarded to
    #[arg(long, default_value = PASSWORDLESS_USERINFO_URL, env = "USERINFO_RELAY_USERINFO_URL")]
    pub userinfo_url: Url,

    /// OpenID Connect discovery document of the identity provider
    #[arg(long, default_value = PASSWORDLESS_DISCOVERY_URL, env = "USERINFO_RELAY_DISCOVERY_URL")]
    pub discovery_url: Url,

    /// Resolve the userinfo endpoint from the discovery document at startup
    #[arg(long, env = "USERINFO_RELAY_DISCOVER_USERINFO_ENDPOINT")]
    pub discover_userinfo_endpoint: bool,

    #[arg(long, value_enum, default_value = "openid-connect", env = "USERINFO_RELAY_AUTH_SCHEME")]
    pub auth_scheme: AuthSchemeKind,

    /// Timeout of the outbound request, http client default when unset
    #[arg(long, env = "USERINFO_RELAY_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,

    #[arg(long, default_value = "info", env = "USERINFO_RELAY_LOG_LEVEL")]
    pub log_level: Level,
}

impl Cli {
    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }

    pub fn openid_connect_scheme(&self) -> OpenIdConnectScheme {
        OpenIdConnectScheme::new(self.discovery_url.clone())
    }

    /// Instantiates the configured security scheme
    pub fn credential_extractor(&self) -> Arc<dyn CredentialExtractor> {
        match self.auth_scheme {
            AuthSchemeKind::OpenidConnect => Arc::new(self.openid_connect_scheme()),
            AuthSchemeKind::Bearer => Arc::new(BearerScheme::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userinfo_relay_auth::types::SecurityScheme;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["userinfo-relay-srv"]).expect("parse");
        assert_eq!(cli.listen_endpoint_http, "0.0.0.0:8000".parse::<SocketAddr>().expect("addr"));
        assert_eq!(cli.userinfo_url.as_str(), PASSWORDLESS_USERINFO_URL);
        assert_eq!(cli.discovery_url.as_str(), PASSWORDLESS_DISCOVERY_URL);
        assert!(!cli.discover_userinfo_endpoint);
        assert_eq!(cli.auth_scheme, AuthSchemeKind::OpenidConnect);
        assert_eq!(cli.upstream_timeout(), None);
        assert_eq!(cli.log_level, Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "userinfo-relay-srv",
            "--userinfo-url",
            "https://idp.example.com/userinfo",
            "--auth-scheme",
            "bearer",
            "--upstream-timeout-secs",
            "5",
            "--log-level",
            "debug",
        ])
        .expect("parse");
        assert_eq!(cli.userinfo_url.as_str(), "https://idp.example.com/userinfo");
        assert_eq!(cli.auth_scheme, AuthSchemeKind::Bearer);
        assert_eq!(cli.upstream_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(cli.log_level, Level::DEBUG);
        let extractor = cli.credential_extractor();
        assert_eq!(
            extractor.security_scheme(),
            SecurityScheme::Http {
                scheme: "bearer".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = Cli::try_parse_from(["userinfo-relay-srv", "--userinfo-url", "not a url"]);
        assert!(result.is_err());
    }
}
