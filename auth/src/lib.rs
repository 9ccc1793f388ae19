//! Security schemes for the userinfo relay
//!
//! This crate decides which inbound requests carry a usable credential before
//! they reach the relay handler. Two schemes are provided:
//!
//! - **OpenID Connect**: requires an Authorization header and advertises the
//!   provider's discovery document
//! - **Bearer**: requires an `Authorization: Bearer <token>` header
//!
//! Neither scheme validates the token; the identity provider does that when
//! the credential is forwarded.
//!
//! # Example
//!
//! ```rust
//! use userinfo_relay_auth::openid_connect::{OpenIdConnectScheme, PASSWORDLESS_DISCOVERY_URL};
//! use userinfo_relay_auth::types::CredentialExtractor;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let scheme = OpenIdConnectScheme::new(PASSWORDLESS_DISCOVERY_URL.parse()?);
//!
//! let mut headers = http::HeaderMap::new();
//! headers.insert(
//!     http::header::AUTHORIZATION,
//!     "Bearer short-lived-token".parse()?,
//! );
//!
//! let credential = scheme.extract(&headers).await?;
//! assert_eq!(credential.authorization, "Bearer short-lived-token");
//! # Ok(())
//! # }
//! ```

/// Credential and scheme types
pub mod types;

/// OpenID Connect discovery based scheme
pub mod openid_connect;

/// Bearer token scheme
pub mod bearer;

/// Axum middleware applying a scheme to a router
pub mod axum;
