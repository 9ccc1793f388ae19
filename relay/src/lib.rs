//! Userinfo relay: forwards the caller's credential to an OpenID Connect
//! provider's userinfo endpoint and answers with the provider's json.

/// Router composition
pub mod app;

/// Command line configuration
pub mod config;

/// Errors surfaced to http callers
pub mod error;

/// Request logging middleware
pub mod observability;

/// OpenAPI document
pub mod openapi;

/// Outbound userinfo requests
pub mod relay;
