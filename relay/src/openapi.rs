//! OpenAPI document describing the relay

use serde_json::{Value, json};
use userinfo_relay_auth::types::SecurityScheme;

/// Name of the scheme in `components.securitySchemes` when OIDC discovery is used
pub const OPENID_CONNECT_SCHEME_NAME: &str = "OpenIdConnect";
/// Name of the scheme in `components.securitySchemes` for plain bearer tokens
pub const HTTP_BEARER_SCHEME_NAME: &str = "HTTPBearer";

/// Builds the OpenAPI 3.1 document for the relay routes
///
/// `/userinfo` requires the security scheme the router was built with.
pub fn openapi_document(security_scheme: &SecurityScheme) -> Value {
    let scheme_name = match security_scheme {
        SecurityScheme::OpenIdConnect { .. } => OPENID_CONNECT_SCHEME_NAME,
        SecurityScheme::Http { .. } => HTTP_BEARER_SCHEME_NAME,
    };

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "userinfo-relay",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/userinfo": {
                "get": {
                    "summary": "Userinfo",
                    "operationId": "userinfo_userinfo_get",
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": { "schema": {} }
                            }
                        },
                        "403": { "description": "Not authenticated" }
                    },
                    "security": [{ scheme_name: [] }]
                }
            }
        },
        "components": {
            "securitySchemes": {
                scheme_name: security_scheme
            }
        }
    })
}
