use userinfo_relay_auth::openid_connect::{OpenIdConnectScheme, PASSWORDLESS_DISCOVERY_URL};
use userinfo_relay_auth::types::{CredentialExtractor, SecurityScheme};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_metadata(issuer: &str) -> serde_json::Value {
    serde_json::json!({
        "issuer": issuer,
        "authorization_endpoint": format!("{issuer}/openid/authorize"),
        "token_endpoint": format!("{issuer}/openid/token"),
        "userinfo_endpoint": format!("{issuer}/openid/userinfo"),
        "jwks_uri": format!("{issuer}/openid/jwks"),
        "response_types_supported": ["code", "id_token"],
        "subject_types_supported": ["public"],
        "id_token_signing_alg_values_supported": ["RS256"]
    })
}

async fn mount_provider(server: &MockServer, metadata: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/.well-known/openid-configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metadata))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/openid/jwks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "keys": [] })))
        .mount(server)
        .await;
}

fn scheme_for(server: &MockServer) -> OpenIdConnectScheme {
    let discovery_url = format!("{}/.well-known/openid-configuration", server.uri());
    OpenIdConnectScheme::new(discovery_url.parse().expect("parse discovery url"))
}

#[test]
fn test_issuer_from_discovery_url() {
    let scheme = OpenIdConnectScheme::new(PASSWORDLESS_DISCOVERY_URL.parse().expect("parse"));
    let issuer = scheme.issuer().expect("issuer");
    assert_eq!(issuer.as_str(), "https://api.passwordless.id");
}

#[test]
fn test_issuer_requires_well_known_suffix() {
    let scheme = OpenIdConnectScheme::new("https://example.com/config".parse().expect("parse"));
    let err = scheme.issuer().expect_err("not a discovery url");
    assert!(err.to_string().contains("does not end with"));
}

#[test]
fn test_security_scheme_description() {
    let scheme = OpenIdConnectScheme::new(PASSWORDLESS_DISCOVERY_URL.parse().expect("parse"));
    assert_eq!(
        scheme.security_scheme(),
        SecurityScheme::OpenIdConnect {
            open_id_connect_url: PASSWORDLESS_DISCOVERY_URL.to_string()
        }
    );
    let json = serde_json::to_value(scheme.security_scheme()).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "type": "openIdConnect",
            "openIdConnectUrl": PASSWORDLESS_DISCOVERY_URL
        })
    );
}

#[tokio::test]
async fn test_discover_userinfo_endpoint() {
    let server = MockServer::start().await;
    mount_provider(&server, provider_metadata(&server.uri())).await;

    let scheme = scheme_for(&server);
    let endpoint = scheme
        .discover_userinfo_endpoint(&reqwest::Client::new())
        .await
        .expect("discover");
    assert_eq!(
        endpoint.as_str(),
        format!("{}/openid/userinfo", server.uri())
    );
}

#[tokio::test]
async fn test_discover_without_userinfo_endpoint() {
    let server = MockServer::start().await;
    let mut metadata = provider_metadata(&server.uri());
    metadata
        .as_object_mut()
        .expect("object")
        .remove("userinfo_endpoint");
    mount_provider(&server, metadata).await;

    let scheme = scheme_for(&server);
    let err = scheme
        .discover_userinfo_endpoint(&reqwest::Client::new())
        .await
        .expect_err("no userinfo endpoint");
    assert!(err.to_string().contains("does not advertise a userinfo endpoint"));
}

#[tokio::test]
async fn test_discover_unreachable_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/openid-configuration"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let scheme = scheme_for(&server);
    let result = scheme
        .discover_userinfo_endpoint(&reqwest::Client::new())
        .await;
    assert!(result.is_err());
}
