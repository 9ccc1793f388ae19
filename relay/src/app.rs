use crate::error::RelayError;
use crate::observability::observability_middleware;
use crate::openapi::openapi_document;
use crate::relay::UserInfoRelay;
use axum::{Extension, Json, Router, extract::State, middleware, routing::get};
use serde_json::Value;
use std::sync::Arc;
use userinfo_relay_auth::{
    axum::auth_middleware,
    types::{Credential, CredentialExtractor},
};

/// Relays the caller's credential to the identity provider
async fn get_userinfo(
    State(relay): State<Arc<UserInfoRelay>>,
    Extension(credential): Extension<Credential>,
) -> Result<Json<Value>, RelayError> {
    let user_info = relay.get_user_info(&credential.authorization).await?;
    Ok(Json(user_info))
}

/// Builds the application router
///
/// `/userinfo` is guarded by `extractor`: requests without a usable credential
/// are rejected before any outbound call. `/openapi.json` is public.
pub fn build_router(relay: Arc<UserInfoRelay>, extractor: Arc<dyn CredentialExtractor>) -> Router {
    let openapi = Arc::new(openapi_document(&extractor.security_scheme()));

    let userinfo_routes = Router::new()
        .route("/userinfo", get(get_userinfo))
        .route_layer(middleware::from_fn(move |req, next| {
            auth_middleware(extractor.clone(), req, next)
        }))
        .with_state(relay);

    let doc_routes = Router::new().route(
        "/openapi.json",
        get(move || {
            let openapi = openapi.clone();
            async move { Json((*openapi).clone()) }
        }),
    );

    Router::new()
        .merge(userinfo_routes)
        .merge(doc_routes)
        .layer(middleware::from_fn(observability_middleware))
}
