use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("userinfo endpoint unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("userinfo endpoint returned a body that is not json: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response<Body> {
        // details stay in the server log, the caller gets an opaque 500
        error!("{self:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
