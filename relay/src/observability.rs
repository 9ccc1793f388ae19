use axum::response::Response;
use axum::{extract::Request, middleware::Next};
use std::time::Instant;
use tracing::{Instrument, info, info_span};

/// Logs every request and the status it was answered with
///
/// Events emitted while the request is handled, auth rejections and upstream
/// failures included, are recorded inside a `request` span carrying method and uri.
pub async fn observability_middleware(request: Request, next: Next) -> Response {
    let span = info_span!("request", method = %request.method(), uri = %request.uri());
    async move {
        info!("request received");
        let begin = Instant::now();
        let response = next.run(request).await;
        info!(
            status = response.status().as_u16(),
            duration_ms = begin.elapsed().as_millis() as u64,
            "response sent"
        );
        response
    }
    .instrument(span)
    .await
}
