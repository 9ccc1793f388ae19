use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use userinfo_relay::{app::build_router, config::Cli, relay::UserInfoRelay};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("error waiting for ctrl-c: {e}");
        return;
    }
    info!("ctrl-c received, shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let userinfo_url = if args.discover_userinfo_endpoint {
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .with_context(|| "building discovery http client")?;
        let scheme = args.openid_connect_scheme();
        scheme
            .discover_userinfo_endpoint(&http_client)
            .await
            .with_context(|| format!("discovering userinfo endpoint from {}", scheme.discovery_url()))?
    } else {
        args.userinfo_url.clone()
    };
    let relay = Arc::new(UserInfoRelay::new(userinfo_url, args.upstream_timeout())?);
    info!("relaying to {}", relay.userinfo_url());
    let app = build_router(relay, args.credential_extractor());

    let listener = tokio::net::TcpListener::bind(args.listen_endpoint_http)
        .await
        .with_context(|| format!("binding {}", args.listen_endpoint_http))?;
    info!("Server running on {}", args.listen_endpoint_http);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
